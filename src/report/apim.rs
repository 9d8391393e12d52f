//! APIM helper API client.
//!
//! # Responsibilities
//! - POST the preferred backend list to `/helpers/set-preferred-backends`
//! - Authenticate with the APIM subscription key
//! - Treat any non-2xx response as a failed report

use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const SET_PREFERRED_BACKENDS_PATH: &str = "/helpers/set-preferred-backends";
pub const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Body of the set-preferred-backends call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredBackendsReport {
    pub preferred_backends: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("report to {url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

pub struct ApimReporter {
    client: Client,
    url: String,
    subscription_key: String,
    timeout: Duration,
}

impl ApimReporter {
    pub fn new(client: Client, apim_url: &str, subscription_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            url: format!("{}{}", apim_url.trim_end_matches('/'), SET_PREFERRED_BACKENDS_PATH),
            subscription_key: subscription_key.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the report. Returns the response body on success.
    pub async fn send(&self, report: &PreferredBackendsReport) -> Result<String, ReportError> {
        let transport = |source| ReportError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .timeout(self.timeout)
            .json(report)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ReportError::Status {
                url: self.url.clone(),
                status,
                body,
            });
        }

        Ok(body)
    }
}
