//! Endpoint latency measurement.
//!
//! # Responsibilities
//! - Issue one bounded chat-completion request per endpoint
//! - Time the full exchange (send + body read)
//! - Map a timeout to `Latency::TimedOut`; surface everything else as an error

use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use tokio::time;

use crate::config::{EndpointConfig, ProbeConfig};
use crate::observability::metrics;
use crate::probe::latency::Latency;
use crate::probe::payload::ChatCompletionRequest;

/// Non-timeout probe failures. These abandon the current cycle.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("probe to {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: StatusCode,
        body: String,
    },
}

pub struct EndpointProber {
    client: Client,
    api_version: String,
    settings: ProbeConfig,
}

impl EndpointProber {
    pub fn new(client: Client, api_version: impl Into<String>, settings: ProbeConfig) -> Self {
        Self {
            client,
            api_version: api_version.into(),
            settings,
        }
    }

    /// Chat-completions URL for one deployment on one host.
    pub fn probe_url(&self, endpoint: &str, deployment_name: &str) -> String {
        format!(
            "{}://{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.scheme, endpoint, deployment_name, self.api_version
        )
    }

    /// Measure one endpoint.
    pub async fn measure(&self, endpoint: &EndpointConfig) -> Result<Latency, ProbeError> {
        let url = self.probe_url(&endpoint.endpoint, &endpoint.deployment_name);
        let body = ChatCompletionRequest::probe(&endpoint.deployment_name, self.settings.max_tokens);

        tracing::debug!(url = %url, backend_id = %endpoint.backend_id, "Probing endpoint");

        let start = Instant::now();
        let request = self
            .client
            .post(url)
            .header("api-key", &endpoint.api_key)
            .json(&body)
            .send();

        let exchange = async {
            let response = request.await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, reqwest::Error>((status, text))
        };

        let latency = match time::timeout(self.settings.timeout(), exchange).await {
            Ok(Ok((status, _))) if status.is_success() => Latency::Measured(start.elapsed()),
            Ok(Ok((status, body))) => {
                return Err(ProbeError::Status {
                    endpoint: endpoint.endpoint.clone(),
                    status,
                    body,
                });
            }
            Ok(Err(e)) if e.is_timeout() => Latency::TimedOut,
            Ok(Err(e)) => {
                return Err(ProbeError::Transport {
                    endpoint: endpoint.endpoint.clone(),
                    source: e,
                });
            }
            Err(_) => Latency::TimedOut,
        };

        if latency.is_timed_out() {
            tracing::warn!(
                endpoint = %endpoint.endpoint,
                timeout_secs = self.settings.timeout_secs,
                "Request timed out"
            );
        }
        metrics::record_probe(&endpoint.backend_id, &latency);

        Ok(latency)
    }
}
