//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the prober.
//! All types derive Serde traits for deserialization from config files.

use serde::Deserialize;
use std::time::Duration;

/// Root configuration for the latency prober.
#[derive(Debug, Clone, Deserialize)]
pub struct ProberConfig {
    /// Endpoints to probe, in configuration order.
    pub endpoints: Vec<EndpointConfig>,

    /// `api-version` query parameter sent with every probe.
    pub aoai_api_version: String,

    /// Base URL of the APIM instance hosting the helper API.
    pub apim_url: String,

    /// APIM subscription key for the helper API.
    pub apim_api_key: String,

    /// Seconds to sleep between cycles.
    #[serde(default = "default_sleep_timeout")]
    pub sleep_timeout: u64,

    /// Probe request settings.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Report request settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Observability settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_sleep_timeout() -> u64 {
    10
}

impl ProberConfig {
    /// Interval between the end of one cycle and the start of the next.
    pub fn sleep_interval(&self) -> Duration {
        Duration::from_secs(self.sleep_timeout)
    }
}

/// A single chat-completion endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Host name (no scheme), e.g. "aoai-east.openai.azure.com".
    pub endpoint: String,

    /// Deployment name, also sent as the `model` field.
    pub deployment_name: String,

    /// Value of the `api-key` header.
    pub api_key: String,

    /// Label APIM uses for this backend.
    pub backend_id: String,
}

/// Probe request configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Probe timeout in seconds. Exceeding it yields an infinite latency.
    pub timeout_secs: u64,

    /// `max_tokens` in the chat payload.
    pub max_tokens: u32,

    /// URL scheme for endpoints ("https", or "http" for local simulators).
    pub scheme: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            max_tokens: 10,
            scheme: "https".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Report request configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Timeout for the set-preferred-backends call in seconds.
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
