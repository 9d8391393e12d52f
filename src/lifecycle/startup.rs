//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the shared HTTP client
//! - Wire prober, reporter, and scheduler from validated configuration
//! - Start the metrics exporter when enabled
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Config is validated before it reaches this module

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::ProberConfig;
use crate::cycle::{ReportingCycle, Scheduler};
use crate::observability::metrics;

const USER_AGENT: &str = concat!("latency-prober/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid metrics address '{address}': {source}")]
    MetricsAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Shared client for probes and reports. Per-request timeouts are applied
/// by the callers.
pub fn build_http_client() -> Result<reqwest::Client, StartupError> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Build the single-cycle runner.
pub fn build_cycle(config: &ProberConfig) -> Result<ReportingCycle, StartupError> {
    let client = build_http_client()?;
    Ok(ReportingCycle::from_config(config, client))
}

/// Build the repeating scheduler.
pub fn build_scheduler(config: &ProberConfig) -> Result<Scheduler, StartupError> {
    Ok(Scheduler::new(build_cycle(config)?, config.sleep_interval()))
}

/// Start the Prometheus exporter if enabled. Must run inside the runtime.
pub fn start_metrics(config: &ProberConfig) -> Result<(), StartupError> {
    if !config.observability.metrics_enabled {
        return Ok(());
    }
    let address = &config.observability.metrics_address;
    let addr = address.parse::<SocketAddr>().map_err(|source| StartupError::MetricsAddress {
        address: address.clone(),
        source,
    })?;
    metrics::init_metrics(addr)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn config(extra: &str) -> ProberConfig {
        parse_config(&format!(
            r#"
            aoai_api_version = "2024-02-01"
            apim_url = "https://apim.example.net"
            apim_api_key = "sub"
            sleep_timeout = 3
            {extra}

            [[endpoints]]
            endpoint = "east.example.net"
            deployment_name = "gpt"
            api_key = "k"
            backend_id = "east"
            "#
        ))
        .unwrap()
    }

    #[test]
    fn test_build_cycle_keeps_endpoint_order() {
        let cycle = build_cycle(&config("")).unwrap();
        assert_eq!(cycle.endpoints().len(), 1);
        assert_eq!(cycle.endpoints()[0].backend_id, "east");
    }

    #[test]
    fn test_bad_metrics_address() {
        let cfg = config("[observability]\nmetrics_enabled = true\nmetrics_address = \"nope\"");
        let err = start_metrics(&cfg).unwrap_err();
        assert!(matches!(err, StartupError::MetricsAddress { .. }));
    }

    #[tokio::test]
    async fn test_metrics_port_in_use_is_fatal() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = taken.local_addr().unwrap();

        let cfg = config(&format!(
            "[observability]\nmetrics_enabled = true\nmetrics_address = \"{}\"",
            address
        ));
        let err = start_metrics(&cfg).unwrap_err();
        assert!(matches!(err, StartupError::Metrics(_)), "got {err}");
    }

    #[test]
    fn test_metrics_disabled_is_noop() {
        assert!(start_metrics(&config("")).is_ok());
    }
}
