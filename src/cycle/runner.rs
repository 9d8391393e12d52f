//! One measure-rank-report cycle.
//!
//! # Responsibilities
//! - Probe every configured endpoint sequentially, in configuration order
//! - Rank the samples and log them fastest first
//! - Send the preferred backend list to APIM

use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::{EndpointConfig, ProberConfig};
use crate::cycle::types::{CycleReport, CycleResult};
use crate::observability::metrics;
use crate::probe::{EndpointProber, LatencySample};
use crate::report::{preferred_backends, rank_samples, ApimReporter, PreferredBackendsReport};

pub struct ReportingCycle {
    endpoints: Vec<EndpointConfig>,
    prober: EndpointProber,
    reporter: ApimReporter,
}

impl ReportingCycle {
    pub fn new(endpoints: Vec<EndpointConfig>, prober: EndpointProber, reporter: ApimReporter) -> Self {
        Self {
            endpoints,
            prober,
            reporter,
        }
    }

    /// Build the prober and reporter from configuration, sharing one client.
    pub fn from_config(config: &ProberConfig, client: Client) -> Self {
        let prober = EndpointProber::new(client.clone(), &config.aoai_api_version, config.probe.clone());
        let reporter = ApimReporter::new(
            client,
            &config.apim_url,
            &config.apim_api_key,
            Duration::from_secs(config.report.timeout_secs),
        );
        Self::new(config.endpoints.clone(), prober, reporter)
    }

    pub fn endpoints(&self) -> &[EndpointConfig] {
        &self.endpoints
    }

    /// Run one cycle. The first probe error abandons the cycle before
    /// anything is reported.
    pub async fn run_once(&self) -> CycleResult {
        let start = Instant::now();

        let mut samples = Vec::with_capacity(self.endpoints.len());
        for endpoint in &self.endpoints {
            let latency = self.prober.measure(endpoint).await?;
            samples.push(LatencySample::new(endpoint, latency));
        }

        let ranked = rank_samples(samples);
        for (rank, sample) in ranked.iter().enumerate() {
            tracing::info!(
                endpoint = %sample.endpoint,
                deployment = %sample.deployment_name,
                latency_ms = sample.latency.as_millis_f64(),
                "    {}: {} : {}",
                sample.endpoint,
                sample.deployment_name,
                sample.latency
            );
            metrics::record_rank(&sample.backend_id, rank);
        }

        let report = PreferredBackendsReport {
            preferred_backends: preferred_backends(&ranked),
        };
        let response = self.reporter.send(&report).await?;
        tracing::info!(response = %response, "Updated APIM with preferred backends");

        Ok(CycleReport {
            timed_out: ranked.iter().filter(|s| s.latency.is_timed_out()).count(),
            samples: ranked,
            preferred_backends: report.preferred_backends,
            response,
            elapsed: start.elapsed(),
        })
    }
}
