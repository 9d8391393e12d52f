//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define prober metrics (probe latency, timeouts, cycle outcomes, ranks)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `prober_probe_latency_seconds` (histogram): measured latency by backend
//! - `prober_probe_timeouts_total` (counter): timed-out probes by backend
//! - `prober_cycles_total` (counter): cycles by outcome
//! - `prober_cycle_duration_seconds` (histogram): successful cycle wall time
//! - `prober_backend_rank` (gauge): last reported position, 0 = fastest
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Labels are backend IDs, never hosts or keys

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Duration;

use crate::probe::Latency;

/// Install the Prometheus recorder and start its HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_probe(backend_id: &str, latency: &Latency) {
    match latency {
        Latency::Measured(d) => {
            histogram!("prober_probe_latency_seconds", "backend" => backend_id.to_string())
                .record(d.as_secs_f64());
        }
        Latency::TimedOut => {
            counter!("prober_probe_timeouts_total", "backend" => backend_id.to_string()).increment(1);
        }
    }
}

pub fn record_rank(backend_id: &str, rank: usize) {
    gauge!("prober_backend_rank", "backend" => backend_id.to_string()).set(rank as f64);
}

pub fn record_cycle(outcome: &'static str, elapsed: Duration) {
    counter!("prober_cycles_total", "outcome" => outcome).increment(1);
    histogram!("prober_cycle_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_cycle_failure(kind: &'static str) {
    counter!("prober_cycles_total", "outcome" => kind).increment(1);
}
