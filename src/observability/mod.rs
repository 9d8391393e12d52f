//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! prober, reporter, scheduler produce:
//!     → logging.rs (structured log events, one span per cycle)
//!     → metrics.rs (histograms, counters, gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
