//! Latency prober library.
//!
//! Probes chat-completion endpoints, ranks them by latency, and reports
//! the preferred backend order to an APIM helper API.

pub mod config;
pub mod cycle;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod report;

pub use config::ProberConfig;
pub use cycle::{CycleError, CycleReport, ReportingCycle, Scheduler};
pub use lifecycle::Shutdown;
