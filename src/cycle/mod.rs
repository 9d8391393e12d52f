//! Reporting cycle subsystem.
//!
//! # Data Flow
//! ```text
//! scheduler.rs (loop until shutdown)
//!     → runner.rs: probe each endpoint in order
//!         → ProbeError? abandon cycle (CycleError::Probe)
//!     → rank samples, POST to APIM
//!         → non-2xx? CycleError::Report
//!     → CycleReport
//!     → log outcome, sleep fixed interval, repeat
//! ```
//!
//! # Design Decisions
//! - Probe timeouts are values inside the report, other failures are errors
//! - No cap on consecutive failures; they are counted and logged
//! - Fixed sleep after every attempt, no backoff

pub mod runner;
pub mod scheduler;
pub mod types;

pub use runner::ReportingCycle;
pub use scheduler::{Scheduler, SchedulerSummary};
pub use types::{CycleError, CycleReport, CycleResult};
