//! Reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<LatencySample> (configuration order)
//!     → ranking.rs (stable sort, fastest first, timeouts last)
//!     → preferred backend IDs
//!     → apim.rs (POST {"preferredBackends": [...]} to APIM)
//! ```
//!
//! # Design Decisions
//! - The report is all-or-nothing: no partial lists are ever sent
//! - The APIM response body is logged but not interpreted

pub mod apim;
pub mod ranking;

pub use apim::{ApimReporter, PreferredBackendsReport, ReportError};
pub use ranking::{preferred_backends, rank_samples};
