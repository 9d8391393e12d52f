//! Endpoint probing subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointConfig
//!     → prober.rs (timed chat-completion POST, bounded max_tokens)
//!     → Latency::Measured(elapsed) | Latency::TimedOut | ProbeError
//!     → latency.rs (LatencySample for ranking)
//! ```
//!
//! # Design Decisions
//! - Probes measure the full response, not time to first token
//! - A timeout is a value (infinite latency), not an error
//! - One probe in flight at a time; the caller drives ordering

pub mod latency;
pub mod payload;
pub mod prober;

pub use latency::{Latency, LatencySample};
pub use prober::{EndpointProber, ProbeError};
