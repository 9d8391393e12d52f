//! Latency values and per-cycle samples.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use crate::config::EndpointConfig;

/// Outcome of timing one probe.
///
/// Ordered so that every measured value sorts before `TimedOut`, which
/// stands in for an infinite latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Measured(Duration),
    TimedOut,
}

impl Latency {
    /// Latency in seconds; `f64::INFINITY` for a timeout.
    pub fn as_secs_f64(&self) -> f64 {
        match self {
            Latency::Measured(d) => d.as_secs_f64(),
            Latency::TimedOut => f64::INFINITY,
        }
    }

    /// Latency in milliseconds; `f64::INFINITY` for a timeout.
    pub fn as_millis_f64(&self) -> f64 {
        self.as_secs_f64() * 1000.0
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, Latency::TimedOut)
    }
}

impl Ord for Latency {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Latency::Measured(a), Latency::Measured(b)) => a.cmp(b),
            (Latency::Measured(_), Latency::TimedOut) => Ordering::Less,
            (Latency::TimedOut, Latency::Measured(_)) => Ordering::Greater,
            (Latency::TimedOut, Latency::TimedOut) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Latency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Latency::Measured(_) => write!(f, "{:.1} ms", self.as_millis_f64()),
            Latency::TimedOut => write!(f, "inf ms"),
        }
    }
}

impl Serialize for Latency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Latency::Measured(_) => serializer.serialize_f64(self.as_secs_f64()),
            Latency::TimedOut => serializer.serialize_none(),
        }
    }
}

/// One endpoint's latency in one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencySample {
    pub endpoint: String,
    pub deployment_name: String,
    pub backend_id: String,
    /// Seconds; `null` when the probe timed out.
    pub latency: Latency,
}

impl LatencySample {
    pub fn new(config: &EndpointConfig, latency: Latency) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            deployment_name: config.deployment_name.clone(),
            backend_id: config.backend_id.clone(),
            latency,
        }
    }
}
