//! Cycle outcome types.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::probe::{LatencySample, ProbeError};
use crate::report::ReportError;

/// Successful cycle: the control plane accepted the ranking.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Samples fastest first.
    pub samples: Vec<LatencySample>,
    /// Backend IDs as sent to APIM.
    pub preferred_backends: Vec<String>,
    /// APIM response body.
    pub response: String,
    pub timed_out: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Failed cycle. No report was accepted by the control plane.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CycleError {
    /// Metric label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Probe(_) => "probe_error",
            CycleError::Report(_) => "report_error",
        }
    }
}

pub type CycleResult = Result<CycleReport, CycleError>;
