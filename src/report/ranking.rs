//! Latency ranking.

use crate::probe::LatencySample;

/// Sort samples fastest first. The sort is stable, so equal latencies keep
/// configuration order and timed-out samples land last.
pub fn rank_samples(mut samples: Vec<LatencySample>) -> Vec<LatencySample> {
    samples.sort_by_key(|s| s.latency);
    samples
}

/// Project backend IDs out of ranked samples.
pub fn preferred_backends(ranked: &[LatencySample]) -> Vec<String> {
    ranked.iter().map(|s| s.backend_id.clone()).collect()
}
