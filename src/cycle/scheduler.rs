//! Repeating cycle scheduler.
//!
//! Runs a cycle, logs its outcome, sleeps a fixed interval, repeats.
//! Failures never stop the loop; only the shutdown signal does.

use std::time::Duration;
use tokio::time;
use tracing::Instrument;
use uuid::Uuid;

use crate::cycle::runner::ReportingCycle;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;

/// Counters accumulated over the scheduler's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerSummary {
    pub cycles: u64,
    pub failures: u64,
}

pub struct Scheduler {
    cycle: ReportingCycle,
    interval: Duration,
}

impl Scheduler {
    pub fn new(cycle: ReportingCycle, interval: Duration) -> Self {
        Self { cycle, interval }
    }

    pub async fn run(self, mut shutdown: ShutdownListener) -> SchedulerSummary {
        tracing::info!(
            endpoints = self.cycle.endpoints().len(),
            interval_secs = self.interval.as_secs_f64(),
            "Scheduler starting"
        );

        let mut summary = SchedulerSummary::default();
        let mut consecutive_failures: u64 = 0;

        loop {
            let cycle_id = Uuid::new_v4();
            let span = tracing::info_span!("cycle", %cycle_id);

            let outcome = tokio::select! {
                res = self.cycle.run_once().instrument(span) => res,
                _ = shutdown.wait() => {
                    tracing::info!("Scheduler received shutdown signal during cycle, exiting loop");
                    break;
                }
            };

            summary.cycles += 1;
            match outcome {
                Ok(report) => {
                    consecutive_failures = 0;
                    metrics::record_cycle("success", report.elapsed);
                    tracing::info!(
                        %cycle_id,
                        backends = ?report.preferred_backends,
                        timed_out = report.timed_out,
                        elapsed_ms = report.elapsed.as_millis() as u64,
                        "Cycle complete"
                    );
                }
                Err(e) => {
                    consecutive_failures += 1;
                    summary.failures += 1;
                    metrics::record_cycle_failure(e.kind());
                    tracing::error!(
                        %cycle_id,
                        consecutive_failures,
                        "An error occurred: {}",
                        e
                    );
                }
            }

            tracing::info!("next iteration in {} seconds", self.interval.as_secs_f64());

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = shutdown.wait() => {
                    tracing::info!("Scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        summary
    }
}
