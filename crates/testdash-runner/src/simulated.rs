//! Scripted run simulation.

use std::time::Duration;

use testdash_core::error::RunnerError;
use testdash_core::traits::TestRunner;
use testdash_core::types::{wall_clock_time, LogEntry, LogLevel};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

struct ScriptStep {
    delay_secs: u64,
    level: LogLevel,
    step: &'static str,
    message: &'static str,
}

/// The fixed run script: an immediate start entry, then three timed
/// steps simulating setup, execution (with a synthetic warning), and
/// teardown.
const SCRIPT: [ScriptStep; 4] = [
    ScriptStep {
        delay_secs: 0,
        level: LogLevel::Info,
        step: "setup",
        message: "Test execution started",
    },
    ScriptStep {
        delay_secs: 1,
        level: LogLevel::Info,
        step: "execute",
        message: "Running test cases...",
    },
    ScriptStep {
        delay_secs: 2,
        level: LogLevel::Warn,
        step: "execute",
        message: "Network latency detected",
    },
    ScriptStep {
        delay_secs: 3,
        level: LogLevel::Info,
        step: "teardown",
        message: "Test completed successfully",
    },
];

/// Runner that simulates test execution with timed log entries.
///
/// Every step of a run carries the wall-clock time at which the run
/// started. Scheduled steps are independent tasks: starting another run
/// before earlier steps have fired leaves all timers running, with no
/// deduplication and no cancellation.
pub struct SimulatedRunner {
    entries: mpsc::UnboundedSender<LogEntry>,
}

impl SimulatedRunner {
    /// Number of entries one run produces.
    pub const STEP_COUNT: usize = SCRIPT.len();

    /// Create a runner delivering entries through `entries`.
    pub fn new(entries: mpsc::UnboundedSender<LogEntry>) -> Self {
        Self { entries }
    }
}

impl TestRunner for SimulatedRunner {
    fn start(&self, test_id: &str) -> Result<Uuid, RunnerError> {
        let run_id = Uuid::new_v4();
        let started = wall_clock_time();
        info!(%run_id, test_id, "Starting simulated run");

        for step in &SCRIPT {
            let entry = LogEntry::new(started.clone(), step.level, step.step, step.message);
            if step.delay_secs == 0 {
                self.entries
                    .send(entry)
                    .map_err(|_| RunnerError::ChannelClosed)?;
            } else {
                let entries = self.entries.clone();
                let delay = Duration::from_secs(step.delay_secs);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = entries.send(entry);
                });
            }
        }

        Ok(run_id)
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_script_emits_steps_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runner = SimulatedRunner::new(tx);
        runner.start("search-test").unwrap();

        // The start entry is delivered synchronously, before any timer.
        let start = rx.try_recv().unwrap();
        assert_eq!(start.level, LogLevel::Info);
        assert_eq!(start.step, "setup");
        assert_eq!(start.message, "Test execution started");

        let mut rest = Vec::new();
        for _ in 0..3 {
            rest.push(rx.recv().await.unwrap());
        }

        assert_eq!(
            rest.iter()
                .map(|e| (e.level, e.step.as_str()))
                .collect::<Vec<_>>(),
            vec![
                (LogLevel::Info, "execute"),
                (LogLevel::Warn, "execute"),
                (LogLevel::Info, "teardown"),
            ]
        );

        // Every entry carries the run's start time.
        assert!(rest.iter().all(|e| e.time == start.time));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_runs_keep_all_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runner = SimulatedRunner::new(tx);
        runner.start("search-test").unwrap();
        runner.start("login-test").unwrap();

        let mut entries = Vec::new();
        for _ in 0..2 * SimulatedRunner::STEP_COUNT {
            entries.push(rx.recv().await.unwrap());
        }

        // Two start entries and two of each scheduled step.
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.message == "Test execution started")
                .count(),
            2
        );
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.message == "Network latency detected")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_closed_channel_reports_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let runner = SimulatedRunner::new(tx);
        assert!(matches!(
            runner.start("search-test"),
            Err(RunnerError::ChannelClosed)
        ));
    }
}
