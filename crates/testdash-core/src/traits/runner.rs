//! Test runner trait definition.

use crate::error::RunnerError;
use uuid::Uuid;

/// Trait for test execution backends.
///
/// A runner delivers log entries through the channel it was constructed
/// with; `start` returns as soon as the run is scheduled.
pub trait TestRunner: Send + Sync {
    /// Start a run of the given test. Returns the run id.
    fn start(&self, test_id: &str) -> Result<Uuid, RunnerError>;

    /// Get the runner name.
    fn name(&self) -> &str;
}
