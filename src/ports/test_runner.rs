//! Test runner port definition.

use crate::domain::{AppError, ExecutionContext, ValidatedRun};
use crate::ports::BuildLog;

/// Port for the external test-execution runner.
pub trait TestRunner {
    /// Execute the tests described by `run`.
    ///
    /// Returns `Ok(false)` when tests fail or the coverage threshold is not met.
    fn run(
        &self,
        run: &ValidatedRun<'_>,
        execution: &ExecutionContext,
        log: &mut dyn BuildLog,
    ) -> Result<bool, AppError>;
}
