//! Validation-only dry run of a step.

use crate::app::services::config_validator::validate_parameters;
use crate::domain::{ExecutionContext, StepError, StepParameters};
use crate::ports::{BuildLog, CredentialStore};

/// Validate parameters without invoking the runner.
pub fn execute<C: CredentialStore>(
    credentials: &C,
    params: &StepParameters,
    execution: &ExecutionContext,
    log: &mut dyn BuildLog,
) -> Result<(), StepError> {
    match validate_parameters(params, credentials, &execution.project, log) {
        Ok(_) => {
            log.println("Parameters are valid");
            Ok(())
        }
        Err(err) => {
            log.println(&err.to_string());
            Err(StepError::Rejected(err))
        }
    }
}
