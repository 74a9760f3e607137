//! Pipeline step dispatch: validate, then hand off to the test runner.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::app::StepContext;
use crate::app::services::config_validator::validate_parameters;
use crate::domain::{ExecutionContext, StepError, StepParameters, StepReport, StepState};
use crate::ports::{BuildLog, CredentialStore, HostConnectionRegistry, TestRunner};

/// Name of the step as shown in build logs.
pub const DISPLAY_NAME: &str = "Continuous Test";

/// Execute the step.
///
/// Validation failures return [`StepError::Rejected`] without invoking the runner.
/// Runner errors and panics are logged, then returned with their cause.
pub fn execute<C, H, R>(
    ctx: &StepContext<C, H, R>,
    params: &StepParameters,
    execution: &ExecutionContext,
    log: &mut dyn BuildLog,
) -> Result<StepReport, StepError>
where
    C: CredentialStore,
    H: HostConnectionRegistry,
    R: TestRunner,
{
    debug!(state = %StepState::NotStarted, project = %execution.project, "step starting");
    log.println(&format!("Running {}", DISPLAY_NAME));
    log.println("");

    let validated = match validate_parameters(params, ctx.credentials(), &execution.project, log)
    {
        Ok(validated) => validated,
        Err(err) => {
            log.println(&err.to_string());
            debug!(state = %StepState::Rejected, field = %err.field(), "step rejected");
            return Err(StepError::Rejected(err));
        }
    };
    debug!(state = %StepState::Validated, "invoking test runner");

    let outcome =
        panic::catch_unwind(AssertUnwindSafe(|| ctx.runner().run(&validated, execution, log)));

    let result = match outcome {
        Ok(Ok(true)) => {
            log.println("Test Success...");
            Ok(StepReport {
                state: StepState::Succeeded,
                environment_id: params.environment_id().to_string(),
            })
        }
        Ok(Ok(false)) => {
            log.error("Test failure");
            Err(StepError::TestFailure)
        }
        Ok(Err(err)) => {
            log.println(&err.to_string());
            Err(StepError::Runner(Box::new(err)))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(%message, "test runner panicked");
            log.println(&message);
            Err(StepError::Unexpected(message))
        }
    };

    match &result {
        Ok(report) => debug!(state = %report.state, "step finished"),
        Err(err) => debug!(state = %err.state(), "step finished"),
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test runner panicked".to_string()
    }
}
