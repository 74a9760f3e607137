//! Execution-time values passed between the dispatcher and the runner.

use std::path::PathBuf;

use crate::domain::credentials::{LoginInfo, ProjectScope};
use crate::domain::parameters::StepParameters;
use crate::domain::step_error::StepState;

/// Host-provided context of the build running the step.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub project: ProjectScope,
    pub workspace: PathBuf,
    pub build_number: Option<u64>,
}

impl ExecutionContext {
    pub fn new(project: ProjectScope, workspace: impl Into<PathBuf>) -> Self {
        Self { project, workspace: workspace.into(), build_number: None }
    }

    pub fn with_build_number(mut self, build_number: u64) -> Self {
        self.build_number = Some(build_number);
        self
    }
}

/// Parameters that passed validation, paired with the resolved login.
#[derive(Debug, Clone)]
pub struct ValidatedRun<'a> {
    pub parameters: &'a StepParameters,
    pub login: LoginInfo,
}

/// Result of a successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub state: StepState,
    pub environment_id: String,
}
