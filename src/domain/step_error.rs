//! Typed failures for parameter validation and step dispatch.

use std::fmt;

use thiserror::Error;

use crate::domain::AppError;

/// Maximum length of the accounting information field.
pub const MAX_ACCOUNTING_LEN: usize = 52;

/// Configurable fields of the continuous-testing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EnvironmentId,
    FolderPath,
    ServerUrl,
    CredentialsId,
    CcThreshold,
    ReportFolder,
    AccountInfo,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::EnvironmentId,
        Field::FolderPath,
        Field::ServerUrl,
        Field::CredentialsId,
        Field::CcThreshold,
        Field::ReportFolder,
        Field::AccountInfo,
    ];

    /// Field name as it appears in build logs and form bindings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EnvironmentId => "environmentId",
            Field::FolderPath => "folderPath",
            Field::ServerUrl => "serverUrl",
            Field::CredentialsId => "credentialsId",
            Field::CcThreshold => "ccThreshold",
            Field::ReportFolder => "reportFolder",
            Field::AccountInfo => "accountInfo",
        }
    }

    /// Parse a field name. Accepts the camelCase form and the snake_case config key.
    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| {
            field.as_str().eq_ignore_ascii_case(name) || field.config_key() == name
        })
    }

    /// Key used for the field in `ctstep.toml`.
    pub fn config_key(&self) -> &'static str {
        match self {
            Field::EnvironmentId => "environment_id",
            Field::FolderPath => "folder_path",
            Field::ServerUrl => "server_url",
            Field::CredentialsId => "credentials_id",
            Field::CcThreshold => "cc_threshold",
            Field::ReportFolder => "report_folder",
            Field::AccountInfo => "account_info",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a parameter bundle was rejected before any runner invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    MissingParameter(Field),

    #[error("Credential ID entered is not valid - enter a valid ID from the credential store")]
    InvalidCredential(String),

    #[error("Entered accounting information is greater than {max} characters.")]
    FieldTooLong { field: Field, max: usize, actual: usize },
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingParameter(field) => *field,
            ValidationError::InvalidCredential(_) => Field::CredentialsId,
            ValidationError::FieldTooLong { field, .. } => *field,
        }
    }
}

fn missing_message(field: &Field) -> String {
    match field {
        Field::EnvironmentId => "Missing parameter Environment Id - please get the environment ID from the repository server".to_string(),
        Field::ServerUrl => "Missing parameter CES server URL - please use the host connection configuration to configure".to_string(),
        Field::CredentialsId => "Missing Credentials ID - configure the step correctly".to_string(),
        other => format!("Missing parameter {}", other),
    }
}

/// Dispatch states of a single step invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    NotStarted,
    Validated,
    Rejected,
    Succeeded,
    Failed,
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepState::NotStarted => "not started",
            StepState::Validated => "validated",
            StepState::Rejected => "rejected",
            StepState::Succeeded => "succeeded",
            StepState::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Failure of a pipeline step, carrying its original cause.
#[derive(Debug, Error)]
pub enum StepError {
    /// Parameters were rejected; the runner was never invoked.
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    /// The runner completed and reported failing tests or a threshold breach.
    #[error("Test failure")]
    TestFailure,

    /// The runner returned an error.
    #[error(transparent)]
    Runner(Box<AppError>),

    /// The runner panicked.
    #[error("Unexpected failure in test runner: {0}")]
    Unexpected(String),
}

impl StepError {
    /// Terminal state reached by the failed step.
    pub fn state(&self) -> StepState {
        match self {
            StepError::Rejected(_) => StepState::Rejected,
            StepError::TestFailure | StepError::Runner(_) | StepError::Unexpected(_) => {
                StepState::Failed
            }
        }
    }
}
