use std::io;

use thiserror::Error;

use crate::domain::step_error::StepError;

/// Library-wide error type for ctstep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Step configuration file missing.
    #[error("Step config not found: {0}")]
    StepConfigMissing(String),

    /// Code coverage threshold outside 0..=100.
    #[error("Invalid code coverage threshold '{0}': must be an integer between 0 and 100")]
    InvalidThreshold(String),

    /// Server URL could not be parsed before launching the runner.
    #[error("Invalid CES server URL '{url}': {details}")]
    InvalidServerUrl { url: String, details: String },

    /// No runner program configured in the global configuration.
    #[error("No test runner configured. Add a [runner] program to the global config.")]
    RunnerNotConfigured,

    /// Runner process could not be started.
    #[error("Failed to launch test runner '{program}': {details}")]
    RunnerLaunch { program: String, details: String },

    /// Unknown form field name.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// The pipeline step failed.
    #[error(transparent)]
    Step(#[from] StepError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidThreshold(_)
            | AppError::InvalidServerUrl { .. }
            | AppError::UnknownField(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::StepConfigMissing(_) | AppError::RunnerNotConfigured => {
                io::ErrorKind::NotFound
            }
            AppError::RunnerLaunch { .. } | AppError::Step(_) => io::ErrorKind::Other,
        }
    }
}
