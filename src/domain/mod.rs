pub mod credentials;
pub mod error;
pub mod execution;
pub mod host_connection;
pub mod list_option;
pub mod parameters;
pub mod step_error;
pub mod validation;

pub use credentials::{Credential, CredentialKind, LoginInfo, ProjectScope, Secret};
pub use error::AppError;
pub use execution::{ExecutionContext, StepReport, ValidatedRun};
pub use host_connection::HostConnection;
pub use list_option::ListOption;
pub use parameters::{CoverageThreshold, StepParameters, StepParametersBuilder};
pub use step_error::{Field, MAX_ACCOUNTING_LEN, StepError, StepState, ValidationError};
pub use validation::FormValidation;
