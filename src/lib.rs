//! ctstep: validate continuous-testing step parameters and dispatch runs to an external test runner.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, FormValidation, ListOption, OptionList, RunOptions, StepReport, check_field,
    option_list, run_step, run_step_with_log, validate_step,
};
pub use domain::{StepError, StepParameters, ValidationError};
