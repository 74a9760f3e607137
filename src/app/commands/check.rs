//! Live form-field checks.

use crate::domain::validation;
use crate::domain::{AppError, Field, FormValidation};

/// Check `value` against the rule of the named field.
pub fn execute(field: &str, value: &str) -> Result<FormValidation, AppError> {
    let field = Field::parse(field).ok_or_else(|| AppError::UnknownField(field.to_string()))?;
    Ok(validation::check_field(field, value))
}
