//! Check command implementation.

use crate::app::api::{self, FormValidation};
use crate::domain::AppError;

pub fn run_check(field: &str, value: &str) -> Result<i32, AppError> {
    match api::check_field(field, value)? {
        FormValidation::Ok => {
            println!("OK");
            Ok(0)
        }
        FormValidation::Error(message) => {
            eprintln!("Error: {}", message);
            Ok(1)
        }
    }
}
