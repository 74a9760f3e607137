//! Live per-field checks used while a step is being configured.

use std::path::Path;

use serde::Serialize;

use crate::domain::step_error::{Field, MAX_ACCOUNTING_LEN};

/// Outcome of a single field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FormValidation {
    Ok,
    Error(String),
}

impl FormValidation {
    fn error(message: impl Into<String>) -> Self {
        FormValidation::Error(message.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FormValidation::Ok)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a field value against its form rule.
pub fn check_field(field: Field, value: &str) -> FormValidation {
    match field {
        Field::CcThreshold => check_cc_threshold(value),
        Field::EnvironmentId => check_environment_id(value),
        Field::ServerUrl => check_server_url(value),
        Field::CredentialsId => check_credentials_id(value),
        Field::ReportFolder => check_report_folder(value),
        Field::FolderPath => check_folder_path(value),
        Field::AccountInfo => check_account_info(value),
    }
}

pub fn check_cc_threshold(value: &str) -> FormValidation {
    const MESSAGE: &str = "Code coverage threshold must be a number between 0 and 100";
    match value.parse::<i32>() {
        Ok(percent) if (0..=100).contains(&percent) => FormValidation::Ok,
        _ => FormValidation::error(MESSAGE),
    }
}

pub fn check_environment_id(value: &str) -> FormValidation {
    if is_blank(value) {
        return FormValidation::error("Environment ID is required");
    }
    FormValidation::Ok
}

pub fn check_server_url(value: &str) -> FormValidation {
    if is_blank(value) {
        return FormValidation::error("CES server URL is required");
    }
    FormValidation::Ok
}

pub fn check_credentials_id(value: &str) -> FormValidation {
    if is_blank(value) {
        return FormValidation::error("Login credentials are required");
    }
    FormValidation::Ok
}

pub fn check_report_folder(value: &str) -> FormValidation {
    if is_blank(value) {
        return FormValidation::error("Report folder is required");
    }
    if Path::new(value).is_file() {
        return FormValidation::error("Report folder must be a directory, not a file");
    }
    FormValidation::Ok
}

pub fn check_folder_path(value: &str) -> FormValidation {
    if !is_blank(value) && Path::new(value).is_file() {
        return FormValidation::error("Test folder must be a directory, not a file");
    }
    FormValidation::Ok
}

pub fn check_account_info(value: &str) -> FormValidation {
    if !is_blank(value) && value.chars().count() > MAX_ACCOUNTING_LEN {
        return FormValidation::error(format!(
            "Accounting information must be {} characters or fewer",
            MAX_ACCOUNTING_LEN
        ));
    }
    FormValidation::Ok
}
