//! Gate checks run before any test execution.

use tracing::debug;

use crate::app::services::credential_resolver::resolve_login;
use crate::domain::{
    Field, MAX_ACCOUNTING_LEN, ProjectScope, StepParameters, ValidatedRun, ValidationError,
};
use crate::ports::{BuildLog, CredentialStore};

/// Validate step parameters in fixed order, writing a progress line per accepted field.
///
/// Order: environment id, server URL, credentials, accounting info. The first failing
/// check is returned.
pub fn validate_parameters<'a>(
    params: &'a StepParameters,
    credentials: &(impl CredentialStore + ?Sized),
    scope: &ProjectScope,
    log: &mut dyn BuildLog,
) -> Result<ValidatedRun<'a>, ValidationError> {
    if params.environment_id().is_empty() {
        return Err(ValidationError::MissingParameter(Field::EnvironmentId));
    }
    log.println(&format!("environmentId = {}", params.environment_id()));

    if params.server_url().is_empty() {
        return Err(ValidationError::MissingParameter(Field::ServerUrl));
    }
    log.println(&format!("serverUrl = {}", params.server_url()));

    if params.credentials_id().is_empty() {
        return Err(ValidationError::MissingParameter(Field::CredentialsId));
    }
    let login = resolve_login(credentials, scope, params.credentials_id())
        .ok_or_else(|| ValidationError::InvalidCredential(params.credentials_id().to_string()))?;
    log.println("Credentials entered...");

    let account_len = params.account_info().chars().count();
    if account_len > MAX_ACCOUNTING_LEN {
        return Err(ValidationError::FieldTooLong {
            field: Field::AccountInfo,
            max: MAX_ACCOUNTING_LEN,
            actual: account_len,
        });
    }

    log.println(&format!("ccThreshold = {}", params.cc_threshold()));
    debug!(project = %scope, environment_id = params.environment_id(), "parameters validated");

    Ok(ValidatedRun { parameters: params, login })
}
