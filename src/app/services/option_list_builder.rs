//! Selection lists for the credential and server URL fields.

use crate::domain::{CredentialKind, ListOption, ProjectScope};
use crate::ports::{CredentialStore, HostConnectionRegistry};

/// Credential choices visible to `scope`, led by an empty option.
///
/// Selection is an exact, case-sensitive match on the credential id.
pub fn build_credential_options(
    store: &(impl CredentialStore + ?Sized),
    scope: &ProjectScope,
    current_selection: Option<&str>,
) -> Vec<ListOption> {
    let mut options = vec![ListOption::empty()];

    for credential in store.list(scope) {
        let CredentialKind::UsernamePassword { username, .. } = &credential.kind else {
            continue;
        };
        let label = match credential.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => {
                format!("{} ({})", username, description)
            }
            _ => username.clone(),
        };
        let selected = current_selection == Some(credential.id.as_str());
        options.push(ListOption::new(label, credential.id, selected));
    }

    options
}

/// Server URL choices from the host connection registry, led by an empty option.
///
/// Blank URLs are skipped. Selection ignores case.
pub fn build_server_url_options(
    registry: &(impl HostConnectionRegistry + ?Sized),
    current_selection: Option<&str>,
) -> Vec<ListOption> {
    let wanted = current_selection.map(str::to_lowercase);
    let mut options = vec![ListOption::empty()];

    for connection in registry.list() {
        let Some(url) = connection.ces_url() else {
            continue;
        };
        let selected = wanted.as_deref() == Some(url.to_lowercase().as_str());
        options.push(ListOption::new(url, url, selected));
    }

    options
}
