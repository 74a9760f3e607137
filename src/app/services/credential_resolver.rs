//! Credential resolution against the host credential store.

use crate::domain::{LoginInfo, ProjectScope};
use crate::ports::CredentialStore;

/// Resolve a credential id to a login for the invoking project.
///
/// Only username/password credentials resolve; other kinds yield `None`.
pub fn resolve_login(
    store: &(impl CredentialStore + ?Sized),
    scope: &ProjectScope,
    credentials_id: &str,
) -> Option<LoginInfo> {
    store.lookup(scope, credentials_id)?.login()
}
