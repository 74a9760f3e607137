//! Credential store port definition.

use crate::domain::{Credential, ProjectScope};

/// Port for the host's credential store.
///
/// Implementations only return credentials visible to the given project.
pub trait CredentialStore {
    /// Look up a credential by id.
    fn lookup(&self, scope: &ProjectScope, id: &str) -> Option<Credential>;

    /// All credentials visible to the project, in store order.
    fn list(&self, scope: &ProjectScope) -> Vec<Credential>;
}
