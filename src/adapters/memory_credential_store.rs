use crate::domain::{Credential, ProjectScope};
use crate::ports::CredentialStore;

/// Credential store backed by an in-memory list, usually loaded from the global config.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    credentials: Vec<Credential>,
}

impl MemoryCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn lookup(&self, scope: &ProjectScope, id: &str) -> Option<Credential> {
        self.credentials.iter().find(|c| c.id == id && c.is_visible_to(scope)).cloned()
    }

    fn list(&self, scope: &ProjectScope) -> Vec<Credential> {
        self.credentials.iter().filter(|c| c.is_visible_to(scope)).cloned().collect()
    }
}
