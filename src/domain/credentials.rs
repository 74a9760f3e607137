//! Credential records and project scoping.

use std::fmt;

use serde::Deserialize;

/// A secret value that never appears in debug output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// Full name of the project invoking the step, e.g. `team/app/nightly`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectScope(String);

impl ProjectScope {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name: String = full_name.into();
        Self(full_name.trim_matches('/').to_string())
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// Whether a credential scoped to `folder` is visible from this project.
    pub fn is_within(&self, folder: &str) -> bool {
        let folder = folder.trim_matches('/');
        if folder.is_empty() {
            return true;
        }
        self.0 == folder
            || self.0.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() { f.write_str("<root>") } else { f.write_str(&self.0) }
    }
}

/// Shape of a stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialKind {
    UsernamePassword { username: String, password: Secret },
    SecretText { secret: Secret },
}

/// A credential record as provided by a credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub id: String,
    pub description: Option<String>,
    pub kind: CredentialKind,
    /// Folders the credential is visible in. Empty means global.
    pub folders: Vec<String>,
}

impl Credential {
    pub fn username_password(
        id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: None,
            kind: CredentialKind::UsernamePassword {
                username: username.into(),
                password: Secret::new(password),
            },
            folders: Vec::new(),
        }
    }

    pub fn secret_text(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            kind: CredentialKind::SecretText { secret: Secret::new(secret) },
            folders: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folders.push(folder.into());
        self
    }

    pub fn is_visible_to(&self, scope: &ProjectScope) -> bool {
        self.folders.is_empty() || self.folders.iter().any(|folder| scope.is_within(folder))
    }

    /// Username and password, if this is a username/password credential.
    pub fn login(&self) -> Option<LoginInfo> {
        match &self.kind {
            CredentialKind::UsernamePassword { username, password } => {
                Some(LoginInfo { username: username.clone(), password: password.clone() })
            }
            CredentialKind::SecretText { .. } => None,
        }
    }
}

/// Resolved login for the CES server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInfo {
    pub username: String,
    pub password: Secret,
}
