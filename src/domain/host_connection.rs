use serde::Deserialize;

/// A host connection from the global configuration.
///
/// Only the server URL is read. Other connection keys (`description`, `host_port`, ...)
/// are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostConnection {
    /// Repository/test-execution server URL.
    #[serde(default)]
    pub ces_url: Option<String>,
}

impl HostConnection {
    pub fn with_ces_url(ces_url: impl Into<String>) -> Self {
        Self { ces_url: Some(ces_url.into()) }
    }

    /// The CES URL, if one is set and not blank.
    pub fn ces_url(&self) -> Option<&str> {
        self.ces_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
