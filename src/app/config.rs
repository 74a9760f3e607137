//! Step and global configuration files.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, CoverageThreshold, Credential, CredentialKind, HostConnection, Secret, StepParameters};

/// File name of the step configuration inside a workspace.
pub const STEP_CONFIG_FILE: &str = "ctstep.toml";

/// Environment variable overriding the global configuration directory.
pub const HOME_ENV: &str = "CTSTEP_HOME";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepFile {
    step: StepSection,
}

/// `[step]` table of `ctstep.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepSection {
    #[serde(default)]
    environment_id: String,
    #[serde(default)]
    folder_path: String,
    #[serde(default)]
    server_url: String,
    #[serde(default)]
    credentials_id: String,
    recursive: Option<bool>,
    stop_if_test_fails_or_threshold_reached: Option<bool>,
    upload_to_server: Option<bool>,
    halt_at_failure: Option<bool>,
    cc_threshold: Option<i64>,
    sonar_version: Option<String>,
    source_folder: Option<String>,
    report_folder: Option<String>,
    account_info: Option<String>,
}

impl StepSection {
    fn into_parameters(self) -> Result<StepParameters, AppError> {
        let mut builder = StepParameters::builder(
            self.environment_id,
            self.folder_path,
            self.server_url,
            self.credentials_id,
        )
        .sonar_version(self.sonar_version);

        if let Some(value) = self.recursive {
            builder = builder.recursive(value);
        }
        if let Some(value) = self.stop_if_test_fails_or_threshold_reached {
            builder = builder.stop_if_test_fails_or_threshold_reached(value);
        }
        if let Some(value) = self.upload_to_server {
            builder = builder.upload_to_server(value);
        }
        if let Some(value) = self.halt_at_failure {
            builder = builder.halt_at_failure(value);
        }
        if let Some(value) = self.cc_threshold {
            builder = builder.cc_threshold(CoverageThreshold::new(value)?);
        }
        if let Some(value) = self.source_folder {
            builder = builder.source_folder(value);
        }
        if let Some(value) = self.report_folder {
            builder = builder.report_folder(value);
        }
        if let Some(value) = self.account_info {
            builder = builder.account_info(value);
        }

        Ok(builder.build())
    }
}

/// Parse step parameters from `ctstep.toml` content.
pub fn parse_step_config(content: &str) -> Result<StepParameters, AppError> {
    let file: StepFile = toml::from_str(content)?;
    file.step.into_parameters()
}

/// Load step parameters from a file.
pub fn load_step_config(path: &Path) -> Result<StepParameters, AppError> {
    if !path.is_file() {
        return Err(AppError::StepConfigMissing(path.display().to_string()));
    }
    debug!(path = %path.display(), "loading step config");
    let content = std::fs::read_to_string(path)?;
    parse_step_config(&content)
}

/// External runner command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum CredentialEntryKind {
    #[default]
    UsernamePassword,
    SecretText,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CredentialEntry {
    id: String,
    #[serde(default)]
    kind: CredentialEntryKind,
    username: Option<String>,
    password: Option<Secret>,
    secret: Option<Secret>,
    description: Option<String>,
    #[serde(default)]
    folders: Vec<String>,
}

impl CredentialEntry {
    fn into_credential(self) -> Result<Credential, AppError> {
        let kind = match self.kind {
            CredentialEntryKind::UsernamePassword => CredentialKind::UsernamePassword {
                username: self.username.ok_or_else(|| {
                    AppError::config_error(format!("Credential '{}' is missing a username", self.id))
                })?,
                password: self.password.unwrap_or_else(|| Secret::new("")),
            },
            CredentialEntryKind::SecretText => CredentialKind::SecretText {
                secret: self.secret.ok_or_else(|| {
                    AppError::config_error(format!("Credential '{}' is missing a secret", self.id))
                })?,
            },
        };
        Ok(Credential { id: self.id, description: self.description, kind, folders: self.folders })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GlobalFile {
    #[serde(default)]
    host_connections: Vec<HostConnection>,
    #[serde(default)]
    credentials: Vec<CredentialEntry>,
    runner: Option<RunnerConfig>,
}

/// Host-level configuration shared by all steps.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    pub host_connections: Vec<HostConnection>,
    pub credentials: Vec<Credential>,
    pub runner: Option<RunnerConfig>,
}

/// Parse global configuration content.
pub fn parse_global_config(content: &str) -> Result<GlobalConfig, AppError> {
    let file: GlobalFile = toml::from_str(content)?;
    let credentials = file
        .credentials
        .into_iter()
        .map(CredentialEntry::into_credential)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GlobalConfig { host_connections: file.host_connections, credentials, runner: file.runner })
}

/// Default location of the global configuration file.
///
/// `$CTSTEP_HOME/config.toml`, falling back to `$HOME/.ctstep/config.toml`.
pub fn default_global_config_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home).join("config.toml"));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".ctstep").join("config.toml"))
}

/// Load the global configuration.
///
/// An explicit path must exist. A missing default file yields an empty configuration.
pub fn load_global_config(explicit: Option<&Path>) -> Result<GlobalConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Global config not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_global_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("no global config found, using empty registries");
                return Ok(GlobalConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "loading global config");
    let content = std::fs::read_to_string(&path)?;
    parse_global_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_config_parses_from_toml() {
        let toml = r#"
[step]
environment_id = "ENV1"
folder_path = "tests"
server_url = "http://ces:2020"
credentials_id = "cred1"
recursive = false
upload_to_server = true
cc_threshold = 65
sonar_version = "6"
account_info = "ACCT"
"#;
        let params = parse_step_config(toml).unwrap();
        assert_eq!(params.environment_id(), "ENV1");
        assert_eq!(params.folder_path(), "tests");
        assert!(!params.recursive());
        assert!(params.upload_to_server());
        assert_eq!(params.cc_threshold().percent(), 65);
        assert_eq!(params.sonar_version(), Some("6"));
        assert_eq!(params.report_folder(), "TTTReport");
        assert_eq!(params.account_info(), "ACCT");
    }

    #[test]
    fn step_config_uses_defaults_for_missing_fields() {
        let params = parse_step_config("[step]\n").unwrap();
        assert_eq!(params.environment_id(), "");
        assert!(params.recursive());
        assert_eq!(params.source_folder(), "COBOL");
    }

    #[test]
    fn step_config_rejects_out_of_range_threshold() {
        let err = parse_step_config("[step]\ncc_threshold = 150\n").unwrap_err();
        assert!(matches!(err, AppError::InvalidThreshold(_)));
    }

    #[test]
    fn step_config_rejects_unknown_keys() {
        let err = parse_step_config("[step]\nenvironment = \"x\"\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn global_config_parses_connections_credentials_and_runner() {
        let toml = r#"
[[host_connections]]
description = "Test LPAR"
host_port = "lpar1:16196"
ces_url = "http://ces:2020"

[[credentials]]
id = "cred1"
username = "alice"
password = "pw"
description = "CI user"
folders = ["team"]

[[credentials]]
id = "token"
kind = "secret_text"
secret = "abc"

[runner]
program = "ttcli"
args = ["--batch"]
"#;
        let config = parse_global_config(toml).unwrap();
        assert_eq!(config.host_connections.len(), 1);
        assert_eq!(config.host_connections[0].ces_url(), Some("http://ces:2020"));
        assert_eq!(config.credentials.len(), 2);
        assert_eq!(config.credentials[0].folders, vec!["team"]);
        assert!(config.credentials[0].login().is_some());
        assert!(config.credentials[1].login().is_none());
        assert_eq!(
            config.runner,
            Some(RunnerConfig { program: "ttcli".into(), args: vec!["--batch".into()] })
        );
    }

    #[test]
    fn username_password_entry_requires_username() {
        let err = parse_global_config("[[credentials]]\nid = \"c\"\npassword = \"pw\"\n")
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn explicit_missing_global_config_is_an_error() {
        let err = load_global_config(Some(Path::new("/no/such/ctstep.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
