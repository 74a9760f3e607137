//! Shared testing utilities for ctstep CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Step config accepted by the default global config.
pub const VALID_STEP: &str = r#"[step]
environment_id = "ENV1"
folder_path = "tests"
server_url = "http://ces:2020"
credentials_id = "cred1"
cc_threshold = 70
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ctstep` binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ctstep").expect("Failed to locate ctstep binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("CTSTEP_HOME");
        cmd
    }

    /// Path of the global config under the emulated `$HOME`.
    pub fn global_config_path(&self) -> PathBuf {
        self.home().join(".ctstep").join("config.toml")
    }

    /// Write `ctstep.toml` into the workspace.
    pub fn write_step_config(&self, content: &str) {
        fs::write(self.work_dir.join("ctstep.toml"), content).expect("Failed to write step config");
    }

    /// Write the global config under the emulated `$HOME`.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create config dir");
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Write a global config with two connections, one credential and a shell runner script.
    pub fn write_default_global_config(&self, runner_script: &str) {
        let script = runner_script.replace('\\', "\\\\").replace('"', "\\\"");
        self.write_global_config(&format!(
            r#"[[host_connections]]
description = "Primary"
ces_url = "http://ces:2020"

[[host_connections]]
description = "No CES"

[[host_connections]]
description = "Secondary"
ces_url = "http://CES-B:2020"

[[credentials]]
id = "cred1"
username = "alice"
password = "s3cret"
description = "CI user"

[[credentials]]
id = "team-cred"
username = "bob"
password = "pw"
folders = ["team"]

[runner]
program = "sh"
args = ["-c", "{}", "runner"]
"#,
            script
        ));
    }

    /// Read a file relative to the workspace.
    pub fn read_work_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read workspace file")
    }
}
