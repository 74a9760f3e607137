use std::fs;
use std::path::Path;

use ctstep::ports::BuildLog;
use ctstep::{
    AppError, FormValidation, OptionList, RunOptions, StepError, ValidationError, check_field,
    option_list, run_step_with_log,
};
use serial_test::serial;
use tempfile::TempDir;

#[derive(Default)]
struct CapturedLog {
    lines: Vec<String>,
    errors: Vec<String>,
}

impl BuildLog for CapturedLog {
    fn println(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.errors.push(line.to_string());
    }
}

fn write_configs(root: &Path, step: &str, global: &str) -> RunOptions {
    fs::write(root.join("ctstep.toml"), step).unwrap();
    fs::write(root.join("global.toml"), global).unwrap();
    RunOptions {
        config: None,
        global_config: Some(root.join("global.toml")),
        project: "team/app".to_string(),
        workspace: Some(root.to_path_buf()),
        build_number: Some(7),
    }
}

const STEP: &str = r#"[step]
environment_id = "ENV1"
server_url = "http://ces:2020"
credentials_id = "cred1"
"#;

const GLOBAL_WITHOUT_RUNNER: &str = r#"[[credentials]]
id = "cred1"
username = "alice"
password = "pw"
"#;

#[test]
fn rejected_step_returns_typed_validation_error() {
    let temp = TempDir::new().unwrap();
    let options =
        write_configs(temp.path(), &STEP.replace("cred1", "bad-id"), GLOBAL_WITHOUT_RUNNER);
    let mut log = CapturedLog::default();

    let err = run_step_with_log(&options, &mut log).unwrap_err();

    match err {
        AppError::Step(StepError::Rejected(ValidationError::InvalidCredential(id))) => {
            assert_eq!(id, "bad-id")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(log.lines[0], "Running Continuous Test");
    assert!(log.errors.is_empty());
}

#[test]
fn runner_error_cause_is_preserved() {
    let temp = TempDir::new().unwrap();
    let options = write_configs(temp.path(), STEP, GLOBAL_WITHOUT_RUNNER);
    let mut log = CapturedLog::default();

    let err = run_step_with_log(&options, &mut log).unwrap_err();

    assert!(matches!(err, AppError::Step(StepError::Runner(ref cause)) if matches!(**cause, AppError::RunnerNotConfigured)));
    assert!(log.lines.iter().any(|l| l == "Credentials entered..."));
}

#[cfg(unix)]
#[test]
fn passing_runner_yields_success_report() {
    let temp = TempDir::new().unwrap();
    let global = format!("{}\n[runner]\nprogram = \"true\"\n", GLOBAL_WITHOUT_RUNNER);
    let options = write_configs(temp.path(), STEP, &global);
    let mut log = CapturedLog::default();

    let report = run_step_with_log(&options, &mut log).unwrap();

    assert_eq!(report.environment_id, "ENV1");
    assert_eq!(report.state.to_string(), "succeeded");
    assert_eq!(log.lines.last().map(String::as_str), Some("Test Success..."));
}

#[test]
fn form_checks_through_public_api() {
    assert_eq!(check_field("accountInfo", &"x".repeat(52)).unwrap(), FormValidation::Ok);
    assert!(!check_field("accountInfo", &"x".repeat(53)).unwrap().is_ok());
    assert!(check_field("folderPath", "").unwrap().is_ok());
}

#[test]
fn option_lists_through_public_api() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("global.toml");
    fs::write(
        &path,
        r#"[[credentials]]
id = "b"
username = "bob"

[[credentials]]
id = "a"
username = "alice"
description = "Admin"
"#,
    )
    .unwrap();

    let options = option_list(OptionList::Credentials, Some(&path), "", Some("a")).unwrap();
    let rendered: Vec<String> = options.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["[ ]  = ", "[ ] bob = b", "[*] alice (Admin) = a"]);
}

#[test]
#[serial]
fn global_config_is_discovered_through_ctstep_home() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[[host_connections]]\nces_url = \"http://from-home:2020\"\n",
    )
    .unwrap();

    let original = std::env::var_os("CTSTEP_HOME");
    unsafe {
        std::env::set_var("CTSTEP_HOME", temp.path());
    }

    let result = option_list(OptionList::ServerUrls, None, "", None);

    match original {
        Some(value) => unsafe { std::env::set_var("CTSTEP_HOME", value) },
        None => unsafe { std::env::remove_var("CTSTEP_HOME") },
    }

    let options = result.unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].value, "http://from-home:2020");
}
