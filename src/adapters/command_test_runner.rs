use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread;

use tracing::{debug, info};
use url::Url;

use crate::domain::{AppError, ExecutionContext, StepParameters, ValidatedRun};
use crate::ports::{BuildLog, TestRunner};

/// Environment variable carrying the CES password to the runner process.
pub const PASSWORD_ENV: &str = "CTSTEP_PASSWORD";

/// Runs the external test-execution CLI as a child process.
#[derive(Debug, Clone)]
pub struct CommandTestRunner {
    program: Option<String>,
    args: Vec<String>,
}

impl CommandTestRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: Some(program.into()), args }
    }

    /// A runner with no program; every run fails with [`AppError::RunnerNotConfigured`].
    pub fn unconfigured() -> Self {
        Self { program: None, args: Vec::new() }
    }

    /// Full argument list for a run: configured arguments first, then the step settings.
    pub fn build_args(&self, run: &ValidatedRun<'_>, execution: &ExecutionContext) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(step_args(run.parameters));
        if let Some(build_number) = execution.build_number {
            args.push("--build-number".to_string());
            args.push(build_number.to_string());
        }
        args.push("--user".to_string());
        args.push(run.login.username.clone());
        args
    }
}

enum OutputLine {
    Stdout(String),
    Stderr(String),
}

fn forward_lines<R: Read>(reader: R, wrap: fn(String) -> OutputLine, tx: Sender<OutputLine>) {
    for line in BufReader::new(reader).lines().map_while(Result::ok) {
        if tx.send(wrap(line)).is_err() {
            break;
        }
    }
}

fn step_args(params: &StepParameters) -> Vec<String> {
    let mut args = vec![
        "--environment-id".to_string(),
        params.environment_id().to_string(),
        "--server-url".to_string(),
        params.server_url().to_string(),
    ];

    if !params.folder_path().trim().is_empty() {
        args.push("--folder".to_string());
        args.push(params.folder_path().to_string());
    }

    for (enabled, flag) in [
        (params.recursive(), "--recursive"),
        (params.stop_if_test_fails_or_threshold_reached(), "--stop-on-failure"),
        (params.upload_to_server(), "--upload"),
        (params.halt_at_failure(), "--halt-at-failure"),
    ] {
        if enabled {
            args.push(flag.to_string());
        }
    }

    args.push("--cc-threshold".to_string());
    args.push(params.cc_threshold().to_string());

    if let Some(version) = params.sonar_version() {
        args.push("--sonar-version".to_string());
        args.push(version.to_string());
    }

    args.push("--source-folder".to_string());
    args.push(params.source_folder().to_string());
    args.push("--report-folder".to_string());
    args.push(params.report_folder().to_string());

    if !params.account_info().is_empty() {
        args.push("--accounting-info".to_string());
        args.push(params.account_info().to_string());
    }

    args
}

impl TestRunner for CommandTestRunner {
    fn run(
        &self,
        run: &ValidatedRun<'_>,
        execution: &ExecutionContext,
        log: &mut dyn BuildLog,
    ) -> Result<bool, AppError> {
        let server_url = run.parameters.server_url();
        Url::parse(server_url).map_err(|e| AppError::InvalidServerUrl {
            url: server_url.to_string(),
            details: e.to_string(),
        })?;

        let program = self.program.as_deref().ok_or(AppError::RunnerNotConfigured)?;
        let args = self.build_args(run, execution);
        debug!(program = %program, ?args, workspace = %execution.workspace.display(), "launching test runner");

        let mut child = Command::new(program)
            .args(&args)
            .current_dir(&execution.workspace)
            .env(PASSWORD_ENV, run.login.password.expose())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::RunnerLaunch {
                program: program.to_string(),
                details: e.to_string(),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (tx, rx) = mpsc::channel();

        // Lines reach the build log while the runner is still going.
        thread::scope(|scope| {
            if let Some(stdout) = stdout {
                let tx = tx.clone();
                scope.spawn(move || forward_lines(stdout, OutputLine::Stdout, tx));
            }
            if let Some(stderr) = stderr {
                let tx = tx.clone();
                scope.spawn(move || forward_lines(stderr, OutputLine::Stderr, tx));
            }
            drop(tx);

            for line in rx {
                match line {
                    OutputLine::Stdout(line) => log.println(&line),
                    OutputLine::Stderr(line) => log.error(&line),
                }
            }
        });

        let status = child.wait()?;
        info!(status = ?status.code(), "test runner finished");
        Ok(status.success())
    }
}
