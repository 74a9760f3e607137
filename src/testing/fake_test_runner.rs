use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ExecutionContext, ValidatedRun};
use crate::ports::{BuildLog, TestRunner};

/// Outcome a [`FakeTestRunner`] produces when invoked.
#[derive(Debug, Clone)]
pub enum RunnerScript {
    Pass,
    Fail,
    Error(String),
    Panic(String),
}

/// A runner invocation captured by [`FakeTestRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub environment_id: String,
    pub username: String,
    pub project: String,
}

#[derive(Clone)]
pub struct FakeTestRunner {
    pub runs: Arc<Mutex<Vec<RecordedRun>>>,
    pub script: RunnerScript,
}

impl FakeTestRunner {
    pub fn new(script: RunnerScript) -> Self {
        Self { runs: Arc::new(Mutex::new(vec![])), script }
    }

    pub fn passing() -> Self {
        Self::new(RunnerScript::Pass)
    }

    pub fn get_runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }
}

impl TestRunner for FakeTestRunner {
    fn run(
        &self,
        run: &ValidatedRun<'_>,
        execution: &ExecutionContext,
        log: &mut dyn BuildLog,
    ) -> Result<bool, AppError> {
        self.runs.lock().unwrap().push(RecordedRun {
            environment_id: run.parameters.environment_id().to_string(),
            username: run.login.username.clone(),
            project: execution.project.full_name().to_string(),
        });
        log.println("fake runner invoked");

        match &self.script {
            RunnerScript::Pass => Ok(true),
            RunnerScript::Fail => Ok(false),
            RunnerScript::Error(message) => Err(AppError::config_error(message.clone())),
            RunnerScript::Panic(message) => panic!("{}", message),
        }
    }
}
