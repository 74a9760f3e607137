//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::command_test_runner::CommandTestRunner;
use crate::adapters::console_build_log::ConsoleBuildLog;
use crate::adapters::memory_credential_store::MemoryCredentialStore;
use crate::adapters::memory_host_registry::MemoryHostRegistry;
use crate::app::config::{GlobalConfig, STEP_CONFIG_FILE, load_global_config, load_step_config};
use crate::app::{
    StepContext,
    commands::{check, options, perform, validate},
};
use crate::domain::{ExecutionContext, ProjectScope, StepParameters};
use crate::ports::BuildLog;

pub use crate::app::commands::options::OptionList;
pub use crate::domain::{AppError, FormValidation, ListOption, StepReport};

/// Inputs of a step invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Step config file. Defaults to `ctstep.toml` in the workspace.
    pub config: Option<PathBuf>,
    /// Global config file. Defaults to the per-user location.
    pub global_config: Option<PathBuf>,
    /// Full name of the invoking project.
    pub project: String,
    /// Workspace directory. Defaults to the current directory.
    pub workspace: Option<PathBuf>,
    pub build_number: Option<u64>,
}

type DefaultContext = StepContext<MemoryCredentialStore, MemoryHostRegistry, CommandTestRunner>;

/// Create a `StepContext` from the global configuration.
fn create_context(global: GlobalConfig) -> DefaultContext {
    let runner = match global.runner {
        Some(runner) => CommandTestRunner::new(runner.program, runner.args),
        None => CommandTestRunner::unconfigured(),
    };
    StepContext::new(
        MemoryCredentialStore::new(global.credentials),
        MemoryHostRegistry::new(global.host_connections),
        runner,
    )
}

fn prepare(options: &RunOptions) -> Result<(StepParameters, ExecutionContext), AppError> {
    let workspace = match &options.workspace {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };
    let config_path = options.config.clone().unwrap_or_else(|| workspace.join(STEP_CONFIG_FILE));
    let params = load_step_config(&config_path)?;

    let mut execution = ExecutionContext::new(ProjectScope::new(options.project.as_str()), workspace);
    if let Some(build_number) = options.build_number {
        execution = execution.with_build_number(build_number);
    }
    Ok((params, execution))
}

/// Run the step, writing diagnostics to the console.
pub fn run_step(options: &RunOptions) -> Result<StepReport, AppError> {
    run_step_with_log(options, &mut ConsoleBuildLog::new())
}

/// Run the step, writing diagnostics to `log`.
pub fn run_step_with_log(
    options: &RunOptions,
    log: &mut dyn BuildLog,
) -> Result<StepReport, AppError> {
    let (params, execution) = prepare(options)?;
    let ctx = create_context(load_global_config(options.global_config.as_deref())?);
    Ok(perform::execute(&ctx, &params, &execution, log)?)
}

/// Validate the step configuration without running tests.
pub fn validate_step(options: &RunOptions) -> Result<(), AppError> {
    let (params, execution) = prepare(options)?;
    let ctx = create_context(load_global_config(options.global_config.as_deref())?);
    let mut log = ConsoleBuildLog::new();
    Ok(validate::execute(ctx.credentials(), &params, &execution, &mut log)?)
}

/// Check a single form field value.
pub fn check_field(field: &str, value: &str) -> Result<FormValidation, AppError> {
    check::execute(field, value)
}

/// Build a selection list from the global configuration.
pub fn option_list(
    list: OptionList,
    global_config: Option<&Path>,
    project: &str,
    selected: Option<&str>,
) -> Result<Vec<ListOption>, AppError> {
    let ctx = create_context(load_global_config(global_config)?);
    Ok(options::execute(
        ctx.credentials(),
        ctx.hosts(),
        list,
        &ProjectScope::new(project),
        selected,
    ))
}
