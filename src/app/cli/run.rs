//! Run and validate command handlers.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, RunOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct StepArgs {
    /// Step config file (defaults to ctstep.toml in the workspace)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Global config file with host connections, credentials and the runner
    #[arg(short = 'g', long)]
    global_config: Option<PathBuf>,
    /// Full name of the invoking project, used to scope credentials
    #[arg(short = 'p', long, default_value = "")]
    project: String,
    /// Workspace directory (defaults to the current directory)
    #[arg(short = 'w', long)]
    workspace: Option<PathBuf>,
    /// Build number of the invoking job
    #[arg(long)]
    build_number: Option<u64>,
}

impl From<StepArgs> for RunOptions {
    fn from(args: StepArgs) -> Self {
        RunOptions {
            config: args.config,
            global_config: args.global_config,
            project: args.project,
            workspace: args.workspace,
            build_number: args.build_number,
        }
    }
}

pub fn run_step(args: StepArgs) -> Result<(), AppError> {
    let report = api::run_step(&args.into())?;
    println!("✅ Step {} for environment {}", report.state, report.environment_id);
    Ok(())
}

pub fn run_validate(args: StepArgs) -> Result<(), AppError> {
    api::validate_step(&args.into())
}
