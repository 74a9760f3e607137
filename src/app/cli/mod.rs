//! CLI Adapter.

mod check;
mod options;
mod run;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ctstep")]
#[command(version)]
#[command(
    about = "Validate continuous-testing step parameters and dispatch test runs",
    long_about = None
)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging\n    CTSTEP_HOME       Directory holding the global config.toml")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate parameters and run the tests
    #[clap(visible_alias = "r")]
    Run(run::StepArgs),
    /// Validate parameters without running tests
    #[clap(visible_alias = "v")]
    Validate(run::StepArgs),
    /// Check a single field value
    #[clap(visible_alias = "c")]
    Check {
        /// Field name (ccThreshold, environmentId, serverUrl, credentialsId, reportFolder, folderPath, accountInfo)
        field: String,
        /// Value to check
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// List selectable values for a field
    #[clap(visible_alias = "o")]
    Options {
        #[command(subcommand)]
        list: options::OptionsCommand,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Run(args) => run::run_step(args).map(|_| 0),
        Commands::Validate(args) => run::run_validate(args).map(|_| 0),
        Commands::Check { field, value } => check::run_check(&field, &value),
        Commands::Options { list } => options::run_options(list).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
