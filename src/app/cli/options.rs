//! Options command implementation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, OptionList};
use crate::domain::AppError;

#[derive(Args)]
pub struct ListArgs {
    /// Currently selected value
    #[arg(short = 's', long)]
    selected: Option<String>,
    /// Global config file
    #[arg(short = 'g', long)]
    global_config: Option<PathBuf>,
    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
pub enum OptionsCommand {
    /// Username/password credentials visible to a project
    Credentials {
        #[command(flatten)]
        list: ListArgs,
        /// Full name of the project
        #[arg(short = 'p', long, default_value = "")]
        project: String,
    },
    /// CES server URLs from the host connections
    Servers {
        #[command(flatten)]
        list: ListArgs,
    },
}

pub fn run_options(command: OptionsCommand) -> Result<(), AppError> {
    let (kind, args, project) = match command {
        OptionsCommand::Credentials { list, project } => (OptionList::Credentials, list, project),
        OptionsCommand::Servers { list } => (OptionList::ServerUrls, list, String::new()),
    };

    let options =
        api::option_list(kind, args.global_config.as_deref(), &project, args.selected.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        for option in &options {
            println!("{}", option);
        }
    }
    Ok(())
}
