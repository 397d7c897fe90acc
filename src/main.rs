//! Stower CLI - relocate files into computed destination paths
//!
//! Usage: stower [OPTIONS] <COMMAND>
//!
//! Commands:
//!   watch    Watch the source directory and place files as they appear
//!   process  Place every file currently in the source directory
//!   mappers  List the registered mappers

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if tracing::dispatcher::has_been_set() {
                error!("{:#}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = commands::load_config(cli)?;
    match &cli.command {
        Commands::Watch { .. } => commands::watch::cmd_watch(&config),
        Commands::Process { .. } => commands::process::cmd_process(&config),
        Commands::Mappers => commands::mappers::cmd_mappers(&config),
    }
}
