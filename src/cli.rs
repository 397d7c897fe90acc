use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stower::config::CliOverrides;

/// Stower - relocate files into computed destination paths
#[derive(Parser, Debug)]
#[command(name = "stower")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (default: ./config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Copy files instead of hard linking them
    #[arg(long, global = true)]
    pub copy: bool,

    /// Log what would happen without touching the file system
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Mapper name or executable computing destination paths
    #[arg(long, global = true, value_name = "NAME")]
    pub mapper: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch the source directory and place files as they appear
    Watch {
        /// Capacity of the event queue; events beyond it are dropped
        #[arg(long, value_name = "N")]
        event_buffer_size: Option<i64>,

        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Place every file currently in the source directory
    Process {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// List the registered mappers
    Mappers,
}

#[derive(Args, Debug, Default)]
pub struct DirArgs {
    /// Source directory (overrides `src` in the config file)
    #[arg(value_name = "SRC")]
    pub src: Option<PathBuf>,

    /// Destination directory (overrides `dest` in the config file)
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            debug: self.debug,
            copy: self.copy,
            dry_run: self.dry_run,
            mapper: self.mapper.clone(),
            ..CliOverrides::default()
        };
        match &self.command {
            Commands::Watch {
                event_buffer_size,
                dirs,
            } => {
                overrides.src = dirs.src.clone();
                overrides.dest = dirs.dest.clone();
                overrides.event_buffer_size = *event_buffer_size;
            }
            Commands::Process { dirs } => {
                overrides.src = dirs.src.clone();
                overrides.dest = dirs.dest.clone();
            }
            Commands::Mappers => {}
        }
        overrides
    }
}
