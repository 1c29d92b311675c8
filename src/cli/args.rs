use crate::constants::verbosity;
use crate::generator::FailurePolicy;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// ebrick - scaffolds eBrick applications.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new application, or regenerate one from its manifest.
    New(NewArgs),

    /// Tidy dependencies and run the generated application.
    Run(RunArgs),

    /// Print the generator version embedded in new manifests.
    Version,
}

/// Arguments for the new command.
#[derive(Parser, Debug, Clone)]
pub struct NewArgs {
    /// Directory the application is generated into.
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Configuration as a YAML or JSON document, or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Overwrite an existing manifest without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Never prompt. Requires `--answers` or an existing manifest.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not run `go mod tidy` after generation.
    #[arg(long = "skip-post")]
    pub skip_post: bool,

    /// Keep generating remaining files after a failure and report all of them.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

impl NewArgs {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::ContinueOnError
        } else {
            FailurePolicy::AbortOnFirst
        }
    }
}

/// Arguments for the run command.
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Directory of the generated application.
    #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
