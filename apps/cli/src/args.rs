//! # CLI Argument Definitions
//!
//! Command-line surface of `syd`, parsed with `clap`.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use switchyard::domain::StatusSet;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "syd")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and resolve Switchyard feature flags")]
pub struct Cli {
    /// Settings file (defaults to an optional `switchyard.toml` in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML manifest with additional `[[flags]]` definitions
    #[arg(long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered flags and their metadata
    List {
        /// Only these statuses, comma-separated (`alpha,beta`, `active`, `all`)
        #[arg(long, default_value = "all")]
        status: StatusSet,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve every flag and print its value and where it came from
    Resolve {
        #[command(flatten)]
        source: SourceArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve every flag and fail on the first misconfigured override
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the effective value of one flag (`true` or `false`)
    Get {
        /// Registry name, e.g. `PRACTICE_ADOPTION`
        name: String,
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where overrides are read from, highest priority first: `--set`, the process
/// environment, then the env file.
#[derive(Debug, Default, Args)]
pub struct SourceArgs {
    /// Dotenv-style file layered under the process environment
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Override one variable, e.g. `--set ENABLE_PRACTICE_ADOPTION=true` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.to_owned()))
        },
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
