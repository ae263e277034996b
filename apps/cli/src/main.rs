#![allow(clippy::print_stdout)]

pub mod args;
pub mod commands;

use crate::args::{Cli, Command};
use anyhow::Result;
use clap::Parser;
use switchyard::kernel::config::load_settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(manifest) = cli.manifest {
        settings.flags.manifest = Some(manifest);
    }
    let _logger = switchyard::init_logging(env!("CARGO_BIN_NAME"), &settings, cli.verbose)?;

    match cli.command {
        Command::List { status, json } => commands::list(&settings, status, json)?,
        Command::Resolve { source, json } => commands::resolve(settings, &source, json)?,
        Command::Check { source } => commands::check(settings, &source)?,
        Command::Get { name, source } => commands::get(settings, &name, &source)?,
    }

    Ok(())
}
