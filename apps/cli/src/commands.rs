use crate::args::SourceArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use switchyard::domain::StatusSet;
use switchyard::domain::config::Settings;
use switchyard::resolver::{Layered, ResolvedFlagSet};
use tracing::debug;

/// Prints the registered flags admitted by `statuses`.
///
/// # Errors
/// Returns an error if the registry cannot be built or JSON output fails.
pub fn list(settings: &Settings, statuses: StatusSet, json: bool) -> Result<()> {
    let registry = switchyard::build_registry(settings)?;
    let descriptors: Vec<_> = registry.with_status(statuses).collect();

    if json {
        return print_json(&descriptors);
    }
    if descriptors.is_empty() {
        println!("No flags registered for the selected statuses.");
        return Ok(());
    }

    println!(
        "{:<24} {:<32} {:<8} {:<11} {:<12} {:<11} {}",
        "Name", "Env key", "Default", "Status", "Owner", "Created", "Description"
    );
    println!("{:-<120}", "");
    for flag in descriptors {
        println!(
            "{:<24} {:<32} {:<8} {:<11} {:<12} {:<11} {}",
            flag.name,
            flag.env_key,
            flag.default_value,
            flag.status,
            flag.owner,
            flag.created_at.to_string(),
            flag.description
        );
    }
    Ok(())
}

/// Prints every flag with its effective value and source.
///
/// # Errors
/// Returns an error if the flags cannot be resolved or JSON output fails.
pub fn resolve(settings: Settings, source: &SourceArgs, json: bool) -> Result<()> {
    let flags = snapshot(settings, source)?;

    if json {
        return print_json(&*flags);
    }

    println!("{:<24} {:<6} {:<12} {}", "Name", "Value", "Source", "Env key");
    println!("{:-<80}", "");
    for flag in flags.iter() {
        println!("{:<24} {:<6} {:<12} {}", flag.name, flag.value, flag.source, flag.env_key);
    }
    Ok(())
}

/// Resolves every flag and prints a one-line summary.
///
/// # Errors
/// Returns the resolution error when any override is misconfigured.
pub fn check(settings: Settings, source: &SourceArgs) -> Result<()> {
    let flags = snapshot(settings, source).context("Flag configuration check failed")?;
    println!(
        "OK: {} flags resolved, {} overridden, {} enabled",
        flags.len(),
        flags.overrides().count(),
        flags.enabled().count()
    );
    Ok(())
}

/// Prints `true` or `false` for one flag.
///
/// # Errors
/// Returns an error for unknown names or misconfigured overrides.
pub fn get(settings: Settings, name: &str, source: &SourceArgs) -> Result<()> {
    let flags = snapshot(settings, source)?;
    println!("{}", flags.is_enabled(name)?);
    Ok(())
}

fn snapshot(mut settings: Settings, source: &SourceArgs) -> Result<Arc<ResolvedFlagSet>> {
    if let Some(env_file) = &source.env_file {
        settings.flags.env_file = Some(env_file.clone());
    }
    debug!(overrides = source.overrides.len(), "Resolving flags");

    let env = Layered::new(source.overrides.as_slice(), switchyard::environment(&settings)?);
    let yard = switchyard::bootstrap_with(&settings, &env)?;
    Ok(yard.snapshot())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Serializing output")?;
    println!("{rendered}");
    Ok(())
}
