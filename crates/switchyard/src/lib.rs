//! Facade crate for the Switchyard flag engine.
//! Re-exports the domain, registry and resolver, and wires them together from [`Settings`].
//! Keep this crate thin: it composes the other crates and holds no flag semantics itself.
//!
//! ## Usage
//! - Load [`Settings`] with [`kernel::config::load_settings`].
//! - Call [`bootstrap`] once at startup and pass the returned [`Switchyard`] (or its
//!   [`FlagHandle`]) to the code that asks for flags.
//!
//! ```rust
//! use switchyard::prelude::*;
//!
//! # fn main() -> Result<(), switchyard::SwitchyardError> {
//! let overrides = [("ENABLE_PRACTICE_ADOPTION", "1")];
//! let flags = switchyard::bootstrap_with(&Settings::default(), &overrides)?;
//! assert!(flags.handle().is_on(Flag::PracticeAdoption)?);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{SwitchyardError, SwitchyardErrorExt};
pub use syd_domain as domain;
pub use syd_kernel as kernel;
pub use syd_logger as logger;
pub use syd_registry as registry;
pub use syd_resolver as resolver;

use std::sync::Arc;
use syd_domain::config::Settings;
use syd_logger::Logger;
use syd_registry::FlagRegistry;
use syd_resolver::{
    EnvFile, EnvironmentSource, FlagHandle, Layered, ProcessEnvironment, ResolvedFlagSet,
};
use tracing::info;

/// Names most callers need.
pub mod prelude {
    pub use crate::{Switchyard, SwitchyardError};
    pub use syd_domain::config::Settings;
    pub use syd_domain::{Flag, FlagDescriptor, FlagStatus, StatusSet};
    pub use syd_registry::FlagRegistry;
    pub use syd_resolver::{EnvironmentSource, FlagHandle, ResolvedFlagSet};
}

/// The process environment with the configured env file, if any, underneath it.
pub type SettingsEnvironment = Layered<ProcessEnvironment, EnvFile>;

/// The registry plus the handle publishing its resolved snapshots.
#[derive(Debug, Clone)]
pub struct Switchyard {
    settings: Settings,
    registry: Arc<FlagRegistry>,
    handle: FlagHandle,
}

impl Switchyard {
    #[must_use]
    pub fn registry(&self) -> &FlagRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn handle(&self) -> &FlagHandle {
        &self.handle
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<ResolvedFlagSet> {
        self.handle.snapshot()
    }

    /// Re-reads the environment (and env file) and publishes a new snapshot.
    ///
    /// # Errors
    /// The previous snapshot stays published when the env file or a value is invalid.
    pub fn refresh(&self) -> Result<Arc<ResolvedFlagSet>, SwitchyardError> {
        let env = environment(&self.settings)?;
        self.refresh_with(&env)
    }

    /// Resolves `env` instead of the process environment and publishes the result.
    ///
    /// # Errors
    /// The previous snapshot stays published when a value is invalid.
    pub fn refresh_with<S>(&self, env: &S) -> Result<Arc<ResolvedFlagSet>, SwitchyardError>
    where
        S: EnvironmentSource + ?Sized,
    {
        Ok(self.handle.refresh(&self.registry, env)?)
    }
}

/// Installs the global subscriber described by `settings.logging`.
///
/// Keep the returned [`Logger`] alive for as long as file logging should flush.
///
/// # Errors
/// [`SwitchyardError::Logger`] for a bad level or filter, or when a subscriber is
/// already installed.
pub fn init_logging(
    name: impl Into<String>,
    settings: &Settings,
    verbosity: u8,
) -> Result<Logger, SwitchyardError> {
    Logger::from_settings(name, &settings.logging, verbosity).context("Initialising logging")
}

/// The built-in catalog plus the manifest named in `settings.flags.manifest`.
///
/// # Errors
/// [`SwitchyardError::Registry`] if the manifest cannot be read or conflicts with the
/// catalog.
pub fn build_registry(settings: &Settings) -> Result<FlagRegistry, SwitchyardError> {
    let mut registry = FlagRegistry::builtin()?;
    if let Some(manifest) = &settings.flags.manifest {
        registry.extend_from_manifest_file(manifest)?;
    }
    Ok(registry)
}

/// Override source described by `settings`: process variables first, then the env file.
///
/// # Errors
/// [`SwitchyardError::Resolver`] if the configured env file is missing or malformed.
pub fn environment(settings: &Settings) -> Result<SettingsEnvironment, SwitchyardError> {
    let file = match &settings.flags.env_file {
        Some(path) => EnvFile::read(path)?,
        None => EnvFile::default(),
    };
    Ok(ProcessEnvironment.over(file))
}

/// Builds the registry and resolves it against [`environment`].
///
/// # Errors
/// Any registry, env file or resolution failure; nothing is published in that case.
pub fn bootstrap(settings: &Settings) -> Result<Switchyard, SwitchyardError> {
    let env = environment(settings)?;
    bootstrap_with(settings, &env)
}

/// Builds the registry and resolves it against `env`.
///
/// # Errors
/// Any registry or resolution failure.
pub fn bootstrap_with<S>(settings: &Settings, env: &S) -> Result<Switchyard, SwitchyardError>
where
    S: EnvironmentSource + ?Sized,
{
    let registry = build_registry(settings)?;
    let snapshot = syd_resolver::resolve(&registry, env)?;
    info!(
        flags = snapshot.len(),
        enabled = snapshot.enabled().count(),
        "Switchyard bootstrapped"
    );

    Ok(Switchyard {
        settings: settings.clone(),
        registry: Arc::new(registry),
        handle: FlagHandle::new(snapshot),
    })
}
