use crate::definition::FlagDefinition;
use crate::error::{RegistryError, RegistryErrorExt};
use crate::registry::FlagRegistry;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// A TOML document of `[[flags]]` tables.
///
/// ```toml
/// [[flags]]
/// name = "NEW_CHECKOUT"
/// env_key = "ENABLE_NEW_CHECKOUT"
/// default_value = false
/// description = "Rewritten checkout flow"
/// owner = "payments"
/// status = "alpha"
/// created_at = 2025-03-01
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagManifest {
    #[serde(default)]
    pub flags: Vec<FlagDefinition>,
}

impl FlagManifest {
    /// # Errors
    /// [`RegistryError::Manifest`] if `source` is not a valid manifest.
    pub fn parse(source: &str) -> Result<Self, RegistryError> {
        toml::from_str(source).context("Parsing flag manifest")
    }

    /// # Errors
    /// [`RegistryError::Io`] if the file cannot be read, [`RegistryError::Manifest`] if it
    /// is not a valid manifest.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .context(format!("Reading flag manifest {}", path.display()))?;
        toml::from_str(&source).context(format!("Parsing flag manifest {}", path.display()))
    }
}

impl FlagRegistry {
    /// Registers every definition of `manifest`, all-or-nothing.
    ///
    /// # Errors
    /// The first invalid or duplicate definition; the registry is left unchanged.
    pub fn extend_from_manifest(&mut self, manifest: FlagManifest) -> Result<usize, RegistryError> {
        let added = self.register_all(manifest.flags)?;
        info!(added, total = self.len(), "Flag manifest registered");
        Ok(added)
    }

    /// # Errors
    /// See [`FlagManifest::read`] and [`FlagRegistry::extend_from_manifest`].
    pub fn extend_from_manifest_file(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let manifest = FlagManifest::read(path)?;
        self.extend_from_manifest(manifest)
            .context(format!("Registering flags from {}", path.display()))
    }

    /// Registry built from a manifest document alone, without the built-in catalog.
    ///
    /// # Errors
    /// See [`FlagManifest::parse`] and [`FlagRegistry::extend_from_manifest`].
    pub fn from_manifest_str(source: &str) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.extend_from_manifest(FlagManifest::parse(source)?)?;
        Ok(registry)
    }

    /// # Errors
    /// See [`FlagRegistry::extend_from_manifest_file`].
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.extend_from_manifest_file(path)?;
        Ok(registry)
    }
}
