//! # Flag Registry
//!
//! The leaf of the flag engine: the closed set of known flags, their defaults and
//! their metadata. Definitions are validated once, when registered; after startup the
//! registry is only read.
//!
//! Sources of descriptors:
//! * the compiled-in [`Flag`](syd_domain::Flag) catalog ([`FlagRegistry::builtin`]),
//! * typed [`FlagDescriptor`](syd_domain::FlagDescriptor)s,
//! * TOML manifests of raw [`FlagDefinition`]s ([`FlagManifest`]).
//!
//! # Example
//!
//! ```rust
//! use syd_registry::{FlagRegistry, RegistryError};
//!
//! # fn main() -> Result<(), RegistryError> {
//! let mut registry = FlagRegistry::builtin()?;
//! registry.extend_from_manifest(syd_registry::FlagManifest::parse(
//!     r#"
//!     [[flags]]
//!     name = "NEW_CHECKOUT"
//!     env_key = "ENABLE_NEW_CHECKOUT"
//!     default_value = true
//!     status = "alpha"
//!     created_at = 2025-03-01
//!     "#,
//! )?)?;
//!
//! assert!(registry.get("NEW_CHECKOUT")?.default_value);
//! assert!(registry.get("NEW_CHEKOUT").is_err());
//! # Ok(())
//! # }
//! ```

mod definition;
mod error;
mod manifest;
mod registry;

pub use definition::{FlagDefinition, IntoDescriptor};
pub use error::{RegistryError, RegistryErrorExt};
pub use manifest::FlagManifest;
pub use registry::FlagRegistry;
