//! # Flag Resolver
//!
//! Turns a [`FlagRegistry`](syd_registry::FlagRegistry) plus an [`EnvironmentSource`] into
//! an immutable [`ResolvedFlagSet`], and publishes snapshots through a [`FlagHandle`].
//!
//! Application code asks the snapshot (`is_enabled("NAME")`, `is_on(Flag::..)`) and never
//! reads the environment itself.
//!
//! ## Resolution rules
//! * absent or empty (after trimming) override: the registered default applies;
//! * `true`/`false` in any letter case, `1`/`0`: that value;
//! * anything else: [`ResolverError::InvalidFlagValue`], no fallback to the default.
//!
//! # Example
//!
//! ```rust
//! use syd_domain::Flag;
//! use syd_registry::FlagRegistry;
//! use syd_resolver::{EnvironmentSource, FlagHandle, resolve};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = FlagRegistry::builtin()?;
//!
//! let flags = resolve(&registry, &[("ENABLE_PRACTICE_ADOPTION", "true")])?;
//! assert!(flags.is_on(Flag::PracticeAdoption)?);
//! assert!(flags.is_enabled("PRACTICE_ADOPTON").is_err());
//!
//! // Tests force values by layering overrides over the real source.
//! let forced = [("ENABLE_PRACTICE_ADOPTION", "0")].over(syd_resolver::ProcessEnvironment);
//! let handle = FlagHandle::new(resolve(&registry, &forced)?);
//! assert!(!handle.is_on(Flag::PracticeAdoption)?);
//! # Ok(())
//! # }
//! ```

mod env_file;
mod error;
mod handle;
mod resolve;
mod snapshot;
mod source;
mod value;

pub use env_file::EnvFile;
pub use error::{ResolverError, ResolverErrorExt};
pub use handle::FlagHandle;
pub use resolve::{is_enabled, refresh, resolve};
pub use snapshot::{ResolvedFlag, ResolvedFlagSet, ValueSource};
pub use source::{EnvironmentSource, Layered, ProcessEnvironment};
pub use value::{UnrecognizedValue, parse_flag_value};
