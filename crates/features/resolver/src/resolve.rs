use crate::error::ResolverError;
use crate::snapshot::{ResolvedFlag, ResolvedFlagSet, ValueSource};
use crate::source::EnvironmentSource;
use crate::value::parse_flag_value;
use syd_registry::FlagRegistry;
use tracing::{debug, error, info, instrument, warn};

/// Resolves every registered flag against `env` into a new snapshot.
///
/// For each descriptor the value under its `env_key` is trimmed and parsed; an absent or
/// empty value keeps the registered default. Resolution is strict: the first value that is
/// not a recognised literal aborts the whole snapshot.
///
/// # Errors
/// [`ResolverError::InvalidFlagValue`] naming the flag, its key and the offending value.
#[instrument(level = "debug", skip_all, fields(flags = registry.len()))]
pub fn resolve<S>(registry: &FlagRegistry, env: &S) -> Result<ResolvedFlagSet, ResolverError>
where
    S: EnvironmentSource + ?Sized,
{
    let mut flags = Vec::with_capacity(registry.len());

    for descriptor in registry.all() {
        let raw = env.lookup(&descriptor.env_key);
        let parsed = raw.as_deref().map(parse_flag_value).transpose().map_err(|invalid| {
            error!(
                flag = %descriptor.name,
                env_key = %descriptor.env_key,
                value = %invalid.0,
                "Rejecting unrecognized flag override"
            );
            ResolverError::InvalidFlagValue {
                flag: descriptor.name.clone(),
                env_key: descriptor.env_key.clone(),
                value: invalid.0,
                context: None,
            }
        })?;

        let (value, source) = match parsed.flatten() {
            Some(value) => {
                if descriptor.is_deprecated() {
                    warn!(flag = %descriptor.name, value, "Overriding a deprecated flag");
                } else {
                    debug!(flag = %descriptor.name, value, "Environment override applied");
                }
                (value, ValueSource::Environment)
            },
            None => (descriptor.default_value, ValueSource::Default),
        };

        flags.push(ResolvedFlag {
            name: descriptor.name.clone(),
            env_key: descriptor.env_key.clone(),
            value,
            source,
        });
    }

    let set = ResolvedFlagSet::new(flags);
    info!(flags = set.len(), overrides = set.overrides().count(), "Flags resolved");
    Ok(set)
}

/// Re-reads `env` and returns a brand-new snapshot; existing snapshots are untouched.
///
/// Nothing watches the environment: callers decide when to refresh and re-publish.
///
/// # Errors
/// See [`resolve`].
pub fn refresh<S>(registry: &FlagRegistry, env: &S) -> Result<ResolvedFlagSet, ResolverError>
where
    S: EnvironmentSource + ?Sized,
{
    resolve(registry, env)
}

/// Effective value of `name` in `set`.
///
/// # Errors
/// [`ResolverError::UnknownFlag`] if `name` is not in the snapshot.
pub fn is_enabled(set: &ResolvedFlagSet, name: &str) -> Result<bool, ResolverError> {
    set.is_enabled(name)
}
