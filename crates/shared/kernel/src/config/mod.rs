use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use syd_domain::config::Settings;
use tracing::{debug, info};

/// Settings file looked up in the working directory when no path is given (`switchyard.toml`).
pub const DEFAULT_SETTINGS_FILE: &str = "switchyard";
/// Prefix of environment variables overriding settings (`SYD__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "SYD";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for settings loading.
#[syd_derive::syd_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: an explicit `path` is required to exist. Without one, the optional
///    `switchyard` file (any format `config` understands, e.g. `switchyard.toml`) is used
///    when present.
/// 2. **Environment Overrides**: variables prefixed with `SYD__`, nested with `__`
///    (e.g. `SYD__LOGGING__LEVEL` maps to `logging.level`).
///
/// These variables configure the tooling only; they are never read as flag overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed,
/// or the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads the `SYD__` overrides from `env` instead of the
/// process environment when it is `Some`.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .convert_case(config::Case::Snake)
                .source(env),
        );

    if required {
        info!(path = %effective_path.display(), "Loading settings");
    } else {
        debug!(path = %effective_path.display(), "Loading optional settings");
    }

    let config = builder
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<T>()
        .context("Failed to deserialize settings")?;

    Ok(config)
}

/// Loads the Switchyard [`Settings`].
///
/// # Errors
/// See [`load_config`].
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<Settings, ConfigError> {
    load_config(path)
}
