use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Settings of the Switchyard tooling itself (not flag overrides).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsInner {
    pub logging: LoggingSettings,
    pub flags: FlagSettings,
}

/// Thin Arc-wrapped settings for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(flatten, default)]
    inner: Arc<SettingsInner>,
}

impl Deref for Settings {
    type Target = SettingsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Settings {
    fn deref_mut(&mut self) -> &mut SettingsInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name understood by `tracing` (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    /// Emit the log file as JSON lines.
    pub json: bool,
    pub max_files: usize,
    /// Extra `EnvFilter` directives, e.g. `syd_resolver=debug`.
    pub filter: Option<String>,
}

/// `[flags]` section.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagSettings {
    /// TOML manifest with additional `[[flags]]` definitions.
    pub manifest: Option<PathBuf>,
    /// Dotenv-style file layered over the process environment.
    pub env_file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: 10,
            filter: None,
        }
    }
}
