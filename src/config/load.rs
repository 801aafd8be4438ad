use std::{env, path::PathBuf};

use log::warn;

use crate::error::ConfigError;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then environment
/// variables (prefix `CADENZA__`), falling back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CADENZA")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Load settings, degrading to defaults on any failure.
    ///
    /// A missing file already loads fine (defaults apply per field); this
    /// additionally swallows unreadable or malformed files, logging the
    /// reason. Settings problems must never prevent startup.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => {
                if let Err(msg) = settings.validate() {
                    warn!("invalid settings, using defaults: {msg}");
                    Self::default()
                } else {
                    settings
                }
            }
            Err(e) => {
                warn!("failed to load settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(format!("volume must be within [0, 1], got {}", self.volume));
        }
        Ok(())
    }
}

/// Resolve the config path from `CADENZA_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CADENZA_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/cadenza/config.toml`
/// or `~/.config/cadenza/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("cadenza").join("config.toml"))
}
