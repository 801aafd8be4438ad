use std::fs;
use std::path::Path;

use crate::error::ConfigError;

use super::schema::Settings;

impl Settings {
    /// Persist the settings record to `path` as TOML, creating parent
    /// directories as needed.
    ///
    /// The app calls this on every volume change, so the file on disk
    /// always reflects the last slider position.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = toml::to_string_pretty(self)?;
        fs::write(path, body)?;
        Ok(())
    }
}
