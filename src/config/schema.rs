use serde::{Deserialize, Serialize};

/// Application settings, one flat record persisted as `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or
/// `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// Defaults apply per field, so a partial file is fine; a malformed file
/// is not fatal either (see `Settings::load_or_default`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Presentation theme identifier. Opaque to the core.
    pub theme: String,
    /// Playback volume in [0, 1].
    pub volume: f32,
    /// Where downloaded tracks would land. Carried for the presentation
    /// layer; the core never writes there.
    pub download_path: String,
    /// Whether appending the first track starts playback immediately.
    pub auto_play: bool,
    /// Identifier of the search backend to use.
    pub search_provider: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            volume: 0.5,
            download_path: "downloads".to_string(),
            auto_play: true,
            search_provider: "placeholder".to_string(),
        }
    }
}
