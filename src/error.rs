//! Error taxonomy shared across the crate.
//!
//! Persistence and search failures are reported to the caller for display
//! and never abort the process; settings load failures degrade to defaults
//! with a logged warning.

use std::time::Duration;

use thiserror::Error;

/// Playback command failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("the playlist is empty")]
    EmptyPlaylist,
}

/// Search adapter failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The query was empty or whitespace. Rejected before any provider call.
    #[error("search query is empty")]
    InvalidQuery,
    /// The underlying provider failed.
    #[error("search provider failed: {0}")]
    Provider(String),
    /// The provider took longer than the configured deadline.
    #[error("search timed out after {0:?}")]
    Timeout(Duration),
}

/// Playlist save/load failures.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access playlist file: {0}")]
    Io(#[from] std::io::Error),
    #[error("playlist file is not a valid track list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Settings load/save failures. Loading falls back to defaults, so this
/// mostly surfaces from explicit saves.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write settings file: {0}")]
    Io(#[from] std::io::Error),
}
