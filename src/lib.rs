//! Headless music-player core: playlist management, playback control and
//! provider-backed search.
//!
//! The crate owns no UI and no audio backend. A presentation layer drives
//! the [`app::App`] command surface from a single interaction thread and
//! renders whatever the query accessors report; sound output goes through
//! the [`player::AudioDevice`] seam.

pub mod app;
pub mod config;
pub mod error;
pub mod player;
pub mod playlist;
pub mod search;
pub mod track;

pub use app::App;
pub use player::{AudioDevice, PlaybackState, Player, SilentDevice};
pub use playlist::Playlist;
pub use track::Track;
