use std::path::{Path, PathBuf};

use log::warn;

use crate::config::{self, Settings};
use crate::error::{PersistenceError, PlaybackError, SearchError};
use crate::player::{AudioDevice, PlaybackState, Player};
use crate::search::{SearchEvent, SearchWorker, provider_for};
use crate::track::Track;

/// The application state, owned by the interaction thread.
///
/// All mutation goes through the command methods below; the presentation
/// layer reads state back through the query accessors and never touches
/// fields directly. Long-running work (search) happens on a worker thread
/// and is applied here when [`App::poll_search`] drains its events.
pub struct App<D: AudioDevice> {
    player: Player<D>,
    settings: Settings,
    settings_path: Option<PathBuf>,
    search: SearchWorker,
    search_results: Vec<Track>,
}

impl<D: AudioDevice> App<D> {
    /// Build the app with settings loaded from the default location.
    /// Settings problems degrade to defaults and never fail startup.
    pub fn new(device: D) -> Self {
        let settings = Settings::load_or_default();
        let settings_path = config::resolve_config_path();
        Self::with_settings(device, settings, settings_path)
    }

    /// Build the app from explicit settings. `settings_path` is where
    /// volume changes get persisted; `None` disables persistence.
    pub fn with_settings(device: D, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let mut player = Player::new(device);
        player.set_auto_play(settings.auto_play);
        player.set_volume(settings.volume);

        let search = SearchWorker::new(provider_for(&settings.search_provider));

        Self {
            player,
            settings,
            settings_path,
            search,
            search_results: Vec::new(),
        }
    }

    // ---- playback commands -------------------------------------------

    pub fn play(&mut self) -> Result<(), PlaybackError> {
        self.player.play()
    }

    /// Start playback of the playlist entry at `index`.
    pub fn play_track(&mut self, index: usize) -> Result<(), PlaybackError> {
        self.player.play_track(index)
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }

    pub fn next(&mut self) {
        self.player.next();
    }

    pub fn previous(&mut self) {
        self.player.previous();
    }

    /// Set the volume and persist it to the settings file immediately.
    ///
    /// Kept as one write per change, matching the reviewed behavior; a
    /// persistence failure is logged and playback continues.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = self.player.set_volume(volume);
        self.settings.volume = volume;
        self.persist_settings();
    }

    /// Mute/unmute without touching the persisted volume.
    pub fn toggle_mute(&mut self) {
        self.player.toggle_mute();
    }

    /// Position the simulated progress counter.
    pub fn seek(&mut self, progress: u64) {
        self.player.seek(progress);
    }

    /// Periodic tick, nominally once per second, driven by the embedding
    /// layer. Advances simulated progress and auto-advances at track end.
    pub fn tick(&mut self) {
        self.player.tick();
    }

    // ---- playlist commands -------------------------------------------

    /// Append a track to the playlist. The first track starts playing
    /// when auto-play is enabled in settings.
    pub fn append_track(&mut self, track: Track) {
        self.player.append(track);
    }

    /// Append the search result at `index` to the playlist. Returns
    /// `false` when the index is out of range.
    pub fn queue_result(&mut self, index: usize) -> bool {
        let Some(track) = self.search_results.get(index).cloned() else {
            return false;
        };
        self.player.append(track);
        true
    }

    /// Empty the playlist and stop playback. The presentation layer is
    /// responsible for asking the user first.
    pub fn clear_playlist(&mut self) {
        self.player.clear();
    }

    pub fn save_playlist(&self, path: &Path) -> Result<(), PersistenceError> {
        self.player.save_playlist(path)
    }

    pub fn load_playlist(&mut self, path: &Path) -> Result<(), PersistenceError> {
        self.player.load_playlist(path)
    }

    // ---- settings ----------------------------------------------------

    /// Restore all settings to their defaults and persist the result.
    ///
    /// Volume and auto-play take effect on the player immediately. The
    /// presentation layer is responsible for confirming with the user.
    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
        self.player.set_auto_play(self.settings.auto_play);
        self.player.set_volume(self.settings.volume);
        self.persist_settings();
    }

    // ---- search ------------------------------------------------------

    /// Queue a search with the configured provider. Empty queries are
    /// rejected here, before the worker sees them.
    pub fn search(&mut self, query: &str) -> Result<(), SearchError> {
        self.search.submit(query)
    }

    /// Drain pending search outcomes, applying result batches to
    /// [`App::search_results`].
    ///
    /// There is no cancellation: results of an older query are applied
    /// too, and the latest arrival wins. The drained events are returned
    /// so failures can be shown to the user.
    pub fn poll_search(&mut self) -> Vec<SearchEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.search.try_recv() {
            if let SearchEvent::Results { tracks, .. } = &event {
                self.search_results = tracks.clone();
            }
            events.push(event);
        }
        events
    }

    // ---- queries -----------------------------------------------------

    pub fn state(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn progress(&self) -> u64 {
        self.player.progress()
    }

    pub fn progress_max(&self) -> u64 {
        self.player.progress_max()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.player.current_track()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.player.playlist().current_index()
    }

    /// Playlist contents in playback order.
    pub fn tracks(&self) -> &[Track] {
        self.player.playlist().tracks()
    }

    /// The most recent search result batch, in provider ranking order.
    pub fn search_results(&self) -> &[Track] {
        &self.search_results
    }

    pub fn volume(&self) -> f32 {
        self.player.volume()
    }

    pub fn is_muted(&self) -> bool {
        self.player.is_muted()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings.save(path) {
            warn!("failed to persist settings to {}: {e}", path.display());
        }
    }
}
