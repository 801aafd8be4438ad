use std::path::Path;

use log::debug;

use crate::error::{PersistenceError, PlaybackError};
use crate::playlist::Playlist;
use crate::track::Track;

use super::device::AudioDevice;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Playback state machine owning the playlist and the output device.
///
/// Progress is a simulated tick counter: the embedding layer calls
/// [`Player::tick`] about once per second and the counter runs toward the
/// current track's simulated length. A real backend would replace this
/// with position feedback from the device.
pub struct Player<D: AudioDevice> {
    device: D,
    playlist: Playlist,
    state: PlaybackState,
    progress: u64,
    progress_max: u64,
    volume: f32,
    muted_from: Option<f32>,
    auto_play: bool,
}

impl<D: AudioDevice> Player<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            playlist: Playlist::new(),
            state: PlaybackState::Stopped,
            progress: 0,
            progress_max: 0,
            volume: 1.0,
            muted_from: None,
            auto_play: false,
        }
    }

    /// Whether appending the first track starts playback immediately.
    pub fn set_auto_play(&mut self, enabled: bool) {
        self.auto_play = enabled;
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Simulated elapsed ticks for the current track.
    pub fn progress(&self) -> u64 {
        self.progress
    }

    /// Simulated length of the current track, in ticks.
    pub fn progress_max(&self) -> u64 {
        self.progress_max
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted_from.is_some()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current_track()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    // Load and start the track at the cursor, resetting progress.
    fn start_current(&mut self) {
        let Some(track) = self.playlist.current_track() else {
            return;
        };
        debug!("starting track: {}", track.display());
        self.progress = 0;
        self.progress_max = track.simulated_length();
        let url = track.url.clone();
        self.device.load(&url);
        self.device.play();
        self.state = PlaybackState::Playing;
    }

    /// Start or resume playback.
    ///
    /// From `Paused` this resumes without resetting progress; otherwise the
    /// track at the cursor starts from the beginning.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        match self.state {
            PlaybackState::Paused => {
                self.device.resume();
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Stopped | PlaybackState::Playing => {
                self.start_current();
            }
        }
        Ok(())
    }

    /// Position the cursor and start that track.
    ///
    /// Out-of-range indices on a non-empty playlist are ignored, consistent
    /// with the no-op policy for other invalid transitions.
    pub fn play_track(&mut self, index: usize) -> Result<(), PlaybackError> {
        if self.playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        if self.playlist.select(index) {
            self.start_current();
        }
        Ok(())
    }

    /// Pause playback. Only meaningful while `Playing`; a no-op otherwise.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.device.pause();
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop playback from any state and reset progress.
    pub fn stop(&mut self) {
        self.device.stop();
        self.progress = 0;
        self.progress_max = 0;
        self.state = PlaybackState::Stopped;
    }

    /// Advance the cursor (wrapping past the end) and start that track.
    /// No-op on an empty playlist.
    pub fn next(&mut self) {
        if self.playlist.advance().is_some() {
            self.start_current();
        }
    }

    /// Move the cursor back (wrapping before the start) and start that
    /// track. No-op on an empty playlist.
    pub fn previous(&mut self) {
        if self.playlist.retreat().is_some() {
            self.start_current();
        }
    }

    /// Set the volume, clamped to [0, 1], and forward it to the device.
    /// Returns the clamped value. Clears any active mute.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        self.muted_from = None;
        self.device.set_volume(volume);
        volume
    }

    /// Drop the volume to zero, remembering the previous level; a second
    /// call restores it.
    pub fn toggle_mute(&mut self) {
        match self.muted_from.take() {
            Some(previous) => {
                self.volume = previous;
                self.device.set_volume(previous);
            }
            None => {
                self.muted_from = Some(self.volume);
                self.volume = 0.0;
                self.device.set_volume(0.0);
            }
        }
    }

    /// Position the simulated counter, clamped to the track length.
    /// Ignored while stopped: there is nothing to seek in.
    pub fn seek(&mut self, progress: u64) {
        if self.state == PlaybackState::Stopped {
            return;
        }
        self.progress = progress.min(self.progress_max);
    }

    /// Periodic tick, nominally once per second.
    ///
    /// While `Playing`, advances the simulated progress; on reaching the
    /// track's simulated length the player auto-advances to the next
    /// track. No effect while `Paused` or `Stopped`.
    pub fn tick(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.progress += 1;
        if self.progress >= self.progress_max {
            self.next();
        }
    }

    /// Append a track to the playlist. When this is the first track and
    /// auto-play is enabled, playback of it starts immediately.
    pub fn append(&mut self, track: Track) {
        let was_empty = self.playlist.is_empty();
        self.playlist.append(track);
        if was_empty && self.auto_play {
            // Cannot fail: the playlist is no longer empty.
            let _ = self.play();
        }
    }

    /// Empty the playlist and stop playback. The caller is responsible for
    /// confirming the action with the user first.
    pub fn clear(&mut self) {
        self.stop();
        self.playlist.clear();
    }

    /// Serialize the playlist to `path`.
    pub fn save_playlist(&self, path: &Path) -> Result<(), PersistenceError> {
        self.playlist.save(path)
    }

    /// Replace the playlist from `path` and stop playback.
    ///
    /// On failure the current playlist and playback state are untouched.
    pub fn load_playlist(&mut self, path: &Path) -> Result<(), PersistenceError> {
        self.playlist.load(path)?;
        self.stop();
        Ok(())
    }
}
