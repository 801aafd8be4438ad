use super::*;
use crate::error::PlaybackError;
use crate::track::Track;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(String),
    Play,
    Pause,
    Resume,
    Stop,
    SetVolume(f32),
}

#[derive(Debug, Default)]
struct FakeDevice {
    calls: Vec<Call>,
}

impl AudioDevice for FakeDevice {
    fn load(&mut self, source: &str) {
        self.calls.push(Call::Load(source.to_string()));
    }
    fn play(&mut self) {
        self.calls.push(Call::Play);
    }
    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn resume(&mut self) {
        self.calls.push(Call::Resume);
    }
    fn stop(&mut self) {
        self.calls.push(Call::Stop);
    }
    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::SetVolume(volume));
    }
}

fn t(title: &str, duration: &str) -> Track {
    Track {
        title: title.into(),
        author: "Artist".into(),
        duration: duration.into(),
        url: format!("https://example.invalid/{title}"),
        video_id: format!("id-{title}"),
    }
}

fn player_with(titles: &[&str]) -> Player<FakeDevice> {
    let mut player = Player::new(FakeDevice::default());
    for title in titles {
        player.append(t(title, "3:45"));
    }
    player
}

#[test]
fn play_on_empty_playlist_reports_error_and_changes_nothing() {
    let mut player = Player::new(FakeDevice::default());
    assert_eq!(player.play(), Err(PlaybackError::EmptyPlaylist));
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert!(player.device().calls.is_empty());
}

#[test]
fn play_starts_the_track_at_the_cursor() {
    let mut player = player_with(&["A", "B"]);
    player.play().unwrap();

    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_track().unwrap().title, "A");
    assert_eq!(player.progress(), 0);
    assert_eq!(player.progress_max(), 225);
    assert_eq!(
        player.device().calls,
        vec![Call::Load("https://example.invalid/A".into()), Call::Play]
    );
}

#[test]
fn pause_then_play_resumes_without_resetting_progress() {
    let mut player = player_with(&["A"]);
    player.play().unwrap();
    player.tick();
    player.tick();
    assert_eq!(player.progress(), 2);

    player.pause();
    assert_eq!(player.state(), PlaybackState::Paused);

    player.play().unwrap();
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.progress(), 2);
    assert_eq!(player.device().calls.last(), Some(&Call::Resume));
}

#[test]
fn pause_is_a_noop_unless_playing() {
    let mut player = player_with(&["A"]);
    player.pause();
    assert_eq!(player.state(), PlaybackState::Stopped);

    player.play().unwrap();
    player.pause();
    player.pause();
    assert_eq!(player.state(), PlaybackState::Paused);
    let pauses = player
        .device()
        .calls
        .iter()
        .filter(|c| **c == Call::Pause)
        .count();
    assert_eq!(pauses, 1);
}

#[test]
fn stop_always_resets_progress() {
    let mut player = player_with(&["A"]);
    player.play().unwrap();
    player.tick();
    player.stop();
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.progress(), 0);

    // Stop from Paused behaves the same.
    player.play().unwrap();
    player.tick();
    player.pause();
    player.stop();
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.progress(), 0);
}

#[test]
fn next_wraps_past_the_end_and_starts_playing() {
    let mut player = player_with(&["A", "B", "C"]);
    player.play_track(2).unwrap();
    player.next();

    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_track().unwrap().title, "A");
}

#[test]
fn previous_wraps_before_the_start() {
    let mut player = player_with(&["A", "B", "C"]);
    player.play().unwrap();
    player.previous();
    assert_eq!(player.current_track().unwrap().title, "C");
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn next_then_previous_restores_track_and_state() {
    let mut player = player_with(&["A", "B", "C"]);
    player.play_track(1).unwrap();
    player.next();
    player.previous();
    assert_eq!(player.current_track().unwrap().title, "B");
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn next_applied_len_times_closes_the_loop() {
    let mut player = player_with(&["A", "B", "C"]);
    player.play().unwrap();
    for _ in 0..3 {
        player.next();
    }
    assert_eq!(player.current_track().unwrap().title, "A");
}

#[test]
fn next_and_previous_are_noops_on_empty_playlist() {
    let mut player = Player::new(FakeDevice::default());
    player.next();
    player.previous();
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert!(player.device().calls.is_empty());
}

#[test]
fn tick_advances_progress_only_while_playing() {
    let mut player = player_with(&["A"]);
    player.tick();
    assert_eq!(player.progress(), 0);

    player.play().unwrap();
    player.tick();
    assert_eq!(player.progress(), 1);

    player.pause();
    player.tick();
    assert_eq!(player.progress(), 1);
}

#[test]
fn tick_at_end_of_track_auto_advances() {
    let mut player = Player::new(FakeDevice::default());
    player.append(t("A", "0:03"));
    player.append(t("B", "3:45"));

    player.play().unwrap();
    player.tick();
    player.tick();
    assert_eq!(player.progress(), 2);
    assert_eq!(player.current_track().unwrap().title, "A");

    // One more tick reaches the simulated length and moves on.
    player.tick();
    assert_eq!(player.current_track().unwrap().title, "B");
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.progress(), 0);
    assert_eq!(player.progress_max(), 225);
}

#[test]
fn auto_advance_on_single_track_restarts_it() {
    let mut player = Player::new(FakeDevice::default());
    player.append(t("A", "0:02"));
    player.play().unwrap();

    player.tick();
    player.tick();
    assert_eq!(player.current_track().unwrap().title, "A");
    assert_eq!(player.progress(), 0);
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn unparseable_duration_falls_back_to_default_length() {
    let mut player = Player::new(FakeDevice::default());
    player.append(t("A", "live"));
    player.play().unwrap();
    assert_eq!(player.progress_max(), crate::track::DEFAULT_TRACK_SECS);
}

#[test]
fn set_volume_clamps_and_forwards_to_the_device() {
    let mut player = player_with(&["A"]);
    assert_eq!(player.set_volume(0.4), 0.4);
    assert_eq!(player.set_volume(1.7), 1.0);
    assert_eq!(player.set_volume(-0.3), 0.0);
    assert_eq!(
        player.device().calls,
        vec![
            Call::SetVolume(0.4),
            Call::SetVolume(1.0),
            Call::SetVolume(0.0)
        ]
    );
}

#[test]
fn toggle_mute_twice_restores_the_previous_volume() {
    let mut player = player_with(&["A"]);
    player.set_volume(0.6);

    player.toggle_mute();
    assert!(player.is_muted());
    assert_eq!(player.volume(), 0.0);

    player.toggle_mute();
    assert!(!player.is_muted());
    assert_eq!(player.volume(), 0.6);
}

#[test]
fn setting_volume_clears_an_active_mute() {
    let mut player = player_with(&["A"]);
    player.toggle_mute();
    player.set_volume(0.3);
    assert!(!player.is_muted());

    // The next toggle mutes again instead of "restoring".
    player.toggle_mute();
    assert_eq!(player.volume(), 0.0);
}

#[test]
fn seek_clamps_to_track_length_and_ignores_stopped() {
    let mut player = player_with(&["A"]);
    player.seek(10);
    assert_eq!(player.progress(), 0);

    player.play().unwrap();
    player.seek(10);
    assert_eq!(player.progress(), 10);
    player.seek(9999);
    assert_eq!(player.progress(), 225);
}

#[test]
fn append_with_auto_play_starts_the_first_track() {
    let mut player = Player::new(FakeDevice::default());
    player.set_auto_play(true);
    player.append(t("A", "3:45"));

    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.current_track().unwrap().title, "A");

    // Later appends never interrupt what is playing.
    player.append(t("B", "3:45"));
    assert_eq!(player.current_track().unwrap().title, "A");
}

#[test]
fn append_without_auto_play_stays_stopped() {
    let mut player = Player::new(FakeDevice::default());
    player.append(t("A", "3:45"));
    assert_eq!(player.state(), PlaybackState::Stopped);
    assert!(player.device().calls.is_empty());
}

#[test]
fn clear_stops_playback_and_empties_the_playlist() {
    let mut player = player_with(&["A", "B"]);
    player.play().unwrap();
    player.clear();

    assert_eq!(player.state(), PlaybackState::Stopped);
    assert!(player.playlist().is_empty());
    assert_eq!(player.device().calls.last(), Some(&Call::Stop));
}

#[test]
fn play_track_ignores_out_of_range_on_nonempty_playlist() {
    let mut player = player_with(&["A", "B"]);
    player.play_track(7).unwrap();
    assert_eq!(player.state(), PlaybackState::Stopped);

    let mut empty = Player::new(FakeDevice::default());
    assert_eq!(empty.play_track(0), Err(PlaybackError::EmptyPlaylist));
}

#[test]
fn load_playlist_failure_keeps_current_playback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    std::fs::write(&path, "not json").unwrap();

    let mut player = player_with(&["A"]);
    player.play().unwrap();
    assert!(player.load_playlist(&path).is_err());
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.playlist().len(), 1);
}

#[test]
fn load_playlist_replaces_tracks_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");

    player_with(&["X", "Y"]).save_playlist(&path).unwrap();

    let mut player = player_with(&["A"]);
    player.play().unwrap();
    player.load_playlist(&path).unwrap();

    assert_eq!(player.state(), PlaybackState::Stopped);
    assert_eq!(player.playlist().len(), 2);
    assert_eq!(player.playlist().current_index(), Some(0));
    assert_eq!(player.current_track().unwrap().title, "X");
}
