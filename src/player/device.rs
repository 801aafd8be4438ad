/// Sound output consumed by the player.
///
/// Implementations are expected to be cheap and non-blocking; a backend
/// that can block must run on its own thread and marshal calls over a
/// channel, the same way searches do.
pub trait AudioDevice {
    /// Prepare the given source for playback.
    fn load(&mut self, source: &str);
    /// Start playback of the loaded source from the beginning.
    fn play(&mut self);
    fn pause(&mut self);
    /// Continue after `pause` without losing position.
    fn resume(&mut self);
    fn stop(&mut self);
    /// Volume in [0, 1]. Callers clamp before forwarding.
    fn set_volume(&mut self, volume: f32);
}

/// No-op output. Stands in for a real audio backend; playback position is
/// simulated by the player's tick counter instead of decoder feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDevice;

impl AudioDevice for SilentDevice {
    fn load(&mut self, _source: &str) {}
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn resume(&mut self) {}
    fn stop(&mut self) {}
    fn set_volume(&mut self, _volume: f32) {}
}
