//! Playback control.
//!
//! [`Player`] is the state machine over Stopped/Playing/Paused driven by
//! user commands and a periodic tick. Sound output is delegated to an
//! [`AudioDevice`]; progress is a simulated counter advanced by the tick.

mod controller;
mod device;

pub use controller::{PlaybackState, Player};
pub use device::{AudioDevice, SilentDevice};

#[cfg(test)]
mod tests;
