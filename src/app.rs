//! Application state and command surface.
//!
//! [`App`] is what a presentation layer holds: it owns the player, the
//! settings and the search worker, and exposes the command entry points
//! and query accessors the UI wires its widgets to.

mod model;

pub use model::*;
