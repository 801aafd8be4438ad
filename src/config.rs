//! Configuration loader and schema types.
//!
//! This module exposes the settings schema, helpers to load settings from
//! disk and environment, and the write-back used to persist them.

mod load;
mod schema;
mod store;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
