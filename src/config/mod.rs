//! Configuration module
//!
//! This module contains components for loading and validating settings.

mod loader;
mod model;

pub use loader::{find_config_file, load_config, resolve_settings};
pub use model::Settings;
