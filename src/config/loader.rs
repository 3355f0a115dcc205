//! Configuration loading functionality
//!
//! This module contains functions for locating, loading and validating settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::from_str;

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::config_parsing_error;
use crate::utils::{expand_home, find_project_folder};

use super::model::Settings;

/// Loads settings from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Settings>` - The loaded settings or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the settings are invalid
pub fn load_config(file: &Path) -> Result<Settings> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    // An empty file is a valid way of asking for the defaults
    if content_str.trim().is_empty() {
        return Ok(Settings::default());
    }

    let mut settings: Settings = from_str(&content_str).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "Failed to parse configuration file {}. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    settings.converter = expand_home(&settings.converter);
    settings.validate()?;

    Ok(settings)
}

/// Finds the configuration file to use for a directory
///
/// Looks for the settings file first in the scanned directory, then in the
/// platform configuration directory. Returns `None` when neither exists.
pub fn find_config_file(directory: &Path) -> Option<PathBuf> {
    let local = directory.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    let global = find_project_folder().ok()?.config_dir().join(CONFIG_FILE_NAME);
    if global.is_file() {
        return Some(global);
    }

    None
}

/// Resolves the settings for a run
///
/// An explicitly requested file must exist. Without one, the first file found
/// by [`find_config_file`] is used, falling back to the built-in defaults.
///
/// # Arguments
/// * `explicit` - The file given on the command line, if any
/// * `directory` - The directory being converted
///
/// # Errors
/// Returns an error if the explicit file is missing or any file fails to load
pub fn resolve_settings(explicit: Option<&str>, directory: &Path) -> Result<Settings> {
    let config_file = match explicit {
        Some(path) => {
            let path = PathBuf::from(expand_home(path));
            if !path.is_file() {
                return Err(anyhow!(
                    "Configuration file does not exist: {}",
                    path.display()
                ));
            }
            Some(path)
        }
        None => find_config_file(directory),
    };

    match config_file {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            load_config(&path)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Settings::default())
        }
    }
}
