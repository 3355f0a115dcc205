//! Configuration data structures
//!
//! This module contains the settings that drive the converter loop.

use anyhow::Result;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CONVERTER, DEFAULT_README, DEFAULT_SOURCE_EXTENSION, DEFAULT_TARGET_EXTENSION,
};
use crate::errors::invalid_setting_error;

/// Settings for a conversion run
///
/// Every field is optional in the YAML file; the defaults reproduce
/// `pandoc -s <name>.md -o <name>.docx` for every Markdown file except the readme.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Converter program, looked up on `PATH` unless it contains a separator
    pub converter: String,
    /// Arguments placed before the source file on every invocation
    pub extra_args: Vec<String>,
    /// Whether to pass the standalone flag
    pub standalone: bool,
    /// Extension of the files to convert, without the dot
    pub source_extension: String,
    /// Extension of the generated documents, without the dot
    pub target_extension: String,
    /// File name that is never converted, compared case-insensitively
    pub readme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            converter: DEFAULT_CONVERTER.to_string(),
            extra_args: Vec::new(),
            standalone: true,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            readme: DEFAULT_README.to_string(),
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error naming the offending key when the converter is empty or
    /// an extension is empty or contains a dot or a path separator.
    pub fn validate(&self) -> Result<()> {
        if self.converter.trim().is_empty() {
            return Err(invalid_setting_error("converter", "must not be empty").into());
        }

        for (key, value) in [
            ("source_extension", &self.source_extension),
            ("target_extension", &self.target_extension),
        ] {
            if value.is_empty() {
                return Err(invalid_setting_error(key, "must not be empty").into());
            }
            if value.contains(['.', '/', '\\']) {
                return Err(invalid_setting_error(
                    key,
                    &format!("'{value}' must be a bare extension such as 'md'"),
                )
                .into());
            }
        }

        if self.source_extension.eq_ignore_ascii_case(&self.target_extension) {
            return Err(invalid_setting_error(
                "target_extension",
                "must differ from source_extension",
            )
            .into());
        }

        Ok(())
    }

    /// Suffix a candidate's name must end with, lowercased and with its dot
    pub fn source_suffix(&self) -> String {
        format!(".{}", self.source_extension.to_lowercase())
    }
}
