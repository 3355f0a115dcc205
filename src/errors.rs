use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the md2docx application
#[derive(Debug)]
pub enum Error {
    /// The external converter failed for a single file
    ConversionFailed { file: String, detail: String },
    /// The scanned directory could not be read
    DirectoryRead { source: io::Error, path: PathBuf },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// A setting has a value the converter loop cannot work with
    InvalidSetting { key: String, detail: String },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConversionFailed { file, detail } => {
                write!(f, "Failed to convert {file}: {detail}")
            }
            Error::DirectoryRead { path, source } => {
                write!(f, "Failed to read directory {}: {source}", path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidSetting { key, detail } => {
                write!(f, "Invalid value for '{key}': {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::DirectoryRead { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the md2docx application
///
/// # Examples
/// ```
/// use md2docx::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a conversion failure
pub fn conversion_failed_error(file: &str, detail: &str) -> Error {
    Error::ConversionFailed {
        file: file.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a directory read error
pub fn directory_read_error(err: io::Error, path: PathBuf) -> Error {
    Error::DirectoryRead { source: err, path }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid setting error
pub fn invalid_setting_error(key: &str, detail: &str) -> Error {
    Error::InvalidSetting {
        key: key.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
