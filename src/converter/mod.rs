//! Converter module
//!
//! The seam between the converter loop and the program that actually writes
//! the documents.

mod command;

use std::path::Path;

use crate::discovery::Candidate;
use crate::errors::Result;

pub use command::CommandConverter;

/// Something that turns one candidate into its output document
pub trait Converter {
    /// Converts `candidate.source` into `candidate.output` inside `directory`
    ///
    /// # Errors
    /// Returns `Error::ConversionFailed` when the document could not be written
    fn convert(&self, directory: &Path, candidate: &Candidate) -> Result<()>;
}
