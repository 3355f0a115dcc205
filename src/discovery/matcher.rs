//! Candidate selection
//!
//! Decides which directory entries are converted and what they are converted to.

use std::path::Path;

use crate::config::Settings;
use crate::utils::lowercase_file_name;

use super::scanner::DirectoryEntry;

/// A Markdown file selected for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name of the source file, relative to the scanned directory
    pub source: String,
    /// Name of the document the converter is asked to write
    pub output: String,
}

/// Checks whether a file name is eligible for conversion
///
/// The name must end with the source extension and must not be the readme,
/// both compared case-insensitively.
pub fn is_candidate(file_name: &str, settings: &Settings) -> bool {
    let lowered = match lowercase_file_name(Path::new(file_name)) {
        Some(name) => name,
        None => return false,
    };

    lowered.ends_with(&settings.source_suffix()) && lowered != settings.readme.to_lowercase()
}

/// Computes the output name of a candidate
///
/// The final extension is replaced by the target extension, so `draft.MD`
/// becomes `draft.docx` and `a.b.md` becomes `a.b.docx`.
pub fn output_file_name(file_name: &str, settings: &Settings) -> String {
    let base_name = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    format!("{base_name}.{}", settings.target_extension)
}

/// Turns a directory entry into a candidate if it is eligible
///
/// Only regular files are candidates.
pub fn select_candidate(entry: &DirectoryEntry, settings: &Settings) -> Option<Candidate> {
    if !entry.is_file || !is_candidate(&entry.file_name, settings) {
        return None;
    }

    Some(Candidate {
        source: entry.file_name.clone(),
        output: output_file_name(&entry.file_name, settings),
    })
}
