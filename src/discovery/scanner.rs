//! Directory scanning functionality
//!
//! This module lists the entries of the directory being converted.

use std::fs::read_dir;
use std::path::Path;

use log::{debug, warn};

use crate::errors::{Result, directory_read_error, invalid_filename_error};

/// An entry found while listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The entry's file name
    pub file_name: String,
    /// Whether the entry is a regular file (symlinks are followed)
    pub is_file: bool,
}

impl DirectoryEntry {
    /// Creates a new DirectoryEntry from a path
    ///
    /// # Errors
    /// Returns an error if the path has no file name or the name is not valid Unicode
    pub fn new(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?
            .to_string();

        Ok(DirectoryEntry {
            file_name,
            is_file: path.is_file(),
        })
    }
}

/// Lists a directory once
///
/// Entries whose names are not valid Unicode are skipped with a warning. The
/// result is sorted by file name so that repeated runs report in the same order.
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path) -> Result<Vec<DirectoryEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let mut entries: Vec<DirectoryEntry> = read_dir(directory)
        .map_err(|e| directory_read_error(e, directory.to_path_buf()))?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", directory.display());
                None
            }
        })
        .filter_map(|path| match DirectoryEntry::new(&path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping entry: {e}");
                None
            }
        })
        .collect();

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    debug!("Found {} entries in directory", entries.len());

    Ok(entries)
}
