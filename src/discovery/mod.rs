//! File discovery module
//!
//! This module contains components for listing a directory and selecting the
//! files to convert.

mod matcher;
mod scanner;

pub use matcher::{Candidate, is_candidate, output_file_name, select_candidate};
pub use scanner::{DirectoryEntry, scan_directory};
