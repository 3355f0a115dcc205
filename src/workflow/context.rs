//! Workflow context
//!
//! This module defines the state carried through one conversion run.

/// Context for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// Whether the converter was only simulated
    pub dry_run: bool,
    /// Counters for the run
    pub stats: ConversionStats,
}

/// Counters for a conversion run
///
/// Only numbers are kept; the outcome of each file is reported as it happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of directory entries looked at
    pub entries_seen: usize,
    /// Number of entries selected for conversion
    pub candidates: usize,
    /// Number of documents written
    pub converted: usize,
    /// Number of failed conversions
    pub failed: usize,
    /// Number of entries that were not candidates
    pub skipped: usize,
}

impl ConversionContext {
    /// Creates a new context for a run
    pub fn new(dry_run: bool) -> Self {
        ConversionContext {
            dry_run,
            stats: ConversionStats::default(),
        }
    }

    /// Increments the number of entries seen
    pub fn increment_entries_seen(&mut self) {
        self.stats.entries_seen += 1;
    }

    /// Increments the number of candidates
    pub fn increment_candidates(&mut self) {
        self.stats.candidates += 1;
    }

    /// Increments the number of converted files
    pub fn increment_converted(&mut self) {
        self.stats.converted += 1;
    }

    /// Increments the number of failed conversions
    pub fn increment_failed(&mut self) {
        self.stats.failed += 1;
    }

    /// Increments the number of skipped entries
    pub fn increment_skipped(&mut self) {
        self.stats.skipped += 1;
    }
}
