//! Workflow engine
//!
//! This module contains the loop that converts every candidate of a directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error, info};

use crate::config::{Settings, resolve_settings};
use crate::converter::{CommandConverter, Converter};
use crate::discovery::{Candidate, scan_directory, select_candidate};
use crate::constants::{FAILURE_MARK, SUCCESS_MARK};

use super::context::ConversionContext;

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Directory containing the Markdown files
    pub directory: PathBuf,
    /// Configuration file given on the command line
    pub config_path: Option<String>,
    /// Converter program given on the command line, overriding the settings
    pub converter: Option<String>,
    /// Whether to only report the conversions instead of running them
    pub dry_run: bool,
}

/// Converts a directory using the external converter
///
/// This function:
/// 1. Resolves the settings (config file, defaults, command-line override)
/// 2. Builds the subprocess converter
/// 3. Runs [`convert_directory`]
///
/// # Errors
/// Returns an error if the settings are invalid or the directory cannot be read.
/// Individual conversion failures are reported and never returned.
pub fn process_directory(options: ProcessingOptions) -> Result<ConversionContext> {
    let mut settings = resolve_settings(options.config_path.as_deref(), &options.directory)?;
    if let Some(converter) = options.converter {
        settings.converter = converter;
        settings.validate()?;
    }

    let converter = CommandConverter::new(&settings);
    convert_directory(&options.directory, &settings, &converter, options.dry_run)
}

/// Converts every candidate of a directory, one at a time
///
/// The directory is listed once. For each candidate the converter is invoked
/// and the outcome is reported immediately; a failure never stops the loop.
///
/// # Errors
/// Returns an error only if the directory cannot be read
pub fn convert_directory(
    directory: &Path,
    settings: &Settings,
    converter: &dyn Converter,
    dry_run: bool,
) -> Result<ConversionContext> {
    let mut context = ConversionContext::new(dry_run);

    let entries = scan_directory(directory)
        .with_context(|| format!("Cannot convert files in {}", directory.display()))?;

    for entry in entries {
        context.increment_entries_seen();

        let candidate = match select_candidate(&entry, settings) {
            Some(candidate) => candidate,
            None => {
                debug!("Skipping {}", entry.file_name);
                context.increment_skipped();
                continue;
            }
        };
        context.increment_candidates();

        if dry_run {
            info!("Would convert {} → {}", candidate.source, candidate.output);
            continue;
        }

        convert_candidate(directory, &candidate, converter, &mut context);
    }

    debug!(
        "Finished {}: {} entries, {} candidates, {} converted, {} failed, {} skipped",
        directory.display(),
        context.stats.entries_seen,
        context.stats.candidates,
        context.stats.converted,
        context.stats.failed,
        context.stats.skipped
    );

    Ok(context)
}

fn convert_candidate(
    directory: &Path,
    candidate: &Candidate,
    converter: &dyn Converter,
    context: &mut ConversionContext,
) {
    info!("Converting {} → {}...", candidate.source, candidate.output);

    if directory.join(&candidate.output).exists() {
        debug!("{} already exists and will be overwritten", candidate.output);
    }

    match converter.convert(directory, candidate) {
        Ok(()) => {
            context.increment_converted();
            info!("{SUCCESS_MARK} Successfully created {}", candidate.output);
        }
        Err(e) => {
            context.increment_failed();
            error!("{FAILURE_MARK} {e}");
        }
    }
}
