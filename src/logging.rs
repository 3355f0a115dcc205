use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

use crate::constants::SUCCESS_MARK;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Status lines, warnings and errors (default)
    Info,
    /// Also skipped entries and the run summary
    Debug,
    /// Also the exact converter command lines
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Initialise the logger
///
/// Every record goes to stdout, coloured by [`console_line`] when stdout is a
/// terminal. When `log_file` is given the same records are appended to it
/// uncoloured, with a timestamp and the record target.
pub fn init_logger(verbosity: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let level = verbosity.to_level_filter();
    let colored_output = atty::is(atty::Stream::Stdout);

    let output_logger = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                console_line(record.level(), &message.to_string(), colored_output)
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    let mut base_logger = Dispatch::new().level(level).chain(output_logger);

    if let Some(path) = log_file {
        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let file_logger = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(file);
        base_logger = base_logger.chain(file_logger);
    }

    base_logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Renders a record for the console
///
/// Success lines are green, everything else takes its level's colour. Plain
/// text is returned when `colored` is false.
pub fn console_line(level: Level, message: &str, colored: bool) -> String {
    if !colored {
        return message.to_string();
    }

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);

    let color = if level == Level::Info && message.starts_with(SUCCESS_MARK) {
        Color::Green
    } else {
        colors_line.get_color(&level)
    };

    format!("\x1B[{}m{}\x1B[0m", color.to_fg_str(), message)
}
