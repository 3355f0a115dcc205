use std::path::PathBuf;

use atty::Stream;
use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_name, crate_version};

use crate::constants::{
    CONFIG_HELP, CONVERTER_HELP, DEFAULT_DIRECTORY, DIRECTORY_HELP, DRY_RUN_HELP, LOG_FILE_HELP,
    VERBOSE_HELP, WAIT_HELP,
};
use crate::logging::LogLevel;
use crate::utils::expand_home;
use crate::workflow::ProcessingOptions;

/// Waits for Enter if stdout is a terminal
///
/// Keeps the console window open after the program finishes when it was
/// started by double-clicking.
pub fn check_for_stdout_stream() {
    if atty::is(Stream::Stdout) {
        dont_disappear::enter_to_continue::default();
    }
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `directory`: Directory containing the Markdown files (default: current directory)
/// - `config`: Path to a settings file
/// - `converter`: Converter program overriding the settings
/// - `dry`: Report the conversions without running them
/// - `verbose`: Increase verbosity level
/// - `log_file`: Also write the log to a file
/// - `wait`: Wait for Enter before exiting
pub fn build_command() -> Command {
    let arg_directory = Arg::new("directory")
        .help(DIRECTORY_HELP)
        .default_value(DEFAULT_DIRECTORY);

    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_converter = Arg::new("converter")
        .short('C')
        .long("converter")
        .value_name("PROGRAM")
        .help(CONVERTER_HELP);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    let arg_wait = Arg::new("wait")
        .short('w')
        .long("wait")
        .help(WAIT_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_directory)
        .arg(arg_config)
        .arg(arg_converter)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_log_file)
        .arg(arg_wait)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the log file path, if one was requested
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .map(|file| PathBuf::from(expand_home(file)))
}

/// Whether to wait for Enter before exiting
pub fn should_wait(matches: &ArgMatches) -> bool {
    matches.get_flag("wait")
}

/// Collects the processing options from the command-line arguments
pub fn get_processing_options(matches: &ArgMatches) -> ProcessingOptions {
    let directory = matches
        .get_one::<String>("directory")
        .map(|dir| expand_home(dir))
        .unwrap_or_else(|| DEFAULT_DIRECTORY.to_string());

    ProcessingOptions {
        directory: PathBuf::from(directory),
        config_path: matches.get_one::<String>("config").cloned(),
        converter: matches
            .get_one::<String>("converter")
            .map(|program| expand_home(program)),
        dry_run: matches.get_flag("dry"),
    }
}
