/// Constants used throughout the application
///
/// This module centralises the defaults and help texts so that the command
/// line, the configuration layer and the tests agree on them.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used for the platform configuration
/// directory.
pub const APPLICATION: &str = "md2docx";

/// Name of the optional settings file
pub const CONFIG_FILE_NAME: &str = "md2docx.yaml";

/// Converter program invoked when no other is configured
pub const DEFAULT_CONVERTER: &str = "pandoc";

/// Flag asking the converter for a standalone document
pub const STANDALONE_FLAG: &str = "-s";

/// Option introducing the converter's output path
pub const OUTPUT_FLAG: &str = "-o";

/// Extension of the Markdown sources, without the dot
pub const DEFAULT_SOURCE_EXTENSION: &str = "md";

/// Extension of the generated documents, without the dot
pub const DEFAULT_TARGET_EXTENSION: &str = "docx";

/// File that is never converted, compared case-insensitively
pub const DEFAULT_README: &str = "README.md";

/// Directory scanned when none is given on the command line
pub const DEFAULT_DIRECTORY: &str = ".";

/// Help text for the directory argument
pub const DIRECTORY_HELP: &str = "Directory containing the Markdown files";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific config file";

/// Help text for the converter command-line option
pub const CONVERTER_HELP: &str = "Converter program to invoke instead of the configured one";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "List the conversions without running the converter";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the wait command-line option
pub const WAIT_HELP: &str = "Wait for Enter before exiting when run in a terminal";

/// Prefix of the line reporting a written document
pub const SUCCESS_MARK: &str = "✅";

/// Prefix of the line reporting a failed conversion
pub const FAILURE_MARK: &str = "❌";
