//! Converts the Markdown files of a directory into Word documents
//!
//! Every `*.md` file except the readme is handed to an external converter
//! (`pandoc -s <name>.md -o <name>.docx` by default), one at a time. A failed
//! conversion is reported and the run carries on with the next file.

pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{
        check_for_stdout_stream, get_log_file, get_matches, get_processing_options,
        get_verbosity, should_wait,
    };
    pub use crate::config::{Settings, resolve_settings};
    pub use crate::converter::{CommandConverter, Converter};
    pub use crate::discovery::{Candidate, is_candidate, output_file_name};
    pub use crate::errors::{
        Error, Result, conversion_failed_error, config_parsing_error, directory_read_error,
        generic_error, invalid_filename_error, invalid_setting_error,
    };
    pub use crate::logging::{LogLevel, console_line, init_logger};
    pub use crate::workflow::{
        ConversionContext, ProcessingOptions, convert_directory, process_directory,
    };
}
