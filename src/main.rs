use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use md2docx::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    if let Err(e) = init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref()) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let code = match process_directory(get_processing_options(&matches)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    };

    if should_wait(&matches) {
        check_for_stdout_stream();
    }

    code
}
