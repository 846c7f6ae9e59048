//! `obe-tiled`: convert a Tiled JSON map into an ObEngine scene.
//!
//! Usage:
//!   obe-tiled `<input_file>` `<output_file>` [`<current_working_directory>`]

mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info, warn};

use cli::Args;
use logging::init_logging;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return argument_error(&err),
    };

    if let Err(err) = init_logging(args.log_file()) {
        let fallback = init_logging(None);
        warn!("{}", err);
        if fallback.is_err() {
            return ExitCode::FAILURE;
        }
    }

    let request = match args.to_request() {
        Ok(request) => request,
        Err(err) => {
            error!("Error in command line: {}", err);
            return ExitCode::FAILURE;
        }
    };

    info!("[ObEngine] Tiled Integration started");
    info!("  - Input file : {}", request.input_file.display());
    info!("  - Output file : {}", request.output_file.display());
    info!("  - Current working directory : {}", request.base_dir.display());

    match obe_tiled::pipeline::run(&request) {
        Ok(()) => info!("Done :)"),
        Err(err) => {
            error!("{}", err);
            info!("Something went wrong :(");
        }
    }
    ExitCode::SUCCESS
}

/// Help and version go to stdout and exit 0; anything else exits 1.
fn argument_error(err: &clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match err.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    if init_logging(None).is_ok() {
        error!("Error in command line: {}", err);
    }
    ExitCode::FAILURE
}
