use partfinder_core::logging;
use partfinder_core::lookup::LookupError;

mod cli;

use crate::cli::CliCommand;

/// Exit status when the plate service has no vehicle for the plate.
const EXIT_NOT_FOUND: i32 = 2;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        if let Some(LookupError::NotFound) = err.downcast_ref::<LookupError>() {
            eprintln!("partfinder: {}", LookupError::NotFound);
            std::process::exit(EXIT_NOT_FOUND);
        }
        eprintln!("partfinder error: {:#}", err);
        std::process::exit(1);
    }
}
