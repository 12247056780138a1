use linkgate_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible. If the state file cannot be
    // opened, log to stderr instead of giving up.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("linkgate error: {:#}", err);
        std::process::exit(1);
    }
}
