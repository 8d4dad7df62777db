mod cli;

use sparkget_core::logging;

fn main() {
    // Initialize logging as early as possible; never fail the CLI over it.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = cli::CliCommand::run_from_args() {
        eprintln!("sparkget error: {:#}", err);
        std::process::exit(1);
    }
}
