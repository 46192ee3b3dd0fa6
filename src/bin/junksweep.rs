use colored::Colorize; // Import the `Colorize` trait for colored terminal output.
use junksweep::cli; // Command-line parsing.
use junksweep::config::Config; // Runtime settings built from the CLI and environment.
use junksweep::core::sweeper::{run, SweepOutcome}; // The scan → confirm → delete pipeline.
use junksweep::{log_debug, log_error, logger}; // Logging macros and the `logger` initialization function.
use std::process::ExitCode;

/// The main entry point of the `junksweep` application.
///
/// 1. Parses the command line and initializes the logger.
/// 2. Resolves roots (every data volume, or the given path) and user folders.
/// 3. Lists the matches, asks for confirmation and deletes.
///
/// Fatal errors (discovery, catalog) end the process with status 1. A declined
/// prompt or per-entry failures still exit normally.
fn main() -> ExitCode {
    let cli = cli::parse();
    logger::init(cli.debug);

    let config = Config::new(cli.path, cli.debug);
    log_debug!("Starting with {:?}", config);

    match run(&config) {
        Ok(SweepOutcome::Declined { matched }) => {
            log_debug!("Nothing deleted ({} matches kept).", matched);
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("{}: {}", "Sweep aborted".bright_yellow(), e.to_string().bright_red());
            ExitCode::FAILURE
        }
    }
}
