pub mod commands;
pub mod prompt;

use clap::Parser;
use commands::Cli;

/// Parses the process arguments into a [`Cli`].
pub fn parse() -> Cli {
    Cli::parse()
}
