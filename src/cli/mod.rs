//! CLI module
//!
//! Provides the command-line interface:
//! - run: execute the scenario catalogue, optionally filtered by name
//! - list: print the catalogue

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parses the command line and dispatches.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
