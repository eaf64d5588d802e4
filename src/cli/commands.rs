//! CLI command dispatch

use crate::scenario;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatches a parsed command line.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Run { scenario } => run_scenarios(scenario.as_deref()),
        Command::List => list_scenarios(),
    }
}

/// Runs the catalogue, optionally filtered, and fails the process when a
/// scenario observes an unexpected outcome kind.
fn run_scenarios(filter: Option<&str>) -> CliResult<()> {
    let summary = scenario::run(filter);

    if summary.total() == 0 {
        if let Some(needle) = filter {
            return Err(CliError::NoScenarioMatched(needle.to_string()));
        }
    }

    if summary.is_success() {
        Ok(())
    } else {
        Err(CliError::ScenariosFailed {
            failed: summary.failed(),
            total: summary.total(),
        })
    }
}

/// Prints the scenario names, one per line.
fn list_scenarios() -> CliResult<()> {
    for name in scenario::scenario_names() {
        println!("{}", name);
    }
    Ok(())
}
