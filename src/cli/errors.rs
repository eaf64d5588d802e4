//! CLI error types

use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that make the binary exit non-zero.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CliError {
    /// One or more scenarios observed an unexpected outcome kind.
    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },

    /// The scenario filter matched nothing in the catalogue.
    #[error("no scenario matches '{0}'")]
    NoScenarioMatched(String),
}
