//! CLI argument definitions using clap
//!
//! Commands:
//! - nimbusdb run [--scenario <needle>]
//! - nimbusdb list

use clap::{Parser, Subcommand};

/// nimbusdb - A deterministic, in-process simulator of a partitioned,
/// session-consistent document store
#[derive(Parser, Debug)]
#[command(name = "nimbusdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scenario catalogue
    Run {
        /// Only run scenarios whose name contains this substring
        #[arg(long)]
        scenario: Option<String>,
    },

    /// List the scenarios in the catalogue
    List,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_filter() {
        let cli = Cli::try_parse_from(["nimbusdb", "run", "--scenario", "token"]).unwrap();
        match cli.command {
            Command::Run { scenario } => assert_eq!(scenario.as_deref(), Some("token")),
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_list() {
        let cli = Cli::try_parse_from(["nimbusdb", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["nimbusdb"]).is_err());
    }
}
