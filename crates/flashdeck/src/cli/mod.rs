//! Command-line interface for flashdeck.
//!
//! This module provides the CLI structure for the `flashdeck` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{ConfigCommand, StatsCommand};

/// flashdeck - Study flashcards in your terminal
///
/// Keeps a named deck of question/answer cards in a JSON file, and offers a
/// menu to add, study, and search cards. Run without a command to start the
/// interactive session.
#[derive(Debug, Parser)]
#[command(name = "flashdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the deck file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub deck: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `study`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive study session
    Study,

    /// Show the saved deck's name and card count
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Check whether the interactive session should run.
    #[must_use]
    pub fn is_study(&self) -> bool {
        matches!(self.command, None | Some(Command::Study))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            deck: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "flashdeck");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_no_command_defaults_to_study() {
        let cli = Cli::try_parse_from(["flashdeck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_study());
    }

    #[test]
    fn test_parse_study() {
        let cli = Cli::try_parse_from(["flashdeck", "study"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Study)));
        assert!(cli.is_study());
    }

    #[test]
    fn test_parse_stats_json() {
        let cli = Cli::try_parse_from(["flashdeck", "stats", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Stats(StatsCommand { json: true }))
        ));
        assert!(!cli.is_study());
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["flashdeck", "config", "validate", "-f", "/tmp/c.toml"]).unwrap();
        match cli.command {
            Some(Command::Config(ConfigCommand::Validate { file })) => {
                assert_eq!(file.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_deck() {
        let cli = Cli::try_parse_from(["flashdeck", "--deck", "spanish.json"]).unwrap();
        assert_eq!(cli.deck, Some(PathBuf::from("spanish.json")));
    }

    #[test]
    fn test_parse_global_flags_after_command() {
        let cli =
            Cli::try_parse_from(["flashdeck", "stats", "-d", "x.json", "-c", "c.toml", "-vv"])
                .unwrap();
        assert_eq!(cli.deck, Some(PathBuf::from("x.json")));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["flashdeck", "-q"]).unwrap();
        assert!(cli.quiet);
    }
}
