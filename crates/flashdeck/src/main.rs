//! `flashdeck` - CLI for the flashcard study tool
//!
//! Without a command this runs the interactive study session against the
//! configured deck file.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use flashdeck::cli::{Cli, Command, ConfigCommand, StatsCommand};
use flashdeck::{init_logging, Config, DeckStore, Session};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())
        .and_then(|config| config.with_deck_path(cli.deck.clone()))
        .context("failed to load configuration")?;

    if cli.is_study() {
        return Ok(handle_study(&config));
    }

    match cli.command {
        Some(Command::Stats(stats_cmd)) => handle_stats(&config, &stats_cmd)?,
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd)?,
        None | Some(Command::Study) => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_study(config: &Config) -> ExitCode {
    let store = DeckStore::new(config.deck_path());
    let session = Session::new(store, io::stdin().lock(), io::stdout().lock());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        // Already reported to the user by the session.
        Err(e) if e.is_save_error() => ExitCode::FAILURE,
        Err(e) if e.is_input_closed() => {
            eprintln!("\nInput closed; unsaved cards were discarded.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Session failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let store = DeckStore::new(config.deck_path());
    let stats = store.stats();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else if let Some(stats) = stats {
        println!("{stats}");
    } else {
        println!("No saved deck at {}", store.path().display());
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Deck path:          {}", config.deck_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
