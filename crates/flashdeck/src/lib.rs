//! `flashdeck` - A terminal flashcard study tool
//!
//! This library provides the deck model, the JSON-file persistence for it, and
//! the interactive menu session used by the `flashdeck` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;

pub use config::Config;
pub use deck::{Card, Deck, DeckStats};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use session::{MenuChoice, Session};
pub use storage::DeckStore;
