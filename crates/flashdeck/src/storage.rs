//! Storage layer for flashdeck.
//!
//! A deck is persisted as a single pretty-printed JSON document that is
//! replaced wholesale on every save. Loading is forgiving: a missing,
//! unreadable or malformed file means "no saved deck" rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::deck::{Deck, DeckStats};
use crate::error::{Error, Result};

/// Extension appended to the deck path while a save is in flight.
const TEMP_EXTENSION: &str = "tmp";

/// File-backed store for a single deck.
#[derive(Debug, Clone)]
pub struct DeckStore {
    /// Path to the deck file.
    path: PathBuf,
}

impl DeckStore {
    /// Create a store that reads and writes the deck at `path`.
    ///
    /// Nothing is touched on disk until [`save`](Self::save) or
    /// [`load`](Self::load) is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the deck file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a deck file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `deck` to disk, replacing any previous file.
    ///
    /// The document is written to a sibling temporary file first and then
    /// renamed over the target, so a failed save leaves the previous deck
    /// intact. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be encoded, the parent directory
    /// cannot be created, or the file cannot be written or renamed.
    pub fn save(&self, deck: &Deck) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(deck)?;
        let tmp_path = self.temp_path();

        debug!("Writing deck to {}", tmp_path.display());
        fs::write(&tmp_path, json).map_err(|source| Error::DeckSave {
            path: self.path.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Error::DeckSave {
                path: self.path.clone(),
                source,
            });
        }

        info!(
            "Saved deck '{}' with {} cards to {}",
            deck.name(),
            deck.count_cards(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the deck back from disk.
    ///
    /// Returns `None` when there is no usable saved deck. The reason is
    /// logged and never propagated.
    #[must_use]
    pub fn load(&self) -> Option<Deck> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No deck file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Could not read deck file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Deck>(&contents) {
            Ok(deck) => {
                info!(
                    "Loaded deck '{}' with {} cards from {}",
                    deck.name(),
                    deck.count_cards(),
                    self.path.display()
                );
                Some(deck)
            }
            Err(e) => {
                warn!("Ignoring malformed deck file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Summarize the saved deck, if there is one.
    #[must_use]
    pub fn stats(&self) -> Option<DeckStats> {
        self.load().as_ref().map(Deck::stats)
    }

    /// Path of the temporary file used during a save.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_EXTENSION);
        self.path.with_file_name(name)
    }
}
