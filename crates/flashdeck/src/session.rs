//! Interactive study session.
//!
//! The session loads the saved deck (or asks for a name to start a new one),
//! then loops over a fixed menu until the user chooses to save and exit.
//! It is generic over its input and output so the whole loop can be driven
//! from memory.

use std::io::{BufRead, Write};

use tracing::{debug, error, info};

use crate::deck::{Card, Deck};
use crate::error::{Error, Result};
use crate::storage::DeckStore;

/// A selectable entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new card to the deck.
    AddCard,
    /// Walk through every card in order.
    Study,
    /// Look up a card by question text.
    Search,
    /// Show the deck name and card count.
    Stats,
    /// Save the deck and end the session.
    SaveAndExit,
}

impl MenuChoice {
    /// All menu entries in display order.
    pub const ALL: [Self; 5] = [
        Self::AddCard,
        Self::Study,
        Self::Search,
        Self::Stats,
        Self::SaveAndExit,
    ];

    /// The key the user types to pick this entry.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::AddCard => "1",
            Self::Study => "2",
            Self::Search => "3",
            Self::Stats => "4",
            Self::SaveAndExit => "5",
        }
    }

    /// Menu label for this entry.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AddCard => "Add card",
            Self::Study => "Study cards",
            Self::Search => "Search card",
            Self::Stats => "Show stats",
            Self::SaveAndExit => "Save and exit",
        }
    }

    /// Parse a line of user input. Anything unrecognized yields `None`.
    ///
    /// Surrounding whitespace is ignored, so `" 1 "` selects
    /// [`MenuChoice::AddCard`]; any other text around the key does not match.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

/// A single run of the interactive menu loop.
#[derive(Debug)]
pub struct Session<R, W> {
    store: DeckStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input`, writing to `output`, and
    /// persisting through `store`.
    #[must_use]
    pub fn new(store: DeckStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the session until the user saves and exits.
    ///
    /// Returns the deck as it was saved.
    ///
    /// # Errors
    ///
    /// Returns the save error if the final save failed (after reporting it
    /// to the user), [`Error::InputClosed`] if input ended before the user
    /// chose to exit, or an I/O error if the console could not be used.
    pub fn run(mut self) -> Result<Deck> {
        writeln!(self.output, "=== Flashcard App ===")?;
        writeln!(self.output)?;

        let mut deck = self.startup()?;

        loop {
            self.show_menu()?;
            let selection = self.prompt("\nChoose option: ")?;

            match MenuChoice::from_input(&selection) {
                Some(MenuChoice::AddCard) => self.add_card(&mut deck)?,
                Some(MenuChoice::Study) => self.study(&deck)?,
                Some(MenuChoice::Search) => self.search(&deck)?,
                Some(MenuChoice::Stats) => self.show_stats(&deck)?,
                Some(MenuChoice::SaveAndExit) => return self.save_and_exit(deck),
                None => debug!("Ignoring menu selection {:?}", selection),
            }
        }
    }

    fn startup(&mut self) -> Result<Deck> {
        if let Some(deck) = self.store.load() {
            writeln!(self.output, "Deck loaded!")?;
            return Ok(deck);
        }

        writeln!(self.output, "No saved deck found, starting fresh")?;
        let name = self.prompt("Enter deck name: ")?;
        info!("Starting new deck '{}'", name);
        Ok(Deck::new(name))
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    fn add_card(&mut self, deck: &mut Deck) -> Result<()> {
        let question = self.prompt("Question: ")?;
        let answer = self.prompt("Answer: ")?;
        deck.add_card(Card::new(question, answer));
        debug!("Deck now holds {} cards", deck.count_cards());
        writeln!(self.output, "Card added!")?;
        Ok(())
    }

    fn study(&mut self, deck: &Deck) -> Result<()> {
        if deck.is_empty() {
            writeln!(self.output, "No cards yet!")?;
            return Ok(());
        }

        for card in deck.cards() {
            writeln!(self.output, "\nQ: {}", card.question)?;
            self.prompt("Press Enter to see answer...")?;
            writeln!(self.output, "A: {}", card.answer)?;
        }
        writeln!(self.output, "\nDone studying!")?;
        Ok(())
    }

    fn search(&mut self, deck: &Deck) -> Result<()> {
        let query = self.prompt("Search for: ")?;

        match deck.find_card(&query) {
            Some(card) => {
                writeln!(self.output, "\nFound!")?;
                writeln!(self.output, "Q: {}", card.question)?;
                writeln!(self.output, "A: {}", card.answer)?;
            }
            None => writeln!(self.output, "No card found")?,
        }
        Ok(())
    }

    fn show_stats(&mut self, deck: &Deck) -> Result<()> {
        writeln!(self.output, "\n{}", deck.stats())?;
        Ok(())
    }

    fn save_and_exit(mut self, deck: Deck) -> Result<Deck> {
        let saved = self.store.save(&deck);
        if let Err(e) = &saved {
            error!("Failed to save deck: {}", e);
        }

        // A save error outranks any failure to report it.
        let reported = self.report_save(&saved);
        saved?;
        reported?;
        Ok(deck)
    }

    fn report_save(&mut self, saved: &Result<()>) -> Result<()> {
        match saved {
            Ok(()) => writeln!(self.output, "Deck saved!")?,
            Err(e) => writeln!(self.output, "Error saving deck: {e}")?,
        }
        writeln!(self.output, "\nGoodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` without a newline and read the reply.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line with its terminator removed.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Err(Error::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
