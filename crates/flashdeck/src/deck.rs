//! Core deck types for flashdeck.
//!
//! This module defines the fundamental data structures for representing
//! flashcards and the named, ordered deck that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single question/answer pair.
///
/// Cards carry no identity of their own; a card is located either by its
/// position in the deck or by searching its question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The prompt shown first during study.
    pub question: String,

    /// The text revealed after the user acknowledges the question.
    pub answer: String,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Check whether the question contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    fn question_contains(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
    }
}

/// A named, ordered collection of cards.
///
/// Insertion order is the study order and the search order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// The deck's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cards in study order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get the card at `index` in study order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Append a card to the end of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Find the first card whose question contains `query`, ignoring case.
    ///
    /// Cards are inspected in study order and the scan stops at the first
    /// match. An empty query matches the first card of a non-empty deck.
    #[must_use]
    pub fn find_card(&self, query: &str) -> Option<&Card> {
        let needle = query.to_lowercase();
        self.cards.iter().find(|card| card.question_contains(&needle))
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn count_cards(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Summary of the deck for display.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        DeckStats {
            name: self.name.clone(),
            cards: self.count_cards(),
        }
    }
}

/// Statistics about a deck.
///
/// Displays as the two-line summary shown by the session and the `stats`
/// command; serializes as `{"name": ..., "cards": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    /// Name of the deck.
    pub name: String,
    /// Number of cards in the deck.
    pub cards: usize,
}

impl fmt::Display for DeckStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deck: {}", self.name)?;
        write!(f, "Total cards: {}", self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france_deck() -> Deck {
        let mut deck = Deck::new("Geography");
        deck.add_card(Card::new("What is the capital of France?", "Paris"));
        deck
    }

    #[test]
    fn test_new_deck_is_empty() {
        let deck = Deck::new("Empty");
        assert_eq!(deck.name(), "Empty");
        assert!(deck.is_empty());
        assert_eq!(deck.count_cards(), 0);
    }

    #[test]
    fn test_count_follows_additions_in_order() {
        let mut deck = Deck::new("Numbers");
        let added: Vec<Card> = (0..25)
            .map(|i| Card::new(format!("q{i}"), format!("a{i}")))
            .collect();

        for (n, card) in added.iter().enumerate() {
            assert_eq!(deck.count_cards(), n);
            deck.add_card(card.clone());
        }

        assert_eq!(deck.count_cards(), added.len());
        for (i, card) in added.iter().enumerate() {
            assert_eq!(deck.get(i), Some(card));
        }
        assert_eq!(deck.cards(), added.as_slice());
    }

    #[test]
    fn test_find_card_is_case_insensitive_substring() {
        let deck = france_deck();

        for query in ["capital", "CAPITAL", "Capital Of"] {
            let found = deck.find_card(query);
            assert_eq!(
                found.map(|c| c.answer.as_str()),
                Some("Paris"),
                "query {query:?} should match"
            );
        }
    }

    #[test]
    fn test_find_card_no_match() {
        let deck = france_deck();
        assert!(deck.find_card("Germany").is_none());
    }

    #[test]
    fn test_find_card_empty_deck() {
        let deck = Deck::new("Empty");
        assert!(deck.find_card("anything").is_none());
        assert!(deck.find_card("").is_none());
    }

    #[test]
    fn test_find_card_empty_query_returns_first() {
        let mut deck = Deck::new("Spanish");
        deck.add_card(Card::new("Hola means?", "Hello"));
        deck.add_card(Card::new("Adios means?", "Goodbye"));

        assert_eq!(deck.find_card(""), deck.get(0));
    }

    #[test]
    fn test_find_card_returns_first_match_in_order() {
        let mut deck = Deck::new("Spanish");
        deck.add_card(Card::new("Hola means?", "Hello"));
        deck.add_card(Card::new("Adios means?", "Goodbye"));

        let found = deck.find_card("means").unwrap();
        assert_eq!(found.answer, "Hello");
    }

    #[test]
    fn test_find_card_matches_question_only() {
        let deck = france_deck();
        assert!(deck.find_card("Paris").is_none());
    }

    #[test]
    fn test_empty_fields_are_allowed() {
        let mut deck = Deck::new("");
        deck.add_card(Card::new("", ""));
        assert_eq!(deck.count_cards(), 1);
        assert_eq!(deck.get(0), Some(&Card::new("", "")));
    }

    #[test]
    fn test_unicode_search() {
        let mut deck = Deck::new("Polish");
        deck.add_card(Card::new("ŻÓŁW to po angielsku?", "turtle"));
        assert!(deck.find_card("żółw").is_some());
    }

    #[test]
    fn test_stats_display() {
        let mut deck = Deck::new("Spanish");
        deck.add_card(Card::new("Hola means?", "Hello"));
        deck.add_card(Card::new("Adios means?", "Goodbye"));

        let stats = deck.stats();
        assert_eq!(stats.cards, 2);
        assert_eq!(stats.to_string(), "Deck: Spanish\nTotal cards: 2");
    }

    #[test]
    fn test_stats_json() {
        let stats = Deck::new("Empty").stats();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"name":"Empty","cards":0}"#);
    }

    #[test]
    fn test_deck_serialization_shape() {
        let mut deck = Deck::new("Spanish");
        deck.add_card(Card::new("Hola means?", "Hello"));

        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Spanish","cards":[{"question":"Hola means?","answer":"Hello"}]}"#
        );
    }
}
