//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::{HandError, PlayerError};
use crate::hand::Hand;

/// A player with a hand of cards and a score.
///
/// The hand is only changed through the player's own methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    age: Option<u32>,
    hand: Hand,
    points: u64,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if the name is empty after trimming.
    pub fn new(name: &str, age: Option<u32>) -> Result<Self, PlayerError> {
        Self::with_hand(name, age, Vec::<Card>::new())
    }

    /// Creates a player already holding `cards`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if the name is empty after trimming.
    pub fn with_hand<I: IntoIterator<Item = Card>>(
        name: &str,
        age: Option<u32>,
        cards: I,
    ) -> Result<Self, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }

        Ok(Self {
            name: name.into(),
            age,
            hand: Hand::from_cards(cards),
            points: 0,
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's age, if known.
    #[must_use]
    pub const fn age(&self) -> Option<u32> {
        self.age
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Draws the top card of `deck` into the hand.
    ///
    /// Returns `false` and leaves the hand unchanged if the deck is empty.
    pub fn draw(&mut self, deck: &mut Deck) -> bool {
        let Some(card) = deck.draw() else {
            return false;
        };
        self.hand.add_card(card);
        true
    }

    /// Puts a card straight into the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Moves the first card equal to `card` from the hand onto `pile`.
    ///
    /// Returns whether a matching card was found.
    pub fn discard_card(&mut self, card: &Card, pile: &mut DiscardPile) -> bool {
        let Some(card) = self.hand.remove_card(card) else {
            return false;
        };
        pile.add_card(card);
        true
    }

    /// Moves the first card equal to `card` from the hand to the bottom of `deck`.
    ///
    /// Returns whether a matching card was found.
    pub fn return_card(&mut self, card: &Card, deck: &mut Deck) -> bool {
        let Some(card) = self.hand.remove_card(card) else {
            return false;
        };
        deck.add_card(card);
        true
    }

    /// Removes and returns the highest-value card in the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand is empty.
    pub fn play_highest_card(&mut self) -> Result<Card, HandError> {
        self.hand.play_highest()
    }

    /// Removes and returns every card in the hand.
    pub fn clear_hand(&mut self) -> Vec<Card> {
        self.hand.clear()
    }

    /// Adds one point to the score.
    pub const fn add_point(&mut self) {
        self.points = self.points.saturating_add(1);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(age) = self.age {
            write!(f, ", {age}")?;
        }
        if self.hand.is_empty() {
            f.write_str(".")
        } else {
            f.write_str(", ")?;
            self.hand.collection().fmt_list(f, "")
        }
    }
}
