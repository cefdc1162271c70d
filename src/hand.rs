//! Player hand representation.

use alloc::vec::Vec;

use crate::card::Card;
use crate::collection::CardCollection;
use crate::error::HandError;

/// The cards currently held by a player. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: CardCollection,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: CardCollection::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card` and returns it.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        self.cards.remove_matching(card)
    }

    /// Returns the highest-value card without removing it.
    #[must_use]
    pub fn highest(&self) -> Option<&Card> {
        self.cards.max_by_value()
    }

    /// Removes and returns the highest-value card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the hand is empty.
    pub fn play_highest(&mut self) -> Result<Card, HandError> {
        self.cards.extract_max()
    }

    /// Removes and returns every card in the hand.
    pub fn clear(&mut self) -> Vec<Card> {
        self.cards.drain_all()
    }

    /// Returns whether the hand holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) const fn collection(&self) -> &CardCollection {
        &self.cards
    }
}
