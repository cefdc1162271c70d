//! The discard pile.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::collection::CardCollection;

/// A holding area for cards taken out of play.
///
/// Cards are kept in the order they were discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: CardCollection,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: CardCollection::new(),
        }
    }

    /// Creates a discard pile holding the given cards.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in discard order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the most recently discarded card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Places a card on the pile.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first card equal to `card` and returns it.
    ///
    /// Returns `None` if the pile holds no such card.
    pub fn remove_card(&mut self, card: &Card) -> Option<Card> {
        self.cards.remove_matching(card)
    }

    /// Removes and returns every card, emptying the pile.
    pub fn remove_all(&mut self) -> Vec<Card> {
        self.cards.drain_all()
    }
}

impl fmt::Display for DiscardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cards.fmt_list(f, "Empty discard pile")
    }
}
