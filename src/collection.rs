//! Ordered card sequence shared by decks, hands and discard piles.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use crate::card::Card;
use crate::error::HandError;

/// A growable, order-preserving sequence of cards.
///
/// Index 0 is the front (the top of a deck). Removal by card looks for
/// structural equality and always takes the first match, so identical cards
/// held twice are removed one at a time from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether a structurally equal card is present.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the first card.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the last card.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Appends a card at the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the first card, or `None` if the collection is empty.
    pub fn remove_front(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes the first card equal to `card` and returns it.
    ///
    /// Returns `None` and leaves the collection untouched if nothing matches.
    pub fn remove_matching(&mut self, card: &Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(index))
    }

    /// Removes and returns every card, leaving the collection empty.
    pub fn drain_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the card with the greatest value, ties going to the earliest one.
    #[must_use]
    pub fn max_by_value(&self) -> Option<&Card> {
        self.max_index().map(|index| &self.cards[index])
    }

    /// Removes and returns the card with the greatest value.
    ///
    /// Ties go to the card closest to the front.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyHand`] if the collection is empty.
    pub fn extract_max(&mut self) -> Result<Card, HandError> {
        let index = self.max_index().ok_or(HandError::EmptyHand)?;
        Ok(self.cards.remove(index))
    }

    fn max_index(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, card) in self.cards.iter().enumerate() {
            match best {
                Some((_, value)) if card.value() <= value => {}
                _ => best = Some((index, card.value())),
            }
        }
        best.map(|(index, _)| index)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Writes the cards as `"A, B, C."`, or `empty` when there are none.
    pub(crate) fn fmt_list(&self, f: &mut fmt::Formatter<'_>, empty: &str) -> fmt::Result {
        let Some((last, rest)) = self.cards.split_last() else {
            return f.write_str(empty);
        };
        for card in rest {
            write!(f, "{card}, ")?;
        }
        write!(f, "{last}.")
    }
}

impl From<Vec<Card>> for CardCollection {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
