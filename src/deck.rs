//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::collection::CardCollection;
use crate::error::DeckError;

/// A deck of cards. Index 0 is the top; cards are drawn from the top and
/// added to the bottom.
///
/// # Example
///
/// ```
/// use highcard::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// deck.shuffle(&mut rng).unwrap();
///
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.len(), 51);
/// deck.add_card(card);
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: CardCollection,
}

impl Deck {
    /// Creates a standard 52-card deck, unshuffled.
    ///
    /// Suits come in the order Hearts, Clubs, Diamonds, Spades; within each
    /// suit the ranks run Ace, 2 through 10, Jack, Queen, King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::standard(rank, suit));
            }
        }

        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck from the given cards. The first card is the top.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Shuffles the deck in place with a Fisher-Yates pass driven by `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck holds no cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let cards = self.cards.as_mut_slice();
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }

        log::trace!("shuffled deck of {} cards", cards.len());
        Ok(())
    }

    /// Draws the top card, or returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.remove_front();
        if let Some(card) = &card {
            log::trace!("drew {card}, {} left", self.cards.len());
        }
        card
    }

    /// Adds a card to the bottom of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds every present card to the bottom of the deck, then shuffles.
    ///
    /// Items may be plain cards or `Option<Card>`; `None` entries are skipped.
    /// Returns the number of cards added.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck is still empty after adding.
    pub fn reshuffle<I, R>(&mut self, cards: I, rng: &mut R) -> Result<usize, DeckError>
    where
        I: IntoIterator,
        I::Item: Into<Option<Card>>,
        R: Rng,
    {
        let before = self.cards.len();
        self.cards
            .extend(cards.into_iter().filter_map(Into::<Option<Card>>::into));
        let added = self.cards.len() - before;

        self.shuffle(rng)?;
        log::debug!("reshuffled {added} cards into deck of {}", self.cards.len());
        Ok(added)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
