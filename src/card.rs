//! Card types and standard deck vocabulary.

use alloc::string::String;
use core::fmt;

use crate::error::CardError;

/// Card suit of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in standard deck generation order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
        }
    }
}

/// Card rank of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, the highest rank.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in standard deck generation order (Ace first).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the comparison value (Ace = 14, Jack = 11, Queen = 12, King = 13).
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Ace => 14,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
        }
    }
}

/// A playing card.
///
/// Cards are immutable once built. Two cards compare equal when their name,
/// suit and value all match, so separate instances with identical fields are
/// interchangeable in every collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    name: String,
    suit: String,
    value: u32,
}

impl Card {
    /// Creates a new card, trimming surrounding whitespace from `name` and `suit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or suit is empty after trimming, or if the
    /// value is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::Card;
    ///
    /// let card = Card::new(" Queen ", "Hearts", 12).unwrap();
    /// assert_eq!(card.name(), "Queen");
    /// assert_eq!(card.to_string(), "Queen of Hearts");
    /// ```
    pub fn new(name: &str, suit: &str, value: u32) -> Result<Self, CardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardError::EmptyName);
        }

        let suit = suit.trim();
        if suit.is_empty() {
            return Err(CardError::EmptySuit);
        }

        if value < 1 {
            return Err(CardError::ZeroValue);
        }

        Ok(Self {
            name: name.into(),
            suit: suit.into(),
            value,
        })
    }

    /// Creates a card of the standard deck.
    #[must_use]
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Self {
            name: rank.name().into(),
            suit: suit.name().into(),
            value: rank.value(),
        }
    }

    /// Returns the card name (e.g. "Ace", "10").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card suit.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }

    /// Returns the card value. Always at least 1.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.name, self.suit)
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;
