//! Error types for card and game operations.

use thiserror::Error;

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied malformed input.
    InvalidArgument,
    /// The input was well formed but the target's current state forbids the action.
    InvalidState,
}

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card name is empty.
    #[error("card name cannot be empty")]
    EmptyName,
    /// Card suit is empty.
    #[error("card suit cannot be empty")]
    EmptySuit,
    /// Card value is zero.
    #[error("card value must be positive")]
    ZeroValue,
}

impl CardError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Errors that can occur when creating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player name is empty.
    #[error("player name cannot be empty")]
    EmptyName,
}

impl PlayerError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards to shuffle.
    #[error("cannot shuffle an empty deck")]
    EmptyDeck,
}

impl DeckError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::InvalidState
    }
}

/// Errors that can occur when taking cards out of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("hand is empty")]
    EmptyHand,
}

impl HandError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        ErrorKind::InvalidState
    }
}

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("invalid game state for joining")]
    InvalidState,
    /// Both seats are taken.
    #[error("table is full")]
    TableFull,
    /// The player could not be created.
    #[error(transparent)]
    InvalidPlayer(#[from] PlayerError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than two players have joined.
    #[error("not enough players")]
    NotEnoughPlayers,
    /// Not enough cards in the deck to fill every hand.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// The options deal empty hands or play no rounds.
    #[error("hand size and rounds must both be at least 1")]
    InvalidOptions,
    /// The deck could not be shuffled.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl DealError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidOptions => ErrorKind::InvalidArgument,
            Self::Deck(err) => err.kind(),
            Self::InvalidState | Self::NotEnoughPlayers | Self::NotEnoughCards => {
                ErrorKind::InvalidState
            }
        }
    }
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
    /// A player has no card left to play.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur when gathering cards back into the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectError {
    /// Cards cannot be collected while a game is being played.
    #[error("invalid game state for collecting cards")]
    InvalidState,
    /// The deck could not be reshuffled.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
