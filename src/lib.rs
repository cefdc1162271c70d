//! Card collections for a two-player high-card game, with optional `no_std`
//! support.
//!
//! The core types are [`Card`], the [`CardCollection`] sequence and the three
//! collections built on it: [`Deck`], [`Hand`] (held by a [`Player`]) and
//! [`DiscardPile`]. Cards move between collections by value, so a card is only
//! ever in one place. Shuffling takes the random number generator as an
//! argument, which makes every shuffle reproducible from a seed.
//!
//! [`Game`] runs a whole high-card match on top of these types.
//!
//! # Example
//!
//! ```
//! use highcard::{Deck, DiscardPile, Player};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng).unwrap();
//!
//! let mut player = Player::new("Ada", None).unwrap();
//! for _ in 0..5 {
//!     player.draw(&mut deck);
//! }
//!
//! let mut pile = DiscardPile::new();
//! let best = player.play_highest_card().unwrap();
//! pile.add_card(best);
//! assert_eq!(deck.len() + player.hand().len() + pile.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod collection;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use collection::CardCollection;
pub use deck::Deck;
pub use discard::DiscardPile;
pub use error::{
    CardError, CollectError, DealError, DeckError, ErrorKind, HandError, JoinError, PlayerError,
    RoundError,
};
pub use game::{Game, GameState, MAX_PLAYERS};
pub use hand::Hand;
pub use options::GameOptions;
pub use player::Player;
pub use result::{GameOutcome, GameResult, Play, RoundOutcome, RoundResult};
