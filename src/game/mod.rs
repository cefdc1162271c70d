//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::JoinError;
use crate::options::GameOptions;
use crate::player::Player;

mod round;
pub mod state;

pub use state::GameState;

/// Number of seats at the table.
pub const MAX_PLAYERS: usize = 2;

/// A two-player high-card game that owns the deck, the players and the
/// discard pile.
///
/// Each collection sits behind its own lock. Operations that move cards
/// between collections hold every lock they touch for the whole move, taken in
/// the order state, deck, players, discard pile, random number generator.
///
/// # Example
///
/// ```
/// use highcard::{Game, GameOptions, GameState};
///
/// let game = Game::new(GameOptions::default(), 42);
/// game.join("Ada", None).unwrap();
/// game.join("Grace", Some(36)).unwrap();
/// game.deal().unwrap();
///
/// while game.state() == GameState::Playing {
///     game.play_round().unwrap();
/// }
/// assert!(game.result().is_some());
/// ```
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The draw pile.
    deck: Mutex<Deck>,
    /// Seated players, by seat index.
    players: Mutex<Vec<Player>>,
    /// Cards played out of hands.
    discard: Mutex<DiscardPile>,
    /// Current game state.
    state: Mutex<GameState>,
    /// Rounds played since the last deal.
    rounds_played: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with a fresh, unshuffled standard deck.
    ///
    /// The deck is shuffled by [`Game::deal`] using a generator seeded with `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(), seed)
    }

    /// Creates a new game that plays with the given deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Self {
        Self {
            options,
            deck: Mutex::new(deck),
            players: Mutex::new(Vec::with_capacity(MAX_PLAYERS)),
            discard: Mutex::new(DiscardPile::new()),
            state: Mutex::new(GameState::WaitingForPlayers),
            rounds_played: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats a new player and returns the seat index.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is under way, both seats are taken, or the
    /// name is empty.
    pub fn join(&self, name: &str, age: Option<u32>) -> Result<usize, JoinError> {
        let state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.len() >= MAX_PLAYERS {
            return Err(JoinError::TableFull);
        }

        let player = Player::new(name, age)?;
        log::debug!("{} takes seat {}", player.name(), players.len());
        players.push(player);
        drop(state);
        Ok(players.len() - 1)
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of rounds played since the last deal.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns a snapshot of the seated players.
    pub fn players(&self) -> Vec<Player> {
        self.players.lock().clone()
    }

    /// Returns a snapshot of the player at `seat`.
    pub fn player(&self, seat: usize) -> Option<Player> {
        self.players.lock().get(seat).cloned()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a snapshot of the deck.
    pub fn deck(&self) -> Deck {
        self.deck.lock().clone()
    }

    /// Returns a snapshot of the discard pile.
    pub fn discard_pile(&self) -> DiscardPile {
        self.discard.lock().clone()
    }

    /// Returns the number of cards held across the deck, every hand and the
    /// discard pile.
    pub fn cards_in_play(&self) -> usize {
        let deck = self.deck.lock();
        let players = self.players.lock();
        let discard = self.discard.lock();
        let hands: usize = players.iter().map(|p| p.hand().len()).sum();
        deck.len() + hands + discard.len()
    }
}
