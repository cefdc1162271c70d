//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Seats are open and cards are in the deck.
    WaitingForPlayers,
    /// Hands are dealt and rounds are being played.
    Playing,
    /// All rounds are done; results can be read.
    GameOver,
}
