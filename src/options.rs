//! Game configuration options.

/// Configuration options for a high-card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_rounds(7)
///     .with_discard_played(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Rounds played before the game ends.
    pub rounds: u32,
    /// Whether played cards go to the discard pile.
    ///
    /// When disabled, played cards leave the table with the [`RoundResult`](crate::RoundResult).
    pub discard_played: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            rounds: 5,
            discard_played: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of rounds.
    ///
    /// Play also stops early once a hand runs out of cards.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(10);
    /// assert_eq!(options.rounds, 10);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets whether played cards go to the discard pile.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_discard_played(false);
    /// assert!(!options.discard_played);
    /// ```
    #[must_use]
    pub const fn with_discard_played(mut self, discard: bool) -> Self {
        self.discard_played = discard;
        self
    }
}
