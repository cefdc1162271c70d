use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use crate::error::{CollectError, DealError, DeckError, HandError, RoundError};
use crate::result::{GameOutcome, GameResult, Play, RoundOutcome, RoundResult};

use super::{Game, GameState, MAX_PLAYERS};

impl Game {
    /// Shuffles the deck and deals `hand_size` cards to each player, one card
    /// at a time in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, the options
    /// ask for empty hands or zero rounds, fewer than two players are seated,
    /// or the deck cannot fill every hand.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        if self.options.hand_size == 0 || self.options.rounds == 0 {
            return Err(DealError::InvalidOptions);
        }

        let mut deck = self.deck.lock();
        let mut players = self.players.lock();
        if players.len() < MAX_PLAYERS {
            return Err(DealError::NotEnoughPlayers);
        }

        let needed = self.options.hand_size * players.len();
        if deck.len() < needed {
            return Err(DealError::NotEnoughCards);
        }

        deck.shuffle(&mut *self.rng.lock())?;

        for _ in 0..self.options.hand_size {
            for player in players.iter_mut() {
                player.draw(&mut deck);
            }
        }

        log::debug!(
            "dealt {} cards to {} players, {} left in deck",
            self.options.hand_size,
            players.len(),
            deck.len()
        );

        self.rounds_played.store(0, Ordering::SeqCst);
        *state = GameState::Playing;
        Ok(())
    }

    /// Plays one round: every player plays their highest card and the single
    /// highest value scores a point.
    ///
    /// The game ends after the configured number of rounds or as soon as a
    /// hand runs out of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played, or if any hand is
    /// empty. Nothing is removed from any hand in either case.
    pub fn play_round(&self) -> Result<RoundResult, RoundError> {
        let mut state = self.state.lock();
        if *state != GameState::Playing {
            return Err(RoundError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.iter().any(|p| p.hand().is_empty()) {
            return Err(HandError::EmptyHand.into());
        }

        let mut plays = Vec::with_capacity(players.len());
        for (seat, player) in players.iter_mut().enumerate() {
            let card = player.play_highest_card()?;
            plays.push(Play { seat, card });
        }

        let values: Vec<u32> = plays.iter().map(|play| play.card.value()).collect();
        let outcome = RoundOutcome::from_values(&values);
        if let RoundOutcome::Winner(seat) = outcome {
            players[seat].add_point();
        }

        if self.options.discard_played {
            let mut discard = self.discard.lock();
            for play in &plays {
                discard.add_card(play.card.clone());
            }
        }

        let round = self.rounds_played.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("round {round}: {outcome:?}");

        if round >= self.options.rounds || players.iter().any(|p| p.hand().is_empty()) {
            log::debug!("game over after {round} rounds");
            *state = GameState::GameOver;
        }

        Ok(RoundResult {
            round,
            plays,
            outcome,
        })
    }

    /// Returns the final scores once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if *self.state.lock() != GameState::GameOver {
            return None;
        }

        let scores: Vec<u64> = self.players.lock().iter().map(|p| p.points()).collect();
        let outcome = GameOutcome::from_scores(&scores);
        Some(GameResult {
            rounds: self.rounds_played(),
            scores,
            outcome,
        })
    }

    /// Gathers every hand and the discard pile back into the deck and
    /// reshuffles it, readying the table for another deal.
    ///
    /// Scores are kept. Returns the size of the deck afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is being played, or if there are no cards at
    /// all to shuffle.
    pub fn collect_cards(&self) -> Result<usize, CollectError> {
        let mut state = self.state.lock();
        if *state == GameState::Playing {
            return Err(CollectError::InvalidState);
        }

        let mut deck = self.deck.lock();
        let mut players = self.players.lock();
        let mut discard = self.discard.lock();

        let held: usize = players.iter().map(|p| p.hand().len()).sum();
        if deck.is_empty() && held == 0 && discard.is_empty() {
            return Err(DeckError::EmptyDeck.into());
        }

        let mut returned: Vec<_> = players.iter_mut().flat_map(|p| p.clear_hand()).collect();
        returned.extend(discard.remove_all());
        drop(discard);

        deck.reshuffle(returned, &mut *self.rng.lock())?;

        self.rounds_played.store(0, Ordering::SeqCst);
        *state = GameState::WaitingForPlayers;
        Ok(deck.len())
    }
}
