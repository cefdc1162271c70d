//! Round and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Result of comparing played cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player at this seat played the single highest card.
    Winner(usize),
    /// The highest value was shared; nobody scores.
    Tie,
}

impl RoundOutcome {
    /// Compares card values by seat. A unique maximum wins, anything else ties.
    #[must_use]
    pub fn from_values(values: &[u32]) -> Self {
        sole_leader(values).map_or(Self::Tie, Self::Winner)
    }
}

/// A card played by one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Seat index of the player.
    pub seat: usize,
    /// The card that was played.
    pub card: Card,
}

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Cards played, in seat order.
    pub plays: Vec<Play>,
    /// Who took the round.
    pub outcome: RoundOutcome,
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player at this seat finished with the most points.
    Winner(usize),
    /// The top score was shared.
    Tie,
}

impl GameOutcome {
    /// Compares final scores by seat. A unique maximum wins, anything else ties.
    #[must_use]
    pub fn from_scores(scores: &[u64]) -> Self {
        sole_leader(scores).map_or(Self::Tie, Self::Winner)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Rounds that were played.
    pub rounds: u32,
    /// Points per seat.
    pub scores: Vec<u64>,
    /// Who won the game.
    pub outcome: GameOutcome,
}

fn sole_leader<T: Ord>(values: &[T]) -> Option<usize> {
    let best = values.iter().max()?;
    let mut leaders = values.iter().enumerate().filter(|&(_, v)| v == best);
    match (leaders.next(), leaders.next()) {
        (Some((seat, _)), None) => Some(seat),
        _ => None,
    }
}
