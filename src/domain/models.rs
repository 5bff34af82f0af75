use serde::Serialize;

use crate::database::{PlayerId, Standing};

/// Outcome of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// `winner` beat `loser`
    Decisive { winner: PlayerId, loser: PlayerId },
    /// Both players are credited with a win
    Tie { first: PlayerId, second: PlayerId },
}

impl MatchResult {
    pub fn decisive(winner: PlayerId, loser: PlayerId) -> Self {
        MatchResult::Decisive { winner, loser }
    }

    pub fn tie(first: PlayerId, second: PlayerId) -> Self {
        MatchResult::Tie { first, second }
    }

    pub fn participants(&self) -> (PlayerId, PlayerId) {
        match *self {
            MatchResult::Decisive { winner, loser } => (winner, loser),
            MatchResult::Tie { first, second } => (first, second),
        }
    }
}

/// Two players meeting in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub first_id: PlayerId,
    pub first_name: String,
    pub second_id: PlayerId,
    pub second_name: String,
}

impl Pairing {
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            first_id: first.player_id,
            first_name: first.name.clone(),
            second_id: second.player_id,
            second_name: second.name.clone(),
        }
    }
}
