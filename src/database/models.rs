use serde::Serialize;

pub type PlayerId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// A stored match row. Exactly one of `loser` and `tie` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i32,
    pub winner: PlayerId,
    pub loser: Option<PlayerId>,
    pub tie: Option<PlayerId>,
}

impl Match {
    pub fn is_tie(&self) -> bool {
        self.tie.is_some()
    }
}

// Row of the player_standing view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}
