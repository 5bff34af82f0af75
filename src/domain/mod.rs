pub mod models;
pub mod pairing;

pub use models::{MatchResult, Pairing};
pub use pairing::pair_adjacent;
