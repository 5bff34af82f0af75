use crate::database::Standing;
use crate::errors::{TournamentError, TournamentResult};

use super::models::Pairing;

/// Pairs adjacent players of an already ranked standings list:
/// (1st, 2nd), (3rd, 4th), and so on.
pub fn pair_adjacent(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    Ok(pairings)
}
