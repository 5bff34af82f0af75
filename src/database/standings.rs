use super::connection::DbConn;
use super::models::Standing;
use crate::errors::{StorageContext, TournamentResult};

/// Reads the player_standing view: most wins first, player id breaking ties.
pub fn list_standings(conn: &mut DbConn) -> TournamentResult<Vec<Standing>> {
    let sql = "
        SELECT id, name, win_count, match_count
        FROM player_standing
        ORDER BY win_count DESC, id ASC
    ";

    let mut stmt = conn.prepare(sql).storage_context("Failed to prepare standings query")?;
    let rows = stmt
        .query_map([], parse_standing_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to read player standings")?;

    Ok(rows)
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        player_id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
