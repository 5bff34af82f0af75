use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;
use crate::errors::{StorageContext, TournamentResult};

pub fn insert_player(conn: &mut DbConn, name: &str) -> TournamentResult<Player> {
    let sql = "INSERT INTO players (player_name) VALUES (?1) RETURNING id, player_name";

    conn.query_row(sql, params![name], parse_player_row)
        .storage_context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> TournamentResult<Vec<Player>> {
    let sql = "SELECT id, player_name FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql).storage_context("Failed to prepare player listing")?;
    let rows = stmt
        .query_map([], parse_player_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to list players")?;

    Ok(rows)
}

pub fn count_all(conn: &mut DbConn) -> TournamentResult<i64> {
    conn.query_row("SELECT total FROM player_count", [], |row| row.get(0))
        .storage_context("Failed to count players")
}

/// Removes every player. Matches referencing them go with them.
pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    conn.execute("DELETE FROM players", [])
        .storage_context("Failed to delete players")
}
