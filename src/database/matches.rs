use rusqlite::params;

use super::connection::DbConn;
use super::models::{Match, PlayerId};
use crate::errors::{StorageContext, TournamentResult};

pub fn insert_decisive(
    conn: &mut DbConn,
    winner: PlayerId,
    loser: PlayerId,
) -> TournamentResult<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, tie";

    conn.query_row(sql, params![winner, loser], parse_match_row)
        .storage_context("Failed to insert decisive match")
}

pub fn insert_tie(
    conn: &mut DbConn,
    first: PlayerId,
    second: PlayerId,
) -> TournamentResult<Match> {
    let sql = "INSERT INTO matches (winner, tie) VALUES (?1, ?2) RETURNING id, winner, loser, tie";

    conn.query_row(sql, params![first, second], parse_match_row)
        .storage_context("Failed to insert tied match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        tie: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> TournamentResult<Vec<Match>> {
    let sql = "SELECT id, winner, loser, tie FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql).storage_context("Failed to prepare match listing")?;
    let rows = stmt
        .query_map([], parse_match_row)
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
        .storage_context("Failed to list matches")?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> TournamentResult<usize> {
    conn.execute("DELETE FROM matches", [])
        .storage_context("Failed to delete matches")
}
