use rusqlite::Transaction;

use super::connection::DbConn;
use crate::errors::{StorageContext, TournamentResult};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Drops and recreates every table and view. All existing data is lost.
pub fn reset_database(conn: &mut DbConn) -> TournamentResult<()> {
    let statements = split_sql_statements(SCHEMA_SQL);
    let tx = conn
        .transaction()
        .storage_context("Failed to begin schema transaction")?;

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(&tx, statement)
            .storage_context(&format!("Failed to execute schema statement {}", idx + 1))?;
    }

    tx.commit()
        .storage_context("Failed to commit schema transaction")?;

    log::info!("Database schema reset successfully");
    Ok(())
}

/// Creates the schema unless the players table already exists.
/// Returns true when the schema had to be created.
pub fn ensure_database(conn: &mut DbConn) -> TournamentResult<bool> {
    if schema_exists(conn)? {
        log::debug!("Database schema already present");
        return Ok(false);
    }

    reset_database(conn)?;
    Ok(true)
}

fn schema_exists(conn: &mut DbConn) -> TournamentResult<bool> {
    let sql = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'players'";

    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .storage_context("Failed to inspect database schema")?;
    Ok(count > 0)
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(tx: &Transaction, sql: &str) -> rusqlite::Result<()> {
    tx.execute(sql, []).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{create_memory_pool, get_connection};

    fn object_names(conn: &DbConn, kind: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = ?1 ORDER BY name")
            .unwrap();
        stmt.query_map([kind], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap()
    }

    #[test]
    fn test_split_sql_statements_skips_blank_fragments() {
        let statements = split_sql_statements("SELECT 1;\n\n  ;SELECT 2;  ");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_reset_creates_tables_and_views() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        reset_database(&mut conn).unwrap();

        let tables = object_names(&conn, "table");
        assert!(tables.contains(&"players".to_string()));
        assert!(tables.contains(&"matches".to_string()));
        assert_eq!(
            object_names(&conn, "view"),
            vec!["player_count", "player_standing"]
        );
    }

    #[test]
    fn test_ensure_only_creates_once() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        assert!(ensure_database(&mut conn).unwrap());
        conn.execute("INSERT INTO players (player_name) VALUES ('Kept')", [])
            .unwrap();

        assert!(!ensure_database(&mut conn).unwrap());
        let count: i64 = conn
            .query_row("SELECT total FROM player_count", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
