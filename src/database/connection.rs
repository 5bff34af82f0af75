use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::TournamentResult;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub const MEMORY_DATABASE: &str = ":memory:";

pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// `connection_timeout` bounds how long pool creation and checkout keep
/// retrying an unreachable database before giving up.
pub fn create_pool(
    database_path: &str,
    pool_size: u32,
    connection_timeout: Duration,
) -> TournamentResult<DbPool> {
    if database_path == MEMORY_DATABASE {
        return create_memory_pool();
    }

    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(manager, pool_size, connection_timeout)
}

/// Every in-memory connection is its own database, so the pool holds exactly
/// one connection and never recycles it.
pub fn create_memory_pool() -> TournamentResult<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());

    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(DEFAULT_CHECKOUT_TIMEOUT)
        .build(manager)?;
    Ok(pool)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    // Cascading deletes depend on foreign key enforcement, which SQLite
    // leaves off per connection by default.
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(
    manager: SqliteConnectionManager,
    pool_size: u32,
    connection_timeout: Duration,
) -> TournamentResult<DbPool> {
    let pool = r2d2::Pool::builder()
        .max_size(pool_size.max(1))
        .connection_timeout(connection_timeout)
        .build(manager)?;
    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> TournamentResult<DbConn> {
    let conn = pool.get()?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_enforces_foreign_keys() {
        let pool = create_memory_pool().unwrap();
        let conn = get_connection(&pool).unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_memory_path_selects_memory_pool() {
        let pool = create_pool(MEMORY_DATABASE, 8, DEFAULT_CHECKOUT_TIMEOUT).unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn test_unopenable_file_is_connection_error() {
        let path = std::env::temp_dir()
            .join("swiss_tournament_no_such_dir")
            .join("t.db");

        let err = create_pool(path.to_str().unwrap(), 1, Duration::from_millis(200))
            .unwrap_err();
        assert!(matches!(err, crate::errors::TournamentError::Connection(_)));
    }
}
