use thiserror::Error;

/// Errors raised by tournament store operations
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The database could not be reached or no connection could be checked out
    #[error("Database connection failed: {0}")]
    Connection(#[from] r2d2::Error),

    /// A statement failed after a connection was established
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Pairing requires an even number of registered players
    #[error("Cannot pair an odd number of players ({0}); byes are not supported")]
    OddPlayerCount(usize),
}

impl TournamentError {
    /// True when the underlying failure is a constraint violation
    /// (unknown player reference, self-match, malformed match row).
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            TournamentError::Storage { source, .. } => matches!(
                source.sqlite_error_code(),
                Some(rusqlite::ErrorCode::ConstraintViolation)
            ),
            _ => false,
        }
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Attach a message to storage failures, the way `anyhow::Context` does
pub trait StorageContext<T> {
    fn storage_context(self, context: &str) -> TournamentResult<T>;
}

impl<T> StorageContext<T> for Result<T, rusqlite::Error> {
    fn storage_context(self, context: &str) -> TournamentResult<T> {
        self.map_err(|source| TournamentError::Storage {
            context: context.to_string(),
            source,
        })
    }
}
