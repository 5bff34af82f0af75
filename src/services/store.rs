use log::{debug, info};

use crate::config::DatabaseSettings;
use crate::database::{
    self, matches, players, setup, standings, DbConn, DbPool, Match, Player, Standing,
};
use crate::domain::{pair_adjacent, MatchResult, Pairing};
use crate::errors::TournamentResult;

/// Handle to a tournament database. Every operation checks out its own
/// connection and returns it before the call completes.
pub struct TournamentStore {
    pool: DbPool,
}

impl TournamentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the configured database, creating the schema if it is missing.
    pub fn open(settings: &DatabaseSettings) -> TournamentResult<Self> {
        let pool = database::create_pool(
            &settings.path,
            settings.pool_size,
            settings.connection_timeout,
        )?;
        let store = Self::new(pool);

        if store.ensure_schema()? {
            info!("Created tournament schema in {}", settings.path);
        }
        Ok(store)
    }

    pub fn in_memory() -> TournamentResult<Self> {
        let store = Self::new(database::create_memory_pool()?);
        store.ensure_schema()?;
        Ok(store)
    }

    fn connection(&self) -> TournamentResult<DbConn> {
        database::get_connection(&self.pool)
    }

    pub fn ensure_schema(&self) -> TournamentResult<bool> {
        let mut conn = self.connection()?;
        setup::ensure_database(&mut conn)
    }

    /// Drops every table and view and recreates them empty.
    pub fn reset_schema(&self) -> TournamentResult<()> {
        let mut conn = self.connection()?;
        setup::reset_database(&mut conn)
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<Player> {
        let mut conn = self.connection()?;
        let player = players::insert_player(&mut conn, name)?;

        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn delete_matches(&self) -> TournamentResult<()> {
        let mut conn = self.connection()?;
        let removed = matches::delete_all(&mut conn)?;

        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Also removes every match, through the cascading foreign keys.
    pub fn delete_players(&self) -> TournamentResult<()> {
        let mut conn = self.connection()?;
        let removed = players::delete_all(&mut conn)?;

        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let mut conn = self.connection()?;
        players::count_all(&mut conn)
    }

    pub fn players(&self) -> TournamentResult<Vec<Player>> {
        let mut conn = self.connection()?;
        players::list_all(&mut conn)
    }

    pub fn matches(&self) -> TournamentResult<Vec<Match>> {
        let mut conn = self.connection()?;
        matches::list_all(&mut conn)
    }

    /// Ranked by wins, then by player id. Players without matches are included.
    pub fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        let mut conn = self.connection()?;
        standings::list_standings(&mut conn)
    }

    /// Player references are checked by the database, not here: an unknown
    /// id comes back as a storage error.
    pub fn report_match(&self, result: MatchResult) -> TournamentResult<Match> {
        let mut conn = self.connection()?;

        let recorded = match result {
            MatchResult::Decisive { winner, loser } => {
                matches::insert_decisive(&mut conn, winner, loser)?
            }
            MatchResult::Tie { first, second } => matches::insert_tie(&mut conn, first, second)?,
        };

        debug!("Recorded match {:?}", recorded);
        Ok(recorded)
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.player_standings()?;
        let pairings = pair_adjacent(&standings)?;

        info!(
            "Paired {} players into {} matches",
            standings.len(),
            pairings.len()
        );
        Ok(pairings)
    }
}
