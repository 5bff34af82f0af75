use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament bookkeeping")]
pub struct Cli {
    /// SQLite database file (or :memory:); defaults to $TOURNAMENT_DATABASE or tournament.db
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate the tournament schema
    Setup,
    /// Register a new player
    Register {
        /// Player name (need not be unique)
        name: String,
    },
    /// List registered players
    Players,
    /// Print the number of registered players
    Count,
    /// Record a decisive result
    Report {
        /// Id of the player who won
        winner: i32,
        /// Id of the player who lost
        loser: i32,
    },
    /// Record a tied match; both players are credited a win
    Tie {
        first: i32,
        second: i32,
    },
    /// List recorded matches
    Matches,
    /// Show current standings
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove all match records
    ClearMatches,
    /// Remove all players and their matches
    ClearPlayers,
    /// Generate a shell completion script
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_with_global_database() {
        let cli = Cli::parse_from(["swiss-tournament", "report", "1", "2", "--database", "t.db"]);

        assert_eq!(cli.database.as_deref(), Some("t.db"));
        assert_eq!(cli.command, Command::Report { winner: 1, loser: 2 });
    }

    #[test]
    fn test_parse_kebab_case_commands() {
        let cli = Cli::parse_from(["swiss-tournament", "clear-players"]);
        assert_eq!(cli.command, Command::ClearPlayers);

        let cli = Cli::parse_from(["swiss-tournament", "standings", "--json"]);
        assert_eq!(cli.command, Command::Standings { json: true });
    }
}
