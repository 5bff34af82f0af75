pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod render;
pub mod services;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::domain::MatchResult;
use crate::services::TournamentStore;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        // Completions never touch the database
        Command::Completions { shell } => {
            print_completions(shell);
            Ok(())
        }
        command => {
            let config = AppConfig::new().with_database_path(cli.database);
            let store = TournamentStore::open(&config.database)
                .with_context(|| format!("Failed to open database {}", config.database.path))?;

            execute(&store, &command)
        }
    }
}

fn execute(store: &TournamentStore, command: &Command) -> Result<()> {
    match command {
        Command::Setup => {
            store.reset_schema()?;
            println!("Schema recreated");
        }
        Command::Register { name } => {
            let player = store.register_player(name)?;
            println!("{}", player.id);
        }
        Command::Players => print!("{}", render::players_list(&store.players()?)),
        Command::Count => println!("{}", store.count_players()?),
        Command::Report { winner, loser } => {
            handle_report(store, MatchResult::decisive(*winner, *loser))?
        }
        Command::Tie { first, second } => handle_report(store, MatchResult::tie(*first, *second))?,
        Command::Matches => print!("{}", render::matches_list(&store.matches()?)),
        Command::Standings { json } => {
            let standings = store.player_standings()?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", render::standings_table(&standings));
            }
        }
        Command::Pairings { json } => {
            let pairings = store
                .swiss_pairings()
                .context("Failed to compute next-round pairings")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                print!("{}", render::pairings_table(&pairings));
            }
        }
        Command::ClearMatches => store.delete_matches()?,
        Command::ClearPlayers => store.delete_players()?,
        Command::Completions { .. } => unreachable!("completions are handled without a store"),
    }

    Ok(())
}

fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}

fn handle_report(store: &TournamentStore, result: MatchResult) -> Result<()> {
    let (first, second) = result.participants();
    let recorded = store
        .report_match(result)
        .with_context(|| format!("Failed to record match between {first} and {second}"))?;

    println!("Recorded match {}", recorded.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_do_not_open_the_database() {
        let missing = std::env::temp_dir()
            .join("swiss_tournament_completions_no_dir")
            .join("t.db");
        let cli = Cli::parse_from([
            "swiss-tournament",
            "--database",
            missing.to_str().unwrap(),
            "completions",
            "bash",
        ]);

        handle(cli).unwrap();
        assert!(!missing.exists());
    }

    #[test]
    fn test_commands_run_against_memory_database() {
        let cli = Cli::parse_from(["swiss-tournament", "--database", ":memory:", "count"]);
        handle(cli).unwrap();
    }
}
