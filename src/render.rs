use colored::Colorize;

use crate::database::{Match, Player, Standing};
use crate::domain::Pairing;

pub fn standings_table(standings: &[Standing]) -> String {
    let header = format!(
        "{:>4}  {:>4}  {:<24} {:>5} {:>7}",
        "Rank", "Id", "Name", "Wins", "Matches"
    );
    let mut out = format!("{}\n", header.bold());

    for (idx, row) in standings.iter().enumerate() {
        // Pad before colouring so escape codes don't count toward the width
        let name = format!("{:<24}", row.name);
        let name = if idx == 0 && row.wins > 0 {
            name.green().bold().to_string()
        } else {
            name
        };
        out.push_str(&format!(
            "{:>4}  {:>4}  {} {:>5} {:>7}\n",
            idx + 1,
            row.player_id,
            name,
            row.wins,
            row.matches
        ));
    }

    out
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    pairings
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            format!(
                "{} {} ({}) {} {} ({})\n",
                format!("Table {}:", idx + 1).cyan(),
                p.first_name,
                p.first_id,
                "vs".dimmed(),
                p.second_name,
                p.second_id
            )
        })
        .collect()
}

pub fn players_list(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{:>4}  {}\n", p.id, p.name))
        .collect()
}

pub fn matches_list(matches: &[Match]) -> String {
    matches
        .iter()
        .map(|m| match (m.loser, m.tie) {
            (_, Some(partner)) => {
                format!("{:>4}  {} {} {}\n", m.id, m.winner, "tied".yellow(), partner)
            }
            (Some(loser), None) => {
                format!("{:>4}  {} {} {}\n", m.id, m.winner, "beat".green(), loser)
            }
            (None, None) => format!("{:>4}  {} {}\n", m.id, m.winner, "(incomplete)".red()),
        })
        .collect()
}
