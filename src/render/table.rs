//! Players table rendering
//!
//! Turns a [`TableState`] into the text of the players page: a loading line,
//! an error banner, a "no results" notice, or the stat table itself.

use crate::stats::{format_avg, format_games, format_pct, PlayerStatLine};
use crate::views::{TableDisplay, TableState};

pub const LOADING_TEXT: &str = "Loading players...";
pub const NO_RESULTS_TEXT: &str = "No players found";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const COLUMNS: [(&str, Align); 13] = [
    ("Player", Align::Left),
    ("Team", Align::Left),
    ("Pos", Align::Left),
    ("GP", Align::Right),
    ("MIN", Align::Right),
    ("PTS", Align::Right),
    ("REB", Align::Right),
    ("AST", Align::Right),
    ("STL", Align::Right),
    ("BLK", Align::Right),
    ("FG%", Align::Right),
    ("3P%", Align::Right),
    ("FT%", Align::Right),
];

/// Table cells for one player, in column order
pub fn player_cells(player: &PlayerStatLine) -> [String; 13] {
    [
        player.player_name.clone(),
        player.team.clone(),
        player.position.clone(),
        format_games(player.games_played),
        format_avg(player.minutes),
        format_avg(player.points),
        format_avg(player.rebounds),
        format_avg(player.assists),
        format_avg(player.steals),
        format_avg(player.blocks),
        format_pct(player.field_goal_pct),
        format_pct(player.three_point_pct),
        format_pct(player.free_throw_pct),
    ]
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .zip(COLUMNS.iter().zip(widths))
        .map(|(cell, ((_, align), width))| match align {
            Align::Left => format!("{:<width$}", cell, width = *width),
            Align::Right => format!("{:>width$}", cell, width = *width),
        })
        .collect();
    parts.join("  ").trim_end().to_string()
}

/// Render rows as an aligned text table with a header
pub fn render_stat_table(players: &[PlayerStatLine]) -> String {
    let rows: Vec<[String; 13]> = players.iter().map(player_cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|(h, _)| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = format_line(COLUMNS.iter().map(|(h, _)| *h), &widths);
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');

    for row in &rows {
        out.push_str(&format_line(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }

    out
}

/// Full players page body
pub fn render_players_page(state: &TableState) -> String {
    let mut out = String::new();
    out.push_str("Players\n");
    out.push_str("Search and view NBA player statistics\n\n");

    if !state.search_input.trim().is_empty() {
        out.push_str(&format!("Search: \"{}\"\n\n", state.search_input.trim()));
    }

    match state.display() {
        TableDisplay::Loading => {
            out.push_str(LOADING_TEXT);
            out.push('\n');
        }
        TableDisplay::Failed { message, stale } => {
            out.push_str(&format!("! {}\n", message));
            if !stale.is_empty() {
                out.push('\n');
                out.push_str(&render_stat_table(stale));
            }
        }
        TableDisplay::Empty => {
            out.push_str(NO_RESULTS_TEXT);
            out.push('\n');
        }
        TableDisplay::Rows(players) => {
            out.push_str(&render_stat_table(players));
            if let Some(fetched_at) = state.fetched_at {
                out.push_str(&format!(
                    "\n{} players, updated {}\n",
                    players.len(),
                    fetched_at.format("%H:%M:%S UTC")
                ));
            }
        }
    }

    out
}
