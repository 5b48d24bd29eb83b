//! Page layouts: home, single player, and the not-yet-built sections.

use super::chart::{render_leaders, DEFAULT_BAR_WIDTH};
use super::nav::Route;
use crate::stats::{format_avg, format_pct, PlayerStatLine};
use crate::views::{ChartState, DetailState};

pub const HOME_TITLE: &str = "Fantasy Basketball Dashboard";
pub const HOME_TAGLINE: &str =
    "Track NBA player stats, analyze team performance, and stay updated with daily leaders";
pub const COMING_SOON: &str = "Coming Soon";

pub fn render_home(chart: &ChartState) -> String {
    let mut out = format!("{}\n{}\n\n", HOME_TITLE, HOME_TAGLINE);
    out.push_str(&render_leaders(chart, DEFAULT_BAR_WIDTH));
    out.push('\n');

    let cards = [Route::Players, Route::Teams, Route::DailyLeaders];
    let title_width = cards.iter().map(|r| r.title().len()).max().unwrap_or(0);
    for route in cards {
        out.push_str(&format!(
            "  {:<title_width$}  {}  (courtside {})\n",
            route.title(),
            route.blurb(),
            route.command(),
            title_width = title_width
        ));
    }
    out
}

fn render_coming_soon(title: &str, subtitle: &str, detail: &str) -> String {
    format!("{}\n{}\n\n  {}\n  {}\n", title, subtitle, COMING_SOON, detail)
}

pub fn render_teams() -> String {
    render_coming_soon(
        "Teams",
        Route::Teams.blurb(),
        "Team statistics and rosters will be available here",
    )
}

pub fn render_daily_leaders() -> String {
    render_coming_soon(
        "Daily Leaders",
        Route::DailyLeaders.blurb(),
        "Daily top performers will be available here",
    )
}

fn render_player_card(player: &PlayerStatLine) -> String {
    let rows = [
        ("Team", player.team.clone()),
        ("Position", player.position.clone()),
        ("Games", player.games_played.to_string()),
        ("Minutes", format_avg(player.minutes)),
        ("Points", format_avg(player.points)),
        ("Rebounds", format_avg(player.rebounds)),
        ("Assists", format_avg(player.assists)),
        ("Steals", format_avg(player.steals)),
        ("Blocks", format_avg(player.blocks)),
        ("FG%", format_pct(player.field_goal_pct)),
        ("3P%", format_pct(player.three_point_pct)),
        ("FT%", format_pct(player.free_throw_pct)),
    ];

    let mut out = format!("{} (#{})\n\n", player.player_name, player.id);
    for (label, value) in rows {
        out.push_str(&format!("  {:<10}{:>8}\n", label, value));
    }
    out
}

pub fn render_player_detail(state: &DetailState) -> String {
    match state {
        DetailState::Idle => String::new(),
        DetailState::Loading(id) => format!("Loading player {}...\n", id),
        DetailState::Found(player) => render_player_card(player),
        DetailState::NotFound(id) => format!("Player not found: {}\n", id),
        DetailState::Failed(message) => format!("! {}\n", message),
    }
}
