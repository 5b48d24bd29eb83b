//! Display formatting for stat columns

/// Shooting fraction as a percentage with one decimal, e.g. `0.457` -> `"45.7%"`
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Per-game average with one decimal
pub fn format_avg(value: f64) -> String {
    format!("{:.1}", value)
}

/// Games played, no decimals
pub fn format_games(games: u32) -> String {
    games.to_string()
}
