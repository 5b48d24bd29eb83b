//! Player Statistics Model
//!
//! Records served by the stats backend and the values the dashboard derives
//! from them:
//!
//! - **types**: `PlayerStatLine`, `FantasyLeader`, `ScoreEntry`
//! - **placeholder**: Fixed fallback leaderboard
//! - **format**: Column formatting for tables

pub mod format;
pub mod placeholder;
pub mod types;

pub use format::{format_avg, format_games, format_pct};
pub use placeholder::placeholder_leaders;
pub use types::{display_name_of, round_one_decimal, FantasyLeader, PlayerStatLine, ScoreEntry};
