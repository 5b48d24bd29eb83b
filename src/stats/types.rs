//! Core data types for player statistics
//!
//! This module defines the records exchanged with the stats backend and the
//! values derived from them on the client:
//! - `PlayerStatLine`: Per-player season averages, as served by the backend
//! - `FantasyLeader`: One row of the top-fantasy leaderboard
//! - `ScoreEntry`: A chart-ready `{name, score}` pair derived from a leader

use serde::{Deserialize, Serialize};

/// Season aggregate statistics for one player
///
/// Field names match the backend's JSON. Records are never modified after
/// they arrive; a new fetch replaces the whole set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerStatLine {
    pub id: i64,
    pub player_name: String,
    /// Team abbreviation (e.g. "DEN")
    pub team: String,
    pub position: String,
    pub games_played: u32,
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    /// Fraction in [0, 1]
    pub field_goal_pct: f64,
    /// Fraction in [0, 1]
    pub three_point_pct: f64,
    /// Fraction in [0, 1]
    pub free_throw_pct: f64,
}

/// A leaderboard row from the top-fantasy endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FantasyLeader {
    pub player_name: String,
    pub fantasy_points: f64,
}

/// A single bar of the fantasy leaders chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreEntry {
    /// Last name shown on the category axis
    pub display_name: String,
    /// Fantasy points rounded to one decimal
    pub score: f64,
}

impl ScoreEntry {
    /// Create an entry from already-derived parts
    pub fn new(display_name: impl Into<String>, score: f64) -> Self {
        Self {
            display_name: display_name.into(),
            score,
        }
    }

    /// Project a leaderboard row into a chart entry
    pub fn from_leader(leader: &FantasyLeader) -> Self {
        Self {
            display_name: display_name_of(&leader.player_name).to_string(),
            score: round_one_decimal(leader.fantasy_points),
        }
    }
}

/// Last whitespace-separated token of a full name
///
/// A single-token name is returned whole; a blank name yields "".
pub fn display_name_of(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or("")
}

/// Round to one decimal place, halves away from zero
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
