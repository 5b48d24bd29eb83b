//! Fallback leaderboard shown when the top-fantasy request fails.

use super::types::ScoreEntry;

const PLACEHOLDER_LEADERS: [(&str, f64); 10] = [
    ("Jokić", 58.4),
    ("Dončić", 56.2),
    ("Giannis", 54.8),
    ("Embiid", 52.3),
    ("Tatum", 49.7),
    ("Durant", 48.1),
    ("Curry", 46.5),
    ("Davis", 45.2),
    ("Lillard", 43.8),
    ("James", 42.6),
];

/// The fixed ten-entry placeholder dataset, in display order
pub fn placeholder_leaders() -> Vec<ScoreEntry> {
    PLACEHOLDER_LEADERS
        .iter()
        .map(|(name, score)| ScoreEntry::new(*name, *score))
        .collect()
}
