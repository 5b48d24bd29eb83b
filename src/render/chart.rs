//! Horizontal bar chart for the fantasy leaders.

use crate::stats::ScoreEntry;
use crate::views::ChartState;

pub const CHART_TITLE: &str = "Top 10 Fantasy Leaders";

/// Default bar length for the top score, in characters
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// One line per entry: right-aligned name, bar scaled to the largest score, value
pub fn render_bar_chart(entries: &[ScoreEntry], bar_width: usize) -> String {
    if entries.is_empty() {
        return "No leaders to show\n".to_string();
    }

    let label_width = entries
        .iter()
        .map(|e| e.display_name.chars().count())
        .max()
        .unwrap_or(0);
    let max_score = entries.iter().map(|e| e.score).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for entry in entries {
        let len = if max_score > 0.0 {
            ((entry.score.max(0.0) / max_score) * bar_width as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
        out.push_str(&format!(
            "{:>label_width$} │{} {:.1}\n",
            entry.display_name,
            bar,
            entry.score,
            label_width = label_width
        ));
    }
    out
}

pub const SAMPLE_DATA_NOTE: &str = "(sample data)";

/// Chart section with title; a surfaced error replaces the bars
pub fn render_leaders(state: &ChartState, bar_width: usize) -> String {
    let mut out = format!("{}\n\n", CHART_TITLE);
    match &state.error {
        Some(message) => out.push_str(&format!("! {}\n", message)),
        None => {
            out.push_str(&render_bar_chart(&state.dataset, bar_width));
            if state.is_placeholder {
                out.push_str(SAMPLE_DATA_NOTE);
                out.push('\n');
            }
        }
    }
    out
}
