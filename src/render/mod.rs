//! Terminal Rendering
//!
//! Pure functions from view state to text. Nothing here performs I/O; the
//! binary decides where the strings go.
//!
//! - **nav**: Page routes and the navigation bar
//! - **table**: Players page and stat table
//! - **chart**: Fantasy leaders bar chart
//! - **pages**: Home, player detail, and placeholder pages
//! - **export**: JSON and CSV output

pub mod chart;
pub mod export;
pub mod nav;
pub mod pages;
pub mod table;

pub use chart::{
    render_bar_chart, render_leaders, CHART_TITLE, DEFAULT_BAR_WIDTH, SAMPLE_DATA_NOTE,
};
pub use export::{to_csv, to_json, ExportError};
pub use nav::{render_nav, Route};
pub use pages::{render_daily_leaders, render_home, render_player_detail, render_teams};
pub use table::{render_players_page, render_stat_table};
