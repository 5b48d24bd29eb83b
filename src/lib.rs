//! # Courtside
//!
//! A terminal dashboard for NBA player statistics. All statistics (fantasy
//! scoring, aggregation, search) live in an external stats backend; this
//! crate fetches, shapes and renders them.
//!
//! ## Modules
//!
//! - [`client`]: Typed HTTP client for the stats backend
//! - [`stats`]: Player records, chart entries, formatting
//! - [`views`]: Player table, leaders chart and player detail state machines
//! - [`render`]: Text rendering of view state
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::{Config, PlayerTable, StatsClient, TopScorersChart};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = StatsClient::new(&config.api)?;
//!
//!     // Leaders chart falls back to sample data if the backend is down
//!     let mut chart = TopScorersChart::new(client.clone(), config.dashboard.clone());
//!     chart.mount().await;
//!     print!("{}", courtside::render::render_leaders(&chart.state(), 40));
//!
//!     // Player table with a name search
//!     let mut table = PlayerTable::new(client);
//!     table.search("jokic").await;
//!     print!("{}", courtside::render::render_players_page(&table.state()));
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod render;
pub mod stats;
pub mod views;

// Re-export top-level types for convenience
pub use client::{Endpoints, FetchError, FetchErrorKind, FetchResult, StatsApi, StatsClient};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, FallbackPolicy, LoggingConfig};

pub use stats::{FantasyLeader, PlayerStatLine, ScoreEntry};

pub use views::{
    ChartState, DetailState, PlayerDetail, PlayerTable, TableDisplay, TableState, Teardown,
    TopScorersChart, ViewPhase,
};
