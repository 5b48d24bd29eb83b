//! Players table view
//!
//! Loads every player on mount, re-fetches on search submission, and keeps
//! the previous rows visible when a request fails.

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::lifecycle::{Lifecycle, Teardown, ViewPhase};
use crate::client::{FetchError, StatsApi};
use crate::stats::PlayerStatLine;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load players. Make sure the backend is running.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Snapshot of the players view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    pub phase: ViewPhase,
    /// Rows from the last successful request
    pub players: Vec<PlayerStatLine>,
    /// User-facing message from the last failed request
    pub error: Option<String>,
    /// Current contents of the search box
    pub search_input: String,
    /// When `players` was last replaced
    pub fetched_at: Option<DateTime<Utc>>,
}

/// What the players page should show
#[derive(Debug, PartialEq)]
pub enum TableDisplay<'a> {
    Loading,
    Failed {
        message: &'a str,
        stale: &'a [PlayerStatLine],
    },
    /// Valid response with zero rows
    Empty,
    Rows(&'a [PlayerStatLine]),
}

impl TableState {
    pub fn is_loading(&self) -> bool {
        // The page shows the loading indicator until the first request settles
        matches!(self.phase, ViewPhase::Idle | ViewPhase::Loading)
    }

    pub fn display(&self) -> TableDisplay<'_> {
        if self.is_loading() {
            return TableDisplay::Loading;
        }
        if let Some(message) = self.error.as_deref() {
            return TableDisplay::Failed {
                message,
                stale: &self.players,
            };
        }
        if self.players.is_empty() {
            TableDisplay::Empty
        } else {
            TableDisplay::Rows(&self.players)
        }
    }
}

enum PlayerQuery<'a> {
    All,
    Name(&'a str),
}

/// Players table view driven by a [`StatsApi`]
pub struct PlayerTable<A> {
    api: A,
    state: watch::Sender<TableState>,
    lifecycle: Lifecycle,
}

impl<A: StatsApi> PlayerTable<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(TableState::default());
        Self {
            api,
            state,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Lifecycle hook: loads all players the first time it is called
    pub async fn mount(&mut self) {
        if self.lifecycle.begin_mount() {
            self.load_all().await;
        }
    }

    pub fn teardown_handle(&self) -> Teardown {
        self.lifecycle.teardown()
    }

    /// Current snapshot
    pub fn state(&self) -> TableState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change, including `Loading`
    pub fn subscribe(&self) -> watch::Receiver<TableState> {
        self.state.subscribe()
    }

    pub fn set_search_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        self.state.send_modify(|s| s.search_input = input);
    }

    /// Fetch every player, replacing the current rows on success
    pub async fn load_all(&mut self) {
        self.fetch(PlayerQuery::All).await;
    }

    /// Search by name; a blank term behaves exactly like [`load_all`](Self::load_all)
    pub async fn search(&mut self, term: &str) {
        self.set_search_input(term);

        let term = term.trim();
        if term.is_empty() {
            return self.load_all().await;
        }
        self.fetch(PlayerQuery::Name(term)).await;
    }

    /// Search with whatever is currently in the search box
    pub async fn submit_search(&mut self) {
        let term = self.state.borrow().search_input.clone();
        self.search(&term).await;
    }

    /// Empty the search box and reload all players
    pub async fn clear(&mut self) {
        self.set_search_input(String::new());
        self.load_all().await;
    }

    async fn fetch(&mut self, query: PlayerQuery<'_>) {
        if self.lifecycle.is_torn_down() {
            tracing::debug!("Players view torn down, ignoring trigger");
            return;
        }

        self.state.send_modify(|s| s.phase = ViewPhase::Loading);

        let (result, failure_message): (Result<Vec<PlayerStatLine>, FetchError>, _) = match query {
            PlayerQuery::All => (self.api.list_players().await, LOAD_FAILED_MESSAGE),
            PlayerQuery::Name(term) => {
                tracing::debug!(term = %term, "Searching players");
                (self.api.search_players(term).await, SEARCH_FAILED_MESSAGE)
            }
        };

        if self.lifecycle.is_torn_down() {
            tracing::debug!("Players view torn down, discarding response");
            return;
        }

        match result {
            Ok(players) => {
                tracing::debug!(count = players.len(), "Players loaded");
                self.state.send_modify(|s| {
                    s.players = players;
                    s.error = None;
                    s.fetched_at = Some(Utc::now());
                    s.phase = ViewPhase::Populated;
                });
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Players request failed");
                self.state.send_modify(|s| {
                    s.error = Some(failure_message.to_string());
                    s.phase = ViewPhase::Failed;
                });
            }
        }
    }
}
