//! Fantasy leaders chart view
//!
//! Fetches the leaderboard once on mount and projects each row to a
//! [`ScoreEntry`]. Starts from the placeholder leaderboard, which stays in
//! place if the request fails under [`FallbackPolicy::Placeholder`].

use tokio::sync::watch;

use super::lifecycle::{Lifecycle, Teardown, ViewPhase};
use crate::client::StatsApi;
use crate::config::{DashboardConfig, FallbackPolicy};
use crate::stats::{placeholder_leaders, ScoreEntry};

pub const LEADERS_FAILED_MESSAGE: &str = "Failed to load fantasy leaders.";

/// Snapshot of the chart view
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub phase: ViewPhase,
    /// Bars in display order
    pub dataset: Vec<ScoreEntry>,
    /// Still showing the placeholder leaderboard
    pub is_placeholder: bool,
    /// Only set under [`FallbackPolicy::Surface`]
    pub error: Option<String>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            phase: ViewPhase::Idle,
            dataset: placeholder_leaders(),
            is_placeholder: true,
            error: None,
        }
    }
}

/// Top fantasy scorers chart driven by a [`StatsApi`]
pub struct TopScorersChart<A> {
    api: A,
    config: DashboardConfig,
    state: watch::Sender<ChartState>,
    lifecycle: Lifecycle,
}

impl<A: StatsApi> TopScorersChart<A> {
    pub fn new(api: A, config: DashboardConfig) -> Self {
        let (state, _) = watch::channel(ChartState::default());
        Self {
            api,
            config,
            state,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Lifecycle hook: requests the leaderboard the first time it is called
    pub async fn mount(&mut self) {
        if self.lifecycle.begin_mount() {
            self.load().await;
        }
    }

    pub fn teardown_handle(&self) -> Teardown {
        self.lifecycle.teardown()
    }

    pub fn state(&self) -> ChartState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ChartState> {
        self.state.subscribe()
    }

    pub fn dataset(&self) -> Vec<ScoreEntry> {
        self.state.borrow().dataset.clone()
    }

    async fn load(&mut self) {
        if self.lifecycle.is_torn_down() {
            return;
        }

        self.state.send_modify(|s| s.phase = ViewPhase::Loading);
        let result = self.api.top_fantasy(self.config.top_limit).await;

        if self.lifecycle.is_torn_down() {
            tracing::debug!("Leaders chart torn down, discarding response");
            return;
        }

        match result {
            Ok(leaders) => {
                // Backend order is kept as-is
                let dataset: Vec<ScoreEntry> = leaders.iter().map(ScoreEntry::from_leader).collect();
                tracing::debug!(count = dataset.len(), "Fantasy leaders loaded");
                self.state.send_modify(|s| {
                    s.dataset = dataset;
                    s.is_placeholder = false;
                    s.error = None;
                    s.phase = ViewPhase::Populated;
                });
            }
            Err(e) => match self.config.fallback {
                FallbackPolicy::Placeholder => {
                    tracing::warn!(error = %e, "Failed to fetch top players, using placeholder data");
                    self.state.send_modify(|s| s.phase = ViewPhase::Failed);
                }
                FallbackPolicy::Surface => {
                    tracing::error!(error = %e, "Failed to fetch top players");
                    self.state.send_modify(|s| {
                        s.error = Some(LEADERS_FAILED_MESSAGE.to_string());
                        s.phase = ViewPhase::Failed;
                    });
                }
            },
        }
    }
}
