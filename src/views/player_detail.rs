//! Single player view.

use super::lifecycle::{Lifecycle, Teardown, ViewPhase};
use crate::client::{FetchError, StatsApi};
use crate::stats::PlayerStatLine;

pub const PLAYER_FAILED_MESSAGE: &str = "Failed to load player. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading(i64),
    Found(PlayerStatLine),
    /// The backend has no player with this id
    NotFound(i64),
    Failed(String),
}

impl DetailState {
    pub fn phase(&self) -> ViewPhase {
        match self {
            DetailState::Idle => ViewPhase::Idle,
            DetailState::Loading(_) => ViewPhase::Loading,
            DetailState::Found(_) | DetailState::NotFound(_) => ViewPhase::Populated,
            DetailState::Failed(_) => ViewPhase::Failed,
        }
    }
}

pub struct PlayerDetail<A> {
    api: A,
    state: DetailState,
    lifecycle: Lifecycle,
}

impl<A: StatsApi> PlayerDetail<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DetailState::Idle,
            lifecycle: Lifecycle::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn teardown_handle(&self) -> Teardown {
        self.lifecycle.teardown()
    }

    pub async fn load(&mut self, id: i64) {
        if self.lifecycle.is_torn_down() {
            return;
        }

        self.state = DetailState::Loading(id);
        let result = self.api.player(id).await;

        if self.lifecycle.is_torn_down() {
            tracing::debug!(id, "Player view torn down, discarding response");
            return;
        }

        self.state = match result {
            Ok(player) => DetailState::Found(player),
            Err(FetchError::NotFound(_)) => DetailState::NotFound(id),
            Err(e) => {
                tracing::error!(id, error = %e, "Player request failed");
                DetailState::Failed(PLAYER_FAILED_MESSAGE.to_string())
            }
        };
    }
}
