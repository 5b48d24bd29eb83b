//! In-memory stats backend for view tests.

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::client::{FetchError, FetchResult, StatsApi};
use crate::stats::{FantasyLeader, PlayerStatLine};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPlayers,
    Search(String),
    TopFantasy(u32),
    Player(i64),
}

#[derive(Default)]
pub struct FakeStatsApi {
    players: Vec<PlayerStatLine>,
    leaders: Vec<FantasyLeader>,
    failure: Option<FetchError>,
    fail_next: Mutex<Option<FetchError>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Notify>,
}

impl FakeStatsApi {
    pub fn with_players(players: Vec<PlayerStatLine>) -> Self {
        Self {
            players,
            ..Default::default()
        }
    }

    pub fn with_leaders(leaders: Vec<FantasyLeader>) -> Self {
        Self {
            leaders,
            ..Default::default()
        }
    }

    /// Every request fails with `err`
    pub fn failing(err: FetchError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }

    /// Requests block until [`release`](Self::release) is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Only the next request fails
    pub fn fail_next(&self, err: FetchError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, call: Call) -> FetchResult<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(err) = self.fail_next.lock().unwrap().take() {
            return Err(err);
        }
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StatsApi for FakeStatsApi {
    async fn list_players(&self) -> FetchResult<Vec<PlayerStatLine>> {
        self.enter(Call::ListPlayers).await?;
        Ok(self.players.clone())
    }

    async fn search_players(&self, term: &str) -> FetchResult<Vec<PlayerStatLine>> {
        self.enter(Call::Search(term.to_string())).await?;
        let needle = term.to_lowercase();
        Ok(self
            .players
            .iter()
            .filter(|p| p.player_name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn top_fantasy(&self, limit: u32) -> FetchResult<Vec<FantasyLeader>> {
        self.enter(Call::TopFantasy(limit)).await?;
        Ok(self.leaders.iter().take(limit as usize).cloned().collect())
    }

    async fn player(&self, id: i64) -> FetchResult<PlayerStatLine> {
        self.enter(Call::Player(id)).await?;
        self.players
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("player {}", id)))
    }
}

pub fn sample_player(id: i64, name: &str) -> PlayerStatLine {
    PlayerStatLine {
        id,
        player_name: name.to_string(),
        team: "DEN".to_string(),
        position: "C".to_string(),
        games_played: 79,
        minutes: 34.6,
        points: 26.4,
        rebounds: 12.4,
        assists: 9.0,
        steals: 1.4,
        blocks: 0.9,
        field_goal_pct: 0.583,
        three_point_pct: 0.359,
        free_throw_pct: 0.817,
    }
}

pub fn leader(name: &str, points: f64) -> FantasyLeader {
    FantasyLeader {
        player_name: name.to_string(),
        fantasy_points: points,
    }
}
