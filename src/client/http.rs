//! Stats Backend REST Client
//!
//! HTTP client for the players, search and top-fantasy endpoints.
//! Requests are unauthenticated JSON GETs and are never retried.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use super::endpoints::Endpoints;
use super::error::{FetchError, FetchResult};
use crate::config::ApiConfig;
use crate::stats::{FantasyLeader, PlayerStatLine};

/// Read access to the stats backend
///
/// Views are generic over this trait so they can run against the real
/// backend or an in-memory fake.
#[async_trait]
pub trait StatsApi: Send + Sync {
    /// Every player's season line
    async fn list_players(&self) -> FetchResult<Vec<PlayerStatLine>>;

    /// Players whose name matches `term` (matching is done by the backend)
    async fn search_players(&self, term: &str) -> FetchResult<Vec<PlayerStatLine>>;

    /// Fantasy leaderboard, in backend order
    async fn top_fantasy(&self, limit: u32) -> FetchResult<Vec<FantasyLeader>>;

    /// A single player by id
    async fn player(&self, id: i64) -> FetchResult<PlayerStatLine>;
}

#[async_trait]
impl<T: StatsApi + ?Sized> StatsApi for Arc<T> {
    async fn list_players(&self) -> FetchResult<Vec<PlayerStatLine>> {
        (**self).list_players().await
    }

    async fn search_players(&self, term: &str) -> FetchResult<Vec<PlayerStatLine>> {
        (**self).search_players(term).await
    }

    async fn top_fantasy(&self, limit: u32) -> FetchResult<Vec<FantasyLeader>> {
        (**self).top_fantasy(limit).await
    }

    async fn player(&self, id: i64) -> FetchResult<PlayerStatLine> {
        (**self).player(id).await
    }
}

/// reqwest-backed implementation of [`StatsApi`]
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    endpoints: Endpoints,
}

impl StatsClient {
    /// Create a client for the configured base URL
    pub fn new(config: &ApiConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FetchError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(&config.base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("stats_request", request_id = %request_id, url = %url);

        async {
            let response = self.client.get(url).send().await.map_err(|e| {
                tracing::debug!(error = %e, "Request did not complete");
                FetchError::from(e)
            })?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(FetchError::NotFound(url.to_string()));
            }
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                tracing::debug!(status = status.as_u16(), "Backend returned error status");
                return Err(FetchError::Http {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.bytes().await?;
            let value: T = serde_json::from_slice(&body)?;
            tracing::debug!(bytes = body.len(), "Response decoded");
            Ok::<T, FetchError>(value)
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl StatsApi for StatsClient {
    async fn list_players(&self) -> FetchResult<Vec<PlayerStatLine>> {
        self.get_json(&self.endpoints.players()).await
    }

    async fn search_players(&self, term: &str) -> FetchResult<Vec<PlayerStatLine>> {
        self.get_json(&self.endpoints.search(term)).await
    }

    async fn top_fantasy(&self, limit: u32) -> FetchResult<Vec<FantasyLeader>> {
        self.get_json(&self.endpoints.top_fantasy(limit)).await
    }

    async fn player(&self, id: i64) -> FetchResult<PlayerStatLine> {
        self.get_json(&self.endpoints.player(id)).await
    }
}
