//! End-to-end tests against an in-process stats backend.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

use courtside::render::render_players_page;
use courtside::{
    ApiConfig, DashboardConfig, DetailState, FallbackPolicy, FetchError, FetchErrorKind,
    PlayerDetail, PlayerTable, StatsApi, StatsClient, TableDisplay, TopScorersChart, ViewPhase,
};

fn player_json(id: i64, name: &str, team: &str) -> Value {
    json!({
        "id": id,
        "player_name": name,
        "team": team,
        "position": "G",
        "games_played": 70,
        "minutes": 34.2,
        "points": 27.1,
        "rebounds": 5.4,
        "assists": 6.3,
        "steals": 1.1,
        "blocks": 0.4,
        "field_goal_pct": 0.482,
        "three_point_pct": 0.401,
        "free_throw_pct": 0.915
    })
}

fn roster() -> Vec<Value> {
    vec![
        player_json(30, "Stephen Curry", "GSW"),
        player_json(23, "LeBron James", "LAL"),
        player_json(77, "Luka Dončić", "DAL"),
    ]
}

async fn list_players() -> Json<Vec<Value>> {
    Json(roster())
}

async fn search_players(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Value>> {
    let term = params.get("name").cloned().unwrap_or_default().to_lowercase();
    let matches = roster()
        .into_iter()
        .filter(|p| {
            p["player_name"]
                .as_str()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&term)
        })
        .collect();
    Json(matches)
}

async fn top_fantasy(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Value>> {
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(10);
    let leaders = vec![
        json!({"player_name": "Nikola Jokić", "fantasy_points": 61.27}),
        json!({"player_name": "Giannis Antetokounmpo", "fantasy_points": 55.04}),
        json!({"player_name": "Luka Dončić", "fantasy_points": 54.96}),
    ];
    Json(leaders.into_iter().take(limit).collect())
}

async fn player_by_id(Path(id): Path<i64>) -> impl IntoResponse {
    match roster().into_iter().find(|p| p["id"] == id) {
        Some(player) => Json(player).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn healthy_backend() -> String {
    let app = Router::new()
        .route("/api/players", get(list_players))
        .route("/api/players/search", get(search_players))
        .route("/api/players/top-fantasy", get(top_fantasy))
        .route("/api/players/:id", get(player_by_id));
    serve(app).await
}

/// Every route answers 500
async fn broken_backend() -> String {
    let app = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable")
    });
    serve(app).await
}

/// Every route answers 200 with a body that is not the expected JSON
async fn garbled_backend() -> String {
    let app = Router::new().fallback(|| async { "<html>maintenance</html>" });
    serve(app).await
}

/// Every route answers only after `delay`
async fn slow_backend(delay: Duration) -> String {
    let app = Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        Json(roster())
    });
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> StatsClient {
    client_with_timeout(base_url, 5)
}

fn client_with_timeout(base_url: &str, request_timeout_secs: u64) -> StatsClient {
    StatsClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_and_search() {
    let client = client_for(&healthy_backend().await);

    let all = client.list_players().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].player_name, "Stephen Curry");
    assert_eq!(all[0].field_goal_pct, 0.482);

    let found = client.search_players("  curry ").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 30);

    // Non-ASCII terms survive percent-encoding
    let found = client.search_players("dončić").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].team, "DAL");

    let none = client.search_players("Jordan").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_top_fantasy_passes_limit() {
    let client = client_for(&healthy_backend().await);

    let leaders = client.top_fantasy(2).await.unwrap();
    assert_eq!(leaders.len(), 2);
    assert_eq!(leaders[0].player_name, "Nikola Jokić");
}

#[tokio::test]
async fn test_player_by_id() {
    let client = client_for(&healthy_backend().await);

    assert_eq!(client.player(23).await.unwrap().player_name, "LeBron James");

    let err = client.player(99).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)));
    assert_eq!(err.kind(), FetchErrorKind::HttpError);
}

#[tokio::test]
async fn test_error_kinds() {
    let broken = client_for(&broken_backend().await);
    let err = broken.list_players().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500, .. }));
    assert_eq!(err.kind(), FetchErrorKind::HttpError);

    let garbled = client_for(&garbled_backend().await);
    let err = garbled.list_players().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::ParseFailure);
}

#[tokio::test]
async fn test_request_timeout() {
    let base_url = slow_backend(Duration::from_secs(3)).await;

    let err = client_with_timeout(&base_url, 1)
        .list_players()
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Timeout);
    assert_eq!(err.kind(), FetchErrorKind::NetworkFailure);

    let mut table = PlayerTable::new(client_with_timeout(&base_url, 1));
    table.mount().await;

    let state = table.state();
    assert_eq!(state.phase, ViewPhase::Failed);
    assert!(!state.is_loading());
    assert_eq!(
        state.error.as_deref(),
        Some(courtside::views::LOAD_FAILED_MESSAGE)
    );
    assert!(state.players.is_empty());
}

#[tokio::test]
async fn test_table_against_backend() {
    let mut table = PlayerTable::new(client_for(&healthy_backend().await));

    table.mount().await;
    let state = table.state();
    assert_eq!(state.phase, ViewPhase::Populated);
    assert_eq!(state.players.len(), 3);
    assert!(state.fetched_at.is_some());

    table.search("lebron").await;
    let state = table.state();
    assert_eq!(state.search_input, "lebron");
    assert!(matches!(state.display(), TableDisplay::Rows(rows) if rows[0].id == 23));

    table.search("nobody").await;
    assert_eq!(table.state().display(), TableDisplay::Empty);
    assert!(render_players_page(&table.state()).contains("No players found"));

    table.clear().await;
    let state = table.state();
    assert_eq!(state.search_input, "");
    assert_eq!(state.players.len(), 3);
}

#[tokio::test]
async fn test_table_backend_down() {
    let mut table = PlayerTable::new(client_for(&broken_backend().await));

    table.mount().await;

    let state = table.state();
    assert_eq!(state.phase, ViewPhase::Failed);
    assert_eq!(
        state.error.as_deref(),
        Some(courtside::views::LOAD_FAILED_MESSAGE)
    );
    assert!(state.players.is_empty());
}

#[tokio::test]
async fn test_chart_against_backend() {
    let client = client_for(&healthy_backend().await);
    let mut chart = TopScorersChart::new(client, DashboardConfig::default());

    chart.mount().await;

    let state = chart.state();
    assert!(!state.is_placeholder);
    assert_eq!(state.dataset.len(), 3);
    assert_eq!(state.dataset[0].display_name, "Jokić");
    assert_eq!(state.dataset[0].score, 61.3);
    assert_eq!(state.dataset[1].display_name, "Antetokounmpo");
    assert_eq!(state.dataset[1].score, 55.0);
}

#[tokio::test]
async fn test_chart_fallback_policies() {
    let base_url = broken_backend().await;

    let mut chart = TopScorersChart::new(client_for(&base_url), DashboardConfig::default());
    chart.mount().await;
    let state = chart.state();
    assert!(state.is_placeholder);
    assert_eq!(state.dataset.len(), 10);
    assert!(state.error.is_none());

    let surface = DashboardConfig {
        fallback: FallbackPolicy::Surface,
        ..DashboardConfig::default()
    };
    let mut chart = TopScorersChart::new(client_for(&base_url), surface);
    chart.mount().await;
    assert_eq!(
        chart.state().error.as_deref(),
        Some(courtside::views::LEADERS_FAILED_MESSAGE)
    );
}

#[tokio::test]
async fn test_detail_against_backend() {
    let mut detail = PlayerDetail::new(client_for(&healthy_backend().await));

    detail.load(77).await;
    assert!(matches!(detail.state(), DetailState::Found(p) if p.player_name == "Luka Dončić"));

    detail.load(1).await;
    assert_eq!(detail.state(), &DetailState::NotFound(1));
}
