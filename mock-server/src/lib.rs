//! In-memory stand-in for a Palworld dedicated server's REST API.
//!
//! Serves the `/v1/api/*` endpoints behind HTTP Basic Auth. Write endpoints
//! mutate a shared `World` so tests can observe their effect through the read
//! endpoints or through the `MockState` accessors.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

/// Full settings document served by `GET /v1/api/settings`.
pub const SETTINGS_JSON: &str = include_str!("../../test-vectors/settings.json");

pub const USERNAME: &str = "admin";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Info {
    pub version: String,
    pub servername: String,
    pub description: String,
    pub worldguid: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "accountName")]
    pub account_name: String,
    #[serde(rename = "playerId")]
    pub player_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub ip: String,
    pub ping: f64,
    pub location_x: f64,
    pub location_y: f64,
    pub level: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metrics {
    pub serverfps: u32,
    pub serverframetime: f64,
    pub currentplayernum: u32,
    pub maxplayernum: u32,
    pub uptime: u64,
    pub days: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Announce {
    pub message: String,
}

/// Body of kick and ban.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    pub userid: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Unban {
    pub userid: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Shutdown {
    pub waittime: u32,
    pub message: Option<String>,
}

/// Mutable server state behind the mock.
#[derive(Debug)]
pub struct World {
    pub info: Info,
    pub players: Vec<Player>,
    pub banned: Vec<String>,
    pub announcements: Vec<String>,
    pub saves: u32,
    pub shutdown_after: Option<u32>,
    pub stopped: bool,
}

impl Default for World {
    fn default() -> Self {
        Self {
            info: Info {
                version: "v0.3.11.61046".to_string(),
                servername: "Chillet Test Server".to_string(),
                description: "Integration test world".to_string(),
                worldguid: "A1B2C3D4E5F60718293A4B5C6D7E8F90".to_string(),
            },
            players: vec![
                Player {
                    name: "Zoe".to_string(),
                    account_name: "zoe_acc".to_string(),
                    player_id: "8A3F2C11".to_string(),
                    user_id: "steam_76561198000000001".to_string(),
                    ip: "10.0.0.5".to_string(),
                    ping: 31.5,
                    location_x: -1200.25,
                    location_y: 830.0,
                    level: 12,
                },
                Player {
                    name: "Grizzbolt Fan".to_string(),
                    account_name: "grizz".to_string(),
                    player_id: "0C77D9E4".to_string(),
                    user_id: "steam_76561198000000002".to_string(),
                    ip: "10.0.0.9".to_string(),
                    ping: 88.0,
                    location_x: 415.5,
                    location_y: -77.75,
                    level: 35,
                },
            ],
            banned: Vec::new(),
            announcements: Vec::new(),
            saves: 0,
            shutdown_after: None,
            stopped: false,
        }
    }
}

/// Shared handle to the mock's world plus the expected credentials.
#[derive(Clone)]
pub struct MockState {
    world: Arc<RwLock<World>>,
    authorization: Arc<str>,
}

impl MockState {
    /// Accepts `admin:<password>` only.
    pub fn new(password: &str) -> Self {
        let token = STANDARD.encode(format!("{USERNAME}:{password}"));
        Self {
            world: Arc::new(RwLock::new(World::default())),
            authorization: format!("Basic {token}").into(),
        }
    }

    pub async fn announcements(&self) -> Vec<String> {
        self.world.read().await.announcements.clone()
    }

    pub async fn banned(&self) -> Vec<String> {
        self.world.read().await.banned.clone()
    }

    pub async fn saves(&self) -> u32 {
        self.world.read().await.saves
    }

    pub async fn shutdown_after(&self) -> Option<u32> {
        self.world.read().await.shutdown_after
    }

    pub async fn is_stopped(&self) -> bool {
        self.world.read().await.stopped
    }
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/v1/api/info", get(info))
        .route("/v1/api/players", get(players))
        .route("/v1/api/settings", get(settings))
        .route("/v1/api/metrics", get(metrics))
        .route("/v1/api/announce", post(announce))
        .route("/v1/api/kick", post(kick))
        .route("/v1/api/ban", post(ban))
        .route("/v1/api/unban", post(unban))
        .route("/v1/api/save", post(save))
        .route("/v1/api/shutdown", post(shutdown))
        .route("/v1/api/stop", post(stop))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn require_basic_auth(State(state): State<MockState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented != Some(&*state.authorization) {
        return (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic realm=\"Pal\"")],
            "unauthorized",
        )
            .into_response();
    }
    next.run(request).await
}

fn rejected(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

async fn info(State(state): State<MockState>) -> Json<Info> {
    Json(state.world.read().await.info.clone())
}

async fn players(State(state): State<MockState>) -> Json<serde_json::Value> {
    let world = state.world.read().await;
    Json(json!({ "players": world.players }))
}

async fn settings() -> Response {
    ([(header::CONTENT_TYPE, "application/json")], SETTINGS_JSON).into_response()
}

async fn metrics(State(state): State<MockState>) -> Json<Metrics> {
    let world = state.world.read().await;
    Json(Metrics {
        serverfps: 60,
        serverframetime: 16.6,
        currentplayernum: world.players.len() as u32,
        maxplayernum: 32,
        uptime: 120,
        days: 1,
    })
}

async fn announce(State(state): State<MockState>, Json(input): Json<Announce>) -> StatusCode {
    state.world.write().await.announcements.push(input.message);
    StatusCode::OK
}

async fn kick(State(state): State<MockState>, Json(input): Json<Target>) -> Response {
    let mut world = state.world.write().await;
    let before = world.players.len();
    world.players.retain(|p| p.user_id != input.userid);
    if world.players.len() == before {
        return rejected("player not found");
    }
    if let Some(message) = input.message {
        world.announcements.push(message);
    }
    StatusCode::OK.into_response()
}

async fn ban(State(state): State<MockState>, Json(input): Json<Target>) -> StatusCode {
    let mut world = state.world.write().await;
    world.players.retain(|p| p.user_id != input.userid);
    if !world.banned.contains(&input.userid) {
        world.banned.push(input.userid);
    }
    if let Some(message) = input.message {
        world.announcements.push(message);
    }
    StatusCode::OK
}

async fn unban(State(state): State<MockState>, Json(input): Json<Unban>) -> Response {
    let mut world = state.world.write().await;
    let before = world.banned.len();
    world.banned.retain(|id| *id != input.userid);
    if world.banned.len() == before {
        return rejected("user is not banned");
    }
    StatusCode::OK.into_response()
}

async fn save(State(state): State<MockState>) -> StatusCode {
    state.world.write().await.saves += 1;
    StatusCode::OK
}

async fn shutdown(State(state): State<MockState>, Json(input): Json<Shutdown>) -> StatusCode {
    let mut world = state.world.write().await;
    world.shutdown_after = Some(input.waittime);
    if let Some(message) = input.message {
        world.announcements.push(message);
    }
    StatusCode::OK
}

async fn stop(State(state): State<MockState>) -> StatusCode {
    state.world.write().await.stopped = true;
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_serializes_with_wire_names() {
        let player = World::default().players[0].clone();
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["accountName"], "zoe_acc");
        assert_eq!(json["userId"], "steam_76561198000000001");
        assert_eq!(json["location_x"], -1200.25);
    }

    #[test]
    fn settings_document_is_valid_json() {
        let settings: serde_json::Value = serde_json::from_str(SETTINGS_JSON).unwrap();
        assert_eq!(settings["ServerPlayerMaxNum"], 32);
    }

    #[test]
    fn target_message_is_optional() {
        let input: Target = serde_json::from_str(r#"{"userid":"u1"}"#).unwrap();
        assert_eq!(input.userid, "u1");
        assert!(input.message.is_none());
    }

    #[test]
    fn target_rejects_unknown_fields() {
        let result: Result<Target, _> = serde_json::from_str(r#"{"userid":"u1","reason":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn shutdown_requires_waittime() {
        let result: Result<Shutdown, _> = serde_json::from_str(r#"{"message":"bye"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn credentials_are_encoded_once() {
        let state = MockState::new("secret");
        assert_eq!(&*state.authorization, "Basic YWRtaW46c2VjcmV0");
    }
}
