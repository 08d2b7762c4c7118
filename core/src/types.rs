//! Request and response payloads for the Palworld REST API.
//!
//! # Design
//! Request payloads are strict: `deny_unknown_fields` rejects anything the
//! server does not document, and absent optional fields are omitted from the
//! wire form rather than sent as `null`.
//!
//! Response payloads are permissive: documented fields are typed and required,
//! and anything else the server adds lands in `extra` so newer servers never
//! break older clients and no field from the reply is lost.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Undeclared response fields, keyed by their wire name.
pub type ExtraFields = Map<String, Value>;

/// A strictly validated request body.
pub trait RequestPayload: Serialize + DeserializeOwned {
    /// Decode a payload from caller-supplied JSON, rejecting unknown and
    /// missing fields.
    fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(ApiError::InvalidPayload)
    }

    /// Same as [`RequestPayload::from_json`] for an already parsed value.
    fn from_value(value: Value) -> Result<Self, ApiError> {
        serde_json::from_value(value).map_err(ApiError::InvalidPayload)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /v1/api/announce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnounceRequest {
    pub message: String,
}

impl AnnounceRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /v1/api/kick`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KickRequest {
    pub userid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl KickRequest {
    pub fn new(userid: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of `POST /v1/api/ban`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BanRequest {
    pub userid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BanRequest {
    pub fn new(userid: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of `POST /v1/api/unban`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnbanRequest {
    pub userid: String,
}

impl UnbanRequest {
    pub fn new(userid: impl Into<String>) -> Self {
        Self {
            userid: userid.into(),
        }
    }
}

/// Body of `POST /v1/api/shutdown`. `waittime` is in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShutdownRequest {
    pub waittime: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ShutdownRequest {
    pub fn new(waittime: u32) -> Self {
        Self {
            waittime,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl RequestPayload for AnnounceRequest {}
impl RequestPayload for KickRequest {}
impl RequestPayload for BanRequest {}
impl RequestPayload for UnbanRequest {}
impl RequestPayload for ShutdownRequest {}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Response of `GET /v1/api/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub version: String,
    pub servername: String,
    pub description: String,
    pub worldguid: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One entry of the player roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub level: u32,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Response of `GET /v1/api/players`, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerList {
    pub players: Vec<Player>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Response of `GET /v1/api/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMetrics {
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub serverfps: u32,
    pub serverframetime: f64,
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub currentplayernum: u32,
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub maxplayernum: u32,
    /// Seconds since the server started.
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub uptime: u64,
    /// In-game days elapsed.
    #[serde(deserialize_with = "crate::whole_number::deserialize")]
    pub days: u32,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
