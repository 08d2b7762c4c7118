//! Typed client for the Palworld dedicated server REST API.
//!
//! # Overview
//! Two facades expose one method per endpoint:
//! - [`PalworldClient`] blocks the calling thread (`ureq`).
//! - [`AsyncPalworldClient`] is async (`reqwest`).
//!
//! Both delegate to [`ApiClient`], which builds [`HttpRequest`] values and
//! validates [`HttpResponse`] values without touching the network.
//!
//! # Design
//! - Request payloads are strict: unknown fields are rejected when decoding,
//!   absent optional fields are never sent as `null`.
//! - Response payloads are permissive: unknown fields are kept in an `extra`
//!   map instead of being dropped or rejected.
//! - Errors distinguish transport failures, rejected requests (non-2xx) and
//!   2xx bodies that do not match the expected shape; see [`ApiError`].
//! - No retries, caching or background tasks. Each call is one round-trip.

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod nonblocking;
pub mod settings;
pub mod types;
mod whole_number;

pub use blocking::PalworldClient;
pub use client::ApiClient;
pub use config::{ClientConfig, Credentials, Timeouts};
pub use error::{ApiError, ErrorDetail, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use nonblocking::AsyncPalworldClient;
pub use settings::ServerSettings;
pub use types::{
    AnnounceRequest, BanRequest, ExtraFields, KickRequest, Player, PlayerList, RequestPayload,
    ServerInfo, ServerMetrics, ShutdownRequest, UnbanRequest,
};
