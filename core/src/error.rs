//! Error types for the Palworld API client.
//!
//! # Design
//! Callers need to tell four situations apart:
//! - the request never completed (`Transport`, including a closed session),
//! - the server answered with a non-2xx status (`RequestFailed`),
//! - the server answered 2xx with a body we cannot validate (`SchemaValidation`),
//! - a request payload was rejected before anything was sent
//!   (`InvalidPayload`).
//!
//! Transport errors wrap the underlying crate's error unmodified.

use std::fmt;

use thiserror::Error;

use crate::http::HttpMethod;

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned a non-2xx status.
    #[error("{method} {url} -> {status}: {detail}")]
    RequestFailed {
        method: HttpMethod,
        url: String,
        status: u16,
        detail: ErrorDetail,
    },

    /// A 2xx response body does not match the expected shape.
    #[error("response from {url} does not match the expected schema: {source}")]
    SchemaValidation {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload failed strict validation at construction.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// A request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code of a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the call was rejected because the session was closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, ApiError::Transport(TransportError::Closed))
    }
}

/// Failures below the HTTP status line.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("session is closed")]
    Closed,

    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Error raised by the blocking transport.
    #[error(transparent)]
    Blocking(#[from] ureq::Error),

    /// Error raised by the async transport.
    #[error(transparent)]
    Async(#[from] reqwest::Error),
}

/// Body of a failed response: decoded JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    Json(serde_json::Value),
    Text(String),
}

impl ErrorDetail {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => ErrorDetail::Json(value),
            Err(_) => ErrorDetail::Text(body.to_string()),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Json(value) => write!(f, "{value}"),
            ErrorDetail::Text(text) => f.write_str(text),
        }
    }
}
