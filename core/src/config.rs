//! Session configuration: base URL, credentials, timeouts and default headers.
//!
//! There is no configuration file. Callers build a `ClientConfig` in code and
//! hand it to a facade, which keeps it for the lifetime of the session.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8212";
pub const DEFAULT_USERNAME: &str = "admin";

/// Basic-auth credential pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-phase timeouts applied by both transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
    pub write: Duration,
    /// Longest an idle pooled connection is kept.
    pub pool: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            read: Duration::from_secs(10),
            write: Duration::from_secs(10),
            pool: Duration::from_secs(10),
        }
    }
}

/// Everything a client session needs to talk to one server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    credentials: Credentials,
    timeouts: Timeouts,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Defaults for a local server: `http://127.0.0.1:8212`, user `admin`,
    /// `Accept: application/json`.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new(DEFAULT_USERNAME, password),
            timeouts: Timeouts::default(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.credentials.username = username.into();
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Add a default header, replacing any existing header with the same
    /// (case-insensitive) name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Replace the whole default header set.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
