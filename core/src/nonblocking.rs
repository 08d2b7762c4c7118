//! Async client facade backed by `reqwest`.
//!
//! The only suspension point of a call is the HTTP round-trip. Dropping a
//! call's future drops the in-flight `reqwest` request along with any
//! partially read body.

use std::ops::AsyncFnOnce;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn, Span};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::settings::ServerSettings;
use crate::types::{
    AnnounceRequest, BanRequest, KickRequest, PlayerList, ServerInfo, ServerMetrics,
    ShutdownRequest, UnbanRequest,
};

/// Asynchronous client for the Palworld REST API.
///
/// Endpoint methods take `&self`, so one session can serve concurrent tasks;
/// `reqwest` spreads them over its connection pool.
///
/// ```no_run
/// use palworld_core::{AsyncPalworldClient, ClientConfig};
///
/// # async fn run() -> Result<(), palworld_core::ApiError> {
/// let mut client = AsyncPalworldClient::new(ClientConfig::new("admin-password"))?;
/// let info = client.scoped(async |c| c.get_info().await).await?;
/// println!("{} {}", info.servername, info.version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncPalworldClient {
    api: ApiClient,
    config: ClientConfig,
    client: Option<reqwest::Client>,
}

impl AsyncPalworldClient {
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let timeouts = config.timeouts();
        // Per-phase limits only: a response that keeps making progress is
        // never cut off. reqwest has no per-write timeout, so `write` is
        // unused here.
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .pool_idle_timeout(timeouts.pool)
            .build()
            .map_err(TransportError::from)?;
        debug!(base_url = config.base_url(), "opened async session");
        Ok(Self {
            api: ApiClient::new(&config),
            config,
            client: Some(client),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The request builder this session dispatches through.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// Release the connection pool. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.client.take().is_some() {
            debug!(base_url = self.config.base_url(), "closed async session");
        }
    }

    /// Run `f` with this session and close it afterwards, also when `f`
    /// fails, panics or the returned future is dropped before completion.
    pub async fn scoped<T>(&mut self, f: impl AsyncFnOnce(&Self) -> T) -> T {
        let guard = CloseOnDrop(self);
        f(&*guard.0).await
    }

    pub async fn get_info(&self) -> Result<ServerInfo, ApiError> {
        self.invoke(self.api.build_get_info()).await
    }

    pub async fn get_players(&self) -> Result<PlayerList, ApiError> {
        self.invoke(self.api.build_get_players()).await
    }

    pub async fn get_settings(&self) -> Result<ServerSettings, ApiError> {
        self.invoke(self.api.build_get_settings()).await
    }

    pub async fn get_metrics(&self) -> Result<ServerMetrics, ApiError> {
        self.invoke(self.api.build_get_metrics()).await
    }

    pub async fn announce(&self, message: &str) -> Result<(), ApiError> {
        let request = self.api.build_announce(&AnnounceRequest::new(message))?;
        self.invoke_empty(request).await
    }

    pub async fn kick(&self, userid: &str, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = KickRequest::new(userid);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_kick(&input)?).await
    }

    pub async fn ban(&self, userid: &str, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = BanRequest::new(userid);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_ban(&input)?).await
    }

    pub async fn unban(&self, userid: &str) -> Result<(), ApiError> {
        let request = self.api.build_unban(&UnbanRequest::new(userid))?;
        self.invoke_empty(request).await
    }

    pub async fn save(&self) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_save()).await
    }

    /// Ask the server to shut down after `waittime` seconds.
    pub async fn shutdown(&self, waittime: u32, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = ShutdownRequest::new(waittime);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_shutdown(&input)?).await
    }

    pub async fn stop(&self) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_stop()).await
    }

    /// Send `request` and validate the response body into `T`.
    pub async fn invoke<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.execute(&request).await?;
        self.api.parse(&request, response)
    }

    /// Send `request` and check only its status.
    pub async fn invoke_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        let response = self.execute(&request).await?;
        self.api.parse_empty(&request, response)
    }

    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            http.method = %request.method,
            http.url = %request.url,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let client = self.client.as_ref().ok_or(TransportError::Closed)?;

        let mut builder = client.request(to_reqwest(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!("sending request");
        let response = builder.send().await.map_err(TransportError::from)?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(TransportError::from)?;

        if (200..300).contains(&status) {
            debug!(status, "response received");
        } else {
            warn!(status, "server rejected request");
        }
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

struct CloseOnDrop<'a>(&'a mut AsyncPalworldClient);

impl Drop for CloseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.close();
    }
}
