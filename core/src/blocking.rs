//! Blocking client facade backed by `ureq`.
//!
//! Every call runs on the calling thread. The `ureq::Agent` owns the
//! connection pool; [`PalworldClient::close`] drops it, after which every
//! call fails with [`TransportError::Closed`].

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

/// Synchronous client for the Palworld REST API.
///
/// ```no_run
/// use palworld_core::{ClientConfig, PalworldClient};
///
/// let mut client = PalworldClient::new(ClientConfig::new("admin-password"));
/// let metrics = client.scoped(|c| c.get_metrics())?;
/// println!("fps: {}", metrics.serverfps);
/// # Ok::<(), palworld_core::ApiError>(())
/// ```
#[derive(Debug)]
pub struct PalworldClient {
    api: ApiClient,
    config: ClientConfig,
    agent: Option<ureq::Agent>,
}

impl PalworldClient {
    /// Building the agent does no I/O; the first call opens a connection.
    pub fn new(config: ClientConfig) -> Self {
        let timeouts = config.timeouts();
        // Statuses are data here; `ApiClient` decides what a failure is.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(timeouts.connect))
            .timeout_send_request(Some(timeouts.write))
            .timeout_send_body(Some(timeouts.write))
            .timeout_recv_response(Some(timeouts.read))
            .timeout_recv_body(Some(timeouts.read))
            .max_idle_age(timeouts.pool)
            .build()
            .new_agent();
        debug!(base_url = config.base_url(), "opened blocking session");
        Self {
            api: ApiClient::new(&config),
            config,
            agent: Some(agent),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The request builder this session dispatches through.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_closed(&self) -> bool {
        self.agent.is_none()
    }

    /// Release the connection pool. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.agent.take().is_some() {
            debug!(base_url = self.config.base_url(), "closed blocking session");
        }
    }

    /// Run `f` with this session and close it afterwards, also when `f`
    /// returns an error or panics.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&Self) -> T) -> T {
        let guard = CloseOnDrop(self);
        f(&*guard.0)
    }

    pub fn get_info(&self) -> Result<ServerInfo, ApiError> {
        self.invoke(self.api.build_get_info())
    }

    pub fn get_players(&self) -> Result<PlayerList, ApiError> {
        self.invoke(self.api.build_get_players())
    }

    pub fn get_settings(&self) -> Result<ServerSettings, ApiError> {
        self.invoke(self.api.build_get_settings())
    }

    pub fn get_metrics(&self) -> Result<ServerMetrics, ApiError> {
        self.invoke(self.api.build_get_metrics())
    }

    pub fn announce(&self, message: &str) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_announce(&AnnounceRequest::new(message))?)
    }

    pub fn kick(&self, userid: &str, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = KickRequest::new(userid);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_kick(&input)?)
    }

    pub fn ban(&self, userid: &str, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = BanRequest::new(userid);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_ban(&input)?)
    }

    pub fn unban(&self, userid: &str) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_unban(&UnbanRequest::new(userid))?)
    }

    pub fn save(&self) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_save())
    }

    /// Ask the server to shut down after `waittime` seconds.
    pub fn shutdown(&self, waittime: u32, message: Option<&str>) -> Result<(), ApiError> {
        let mut input = ShutdownRequest::new(waittime);
        input.message = message.map(str::to_string);
        self.invoke_empty(self.api.build_shutdown(&input)?)
    }

    /// Stop the server immediately.
    pub fn stop(&self) -> Result<(), ApiError> {
        self.invoke_empty(self.api.build_stop())
    }

    /// Send `request` and validate the response body into `T`.
    pub fn invoke<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let response = self.execute(&request)?;
        self.api.parse(&request, response)
    }

    /// Send `request` and check only its status.
    pub fn invoke_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        let response = self.execute(&request)?;
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
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.as_ref().ok_or(TransportError::Closed)?;
        let headers = &request.headers;
        let url = request.url.as_str();

        debug!("sending request");
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(agent.post(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(agent.put(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(agent.put(url), headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(agent.patch(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => with_headers(agent.patch(url), headers).send_empty(),
        };
        let mut response = result.map_err(TransportError::from)?;

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
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::from)?;

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

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

struct CloseOnDrop<'a>(&'a mut PalworldClient);

impl Drop for CloseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.close();
    }
}
