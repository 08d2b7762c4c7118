//! Stateless request builder and response handler for the Palworld API.
//!
//! # Design
//! `ApiClient` holds the session's base URL, default headers and the
//! precomputed `Authorization` value, and carries no mutable state between
//! calls. Every endpoint has a `build_*` method that produces an
//! `HttpRequest`; responses go back through [`ApiClient::parse`] (typed) or
//! [`ApiClient::parse_empty`] (action endpoints). The facades in `blocking`
//! and `nonblocking` run the round-trip in between, so everything here is
//! deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ApiError, ErrorDetail};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AnnounceRequest, BanRequest, KickRequest, ShutdownRequest, UnbanRequest};

pub const INFO_PATH: &str = "/v1/api/info";
pub const PLAYERS_PATH: &str = "/v1/api/players";
pub const SETTINGS_PATH: &str = "/v1/api/settings";
pub const METRICS_PATH: &str = "/v1/api/metrics";
pub const ANNOUNCE_PATH: &str = "/v1/api/announce";
pub const KICK_PATH: &str = "/v1/api/kick";
pub const BAN_PATH: &str = "/v1/api/ban";
pub const UNBAN_PATH: &str = "/v1/api/unban";
pub const SAVE_PATH: &str = "/v1/api/save";
pub const SHUTDOWN_PATH: &str = "/v1/api/shutdown";
pub const STOP_PATH: &str = "/v1/api/stop";

/// Builds `HttpRequest` values and validates `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let mut headers = config.headers().to_vec();
        set_header(
            &mut headers,
            "Authorization",
            config.credentials().basic_auth_header(),
        );
        Self {
            base_url: config.base_url().to_string(),
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request without a body.
    pub fn build_request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url(path),
            headers: self.headers.clone(),
            body: None,
        }
    }

    /// Request with a JSON body. Absent optional fields are left out of the
    /// body rather than sent as `null`.
    pub fn build_request_with<P: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &P,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        let mut request = self.build_request(method, path);
        set_header(&mut request.headers, "Content-Type", "application/json".to_string());
        request.body = Some(body);
        Ok(request)
    }

    pub fn build_get_info(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, INFO_PATH)
    }

    pub fn build_get_players(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, PLAYERS_PATH)
    }

    pub fn build_get_settings(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, SETTINGS_PATH)
    }

    pub fn build_get_metrics(&self) -> HttpRequest {
        self.build_request(HttpMethod::Get, METRICS_PATH)
    }

    pub fn build_announce(&self, input: &AnnounceRequest) -> Result<HttpRequest, ApiError> {
        self.build_request_with(HttpMethod::Post, ANNOUNCE_PATH, input)
    }

    pub fn build_kick(&self, input: &KickRequest) -> Result<HttpRequest, ApiError> {
        self.build_request_with(HttpMethod::Post, KICK_PATH, input)
    }

    pub fn build_ban(&self, input: &BanRequest) -> Result<HttpRequest, ApiError> {
        self.build_request_with(HttpMethod::Post, BAN_PATH, input)
    }

    pub fn build_unban(&self, input: &UnbanRequest) -> Result<HttpRequest, ApiError> {
        self.build_request_with(HttpMethod::Post, UNBAN_PATH, input)
    }

    pub fn build_save(&self) -> HttpRequest {
        self.build_request(HttpMethod::Post, SAVE_PATH)
    }

    pub fn build_shutdown(&self, input: &ShutdownRequest) -> Result<HttpRequest, ApiError> {
        self.build_request_with(HttpMethod::Post, SHUTDOWN_PATH, input)
    }

    pub fn build_stop(&self) -> HttpRequest {
        self.build_request(HttpMethod::Post, STOP_PATH)
    }

    /// Validate a response into `T`.
    ///
    /// Non-2xx statuses become `RequestFailed`; a 2xx body that does not match
    /// `T` becomes `SchemaValidation`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<T, ApiError> {
        check_status(request, &response)?;
        serde_json::from_str(&response.body).map_err(|source| ApiError::SchemaValidation {
            url: request.url.clone(),
            source,
        })
    }

    /// Validate the status of a response whose body is ignored.
    pub fn parse_empty(&self, request: &HttpRequest, response: HttpResponse) -> Result<(), ApiError> {
        check_status(request, &response)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

/// Map any non-2xx status to `RequestFailed`, keeping the body as detail.
fn check_status(request: &HttpRequest, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::RequestFailed {
        method: request.method,
        url: request.url.clone(),
        status: response.status,
        detail: ErrorDetail::from_body(&response.body),
    })
}

/// Replace every header named `name` (case-insensitive) with a single value.
fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ServerInfo, ServerMetrics};

    fn client() -> ApiClient {
        ApiClient::new(&ClientConfig::new("secret").with_base_url("http://localhost:8212"))
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_info_produces_correct_request() {
        let req = client().build_get_info();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8212/v1/api/info");
        assert!(req.body.is_none());
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("authorization"), Some("Basic YWRtaW46c2VjcmV0"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn build_kick_produces_json_body() {
        let req = client()
            .build_kick(&KickRequest::new("u1").with_message("bye"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8212/v1/api/kick");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"userid": "u1", "message": "bye"}));
    }

    #[test]
    fn build_ban_without_message_omits_field() {
        let req = client().build_ban(&BanRequest::new("u2")).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("message").is_none());
    }

    #[test]
    fn build_save_and_stop_have_no_body() {
        let c = client();
        for req in [c.build_save(), c.build_stop()] {
            assert_eq!(req.method, HttpMethod::Post);
            assert!(req.body.is_none());
        }
        assert_eq!(c.build_stop().url, "http://localhost:8212/v1/api/stop");
    }

    #[test]
    fn session_credentials_replace_caller_authorization() {
        let config = ClientConfig::new("secret")
            .with_base_url("http://localhost:8212")
            .with_header("authorization", "Bearer x");
        let req = ApiClient::new(&config).build_get_info();
        let values: Vec<&str> = req
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("authorization"))
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(values, vec!["Basic YWRtaW46c2VjcmV0"]);
    }

    #[test]
    fn json_body_replaces_caller_content_type() {
        let config = ClientConfig::new("secret")
            .with_base_url("http://localhost:8212")
            .with_header("Content-Type", "text/plain")
            .with_header("X-Trace", "1");
        let req = ApiClient::new(&config)
            .build_kick(&KickRequest::new("u1"))
            .unwrap();
        let values: Vec<&str> = req
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(values, vec!["application/json"]);
        assert_eq!(req.header("x-trace"), Some("1"));

        // Bodyless requests keep the caller's value untouched.
        let save = ApiClient::new(&config).build_save();
        assert_eq!(save.header("content-type"), Some("text/plain"));
    }

    #[test]
    fn relative_path_without_slash_is_joined() {
        let req = client().build_request(HttpMethod::Delete, "v1/api/custom");
        assert_eq!(req.url, "http://localhost:8212/v1/api/custom");
    }

    #[test]
    fn parse_metrics_success() {
        let c = client();
        let req = c.build_get_metrics();
        let metrics: ServerMetrics = c
            .parse(
                &req,
                response(
                    200,
                    r#"{"serverfps":60,"serverframetime":16.6,"currentplayernum":3,"maxplayernum":32,"uptime":120,"days":1}"#,
                ),
            )
            .unwrap();
        assert_eq!(metrics.serverfps, 60);
        assert_eq!(metrics.serverframetime, 16.6);
        assert_eq!(metrics.currentplayernum, 3);
    }

    #[test]
    fn parse_info_unauthorized() {
        let c = client();
        let req = c.build_get_info();
        let err = c
            .parse::<ServerInfo>(&req, response(401, "unauthorized"))
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 401, .. }));
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("unauthorized"));
        assert!(message.contains("GET http://localhost:8212/v1/api/info"));
    }

    #[test]
    fn parse_failure_decodes_json_detail() {
        let c = client();
        let req = c.build_kick(&KickRequest::new("ghost")).unwrap();
        let err = c
            .parse_empty(&req, response(400, r#"{"error":"player not found"}"#))
            .unwrap_err();
        match err {
            ApiError::RequestFailed { detail, status, .. } => {
                assert_eq!(status, 400);
                assert_eq!(detail, ErrorDetail::Json(serde_json::json!({"error": "player not found"})));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_missing_field_is_schema_error() {
        let c = client();
        let req = c.build_get_info();
        let err = c
            .parse::<ServerInfo>(&req, response(200, r#"{"version":"v0.3.11","servername":"x"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::SchemaValidation { .. }));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn parse_non_json_success_is_schema_error() {
        let c = client();
        let req = c.build_get_metrics();
        let err = c
            .parse::<ServerMetrics>(&req, response(200, "<html>"))
            .unwrap_err();
        assert!(matches!(err, ApiError::SchemaValidation { .. }));
    }

    #[test]
    fn parse_empty_ignores_body() {
        let c = client();
        let req = c.build_save();
        assert!(c.parse_empty(&req, response(200, "")).is_ok());
        assert!(c.parse_empty(&req, response(204, "whatever")).is_ok());
    }

    #[test]
    fn server_error_is_request_failure_even_for_empty_endpoints() {
        let c = client();
        let req = c.build_stop();
        let err = c.parse_empty(&req, response(503, "")).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
