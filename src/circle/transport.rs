//! HTTP transport seam
//!
//! The client never talks to reqwest directly; it hands fully-built
//! [`ApiRequest`]s to a [`Transport`] and gets back a [`RawResponse`] whose
//! body has already been read to the end. This keeps request construction and
//! response decoding free of I/O, and lets tests substitute a scripted double.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::Result;

/// A fully-addressed request, ready to be executed
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Look up a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and fully drained body of an HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, lossily decoded (for error messages)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes requests against the API server
///
/// Implementations surface connection-level failures as
/// [`CircleError::Transport`](crate::error::CircleError::Transport) and must
/// not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        (**self).execute(request).await
    }
}

/// Default transport backed by a long-lived `reqwest::Client`
pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Create a transport with pooled, keep-alive connections and sane timeouts
    pub fn new() -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!("Received status {} ({} bytes)", status, body.len());
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(method: Method, url: &str) -> ApiRequest {
        ApiRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: vec![("circle-token", "secret".to_string())],
            body: None,
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = request(Method::GET, "https://example.com/");
        assert_eq!(req.header("Circle-Token"), Some("secret"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_raw_response_body_text() {
        let resp = RawResponse::new(200, "{\"ok\":true}");
        assert_eq!(resp.body_text(), "{\"ok\":true}");
    }

    #[tokio::test]
    async fn test_reqwest_transport_sends_headers_and_drains_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/context"))
            .and(header("circle-token", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\":[]}"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new();
        let url = format!("{}/context", mock_server.uri());
        let resp = transport
            .execute(request(Method::GET, &url))
            .await
            .unwrap();

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body_text(), "{\"items\":[]}");
    }

    #[tokio::test]
    async fn test_reqwest_transport_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/context/ctx-1/environment-variable/FOO"))
            .and(body_json(serde_json::json!({"value": "bar"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let mut req = request(
            Method::PUT,
            &format!(
                "{}/context/ctx-1/environment-variable/FOO",
                mock_server.uri()
            ),
        );
        req.body = Some(serde_json::json!({"value": "bar"}));

        let resp = ReqwestTransport::new().execute(req).await.unwrap();
        assert_eq!(resp.status, 200);
    }

    #[tokio::test]
    async fn test_reqwest_transport_does_not_interpret_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/context/x", mock_server.uri());
        let resp = ReqwestTransport::new()
            .execute(request(Method::DELETE, &url))
            .await
            .unwrap();

        assert_eq!(resp.status, 500);
        assert_eq!(resp.body_text(), "boom");
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_failure_is_transport_error() {
        // Port 1 on localhost is never listening
        let result = ReqwestTransport::new()
            .execute(request(Method::GET, "http://127.0.0.1:1/context"))
            .await;

        assert!(matches!(
            result,
            Err(crate::error::CircleError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_reqwest_transport_with_client_honors_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/context"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let url = format!("{}/context", mock_server.uri());
        let result = ReqwestTransport::with_client(client)
            .execute(request(Method::GET, &url))
            .await;

        assert!(matches!(
            result,
            Err(crate::error::CircleError::Transport(_))
        ));
    }
}
