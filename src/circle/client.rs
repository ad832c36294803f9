//! CircleCI HTTP client for API interactions

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::api;
use crate::error::{CircleError, Result};

use super::pagination::{ListingParams, Page, Pager};
use super::response::decode_json;
use super::transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};

/// CircleCI API client
///
/// Immutable after construction; every operation borrows it, so one client can
/// serve any number of independent operations.
pub struct CircleClient {
    /// Base server URL, always ending with `/`
    server: String,
    token: String,
    transport: Box<dyn Transport>,
}

impl CircleClient {
    /// Create a new client for `server` (e.g. `https://circleci.com/api/v2/`)
    pub fn new(server: &str, token: &str) -> Self {
        Self::with_transport(server, token, ReqwestTransport::new())
    }

    /// Create a client that sends requests through the given transport
    pub fn with_transport(server: &str, token: &str, transport: impl Transport + 'static) -> Self {
        let mut server = server.to_string();
        if !server.ends_with('/') {
            server.push('/');
        }

        Self {
            server,
            token: token.to_string(),
            transport: Box::new(transport),
        }
    }

    /// Base server URL with its trailing separator
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Join a relative resource path onto the server URL
    pub(crate) fn resolve_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.server)?.join(path)?)
    }

    /// Standard headers carried by every request
    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (api::TOKEN_HEADER, self.token.clone()),
            ("Accept", api::JSON_MEDIA_TYPE.to_string()),
        ]
    }

    /// Build a body-less request, appending `query` pairs in the given order
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiRequest> {
        let mut url = self.resolve_url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(ApiRequest {
            method,
            url,
            headers: self.headers(),
            body: None,
        })
    }

    /// Build a request carrying a JSON body
    pub(crate) fn build_json_request(
        &self,
        method: Method,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ApiRequest> {
        let mut request = self.build_request(method, path, &[])?;
        request
            .headers
            .push(("Content-Type", api::JSON_MEDIA_TYPE.to_string()));
        request.body = Some(body);
        Ok(request)
    }

    /// Send a request through the transport
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        debug!("{} {}", request.method, request.url);
        self.transport.execute(request).await
    }

    /// Fetch and decode a single page of a listing endpoint
    pub(crate) async fn fetch_page<T>(&self, path: &str, params: &ListingParams) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(Method::GET, path, &params.query_pairs())?;
        let response = self.execute(request).await?;
        let page: Page<T> = decode_json(response)?;

        debug!(
            "Page from '{}' returned {} items (more: {})",
            path,
            page.items.len(),
            page.has_next()
        );
        Ok(page)
    }

    /// Start a page-by-page traversal of a listing endpoint
    pub fn pages<T>(&self, path: &str, params: ListingParams) -> Pager<'_, T>
    where
        T: DeserializeOwned,
    {
        Pager::new(self, path, params)
    }
}

/// Build a relative resource path from segments, percent-encoding each one
///
/// Empty, `.` and `..` segments are rejected; URL resolution would otherwise
/// collapse them and address a different resource.
pub(crate) fn resource_path(segments: &[&str]) -> Result<String> {
    let encoded = segments
        .iter()
        .map(|segment| match *segment {
            "" | "." | ".." => Err(CircleError::InvalidUrl(format!(
                "invalid path segment '{}'",
                segment
            ))),
            _ => Ok(urlencoding::encode(segment).into_owned()),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(encoded.join("/"))
}

#[cfg(test)]
impl CircleClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, "test-token")
    }
}
