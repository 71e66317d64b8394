//! API client for communicating with the farm management REST API.
//!
//! The client doubles as the session manager's `RemoteValidator`: a
//! credential check is an authenticated GET of the farm listing.

use std::time::Duration;

use anyhow::Result;
use reqwest::{header, Client};
use tracing::debug;

use super::ApiError;
use crate::auth::{AuthToken, RemoteValidator};

/// Protected listing endpoint used to check credentials
const PROBE_PATH: &str = "/farms/";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the farm service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self, token: Option<&AuthToken>) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let value = header::HeaderValue::from_str(&token.header_value())
                .map_err(|_| ApiError::InvalidRequest("auth token is not a valid header value".into()))?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

impl RemoteValidator for ApiClient {
    async fn probe(&self, token: Option<&AuthToken>) -> Result<(), ApiError> {
        let url = self.url(PROBE_PATH);
        debug!(url = %url, "Probing protected endpoint");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers(token)?)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        debug!(status = %response.status(), "Probe accepted");
        Ok(())
    }
}
