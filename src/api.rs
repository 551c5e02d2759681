//! TinyURL API client for backend communication.
//!
//! Thin typed wrapper over the backend's four endpoints. Every failure is
//! converted here, at the transport boundary, into [`ApiError`]; callers
//! project it to a display string with [`ApiError::user_message`] and never
//! inspect raw transport errors.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::DEFAULT_BASE_URL;
use crate::models::{
    CollisionStrategy, ShortenRequest, ShortenResponse, StatsSnapshot, TopEntry, TopUrlsResponse,
};

/// Fallback message for a failed shorten request with no server detail.
pub const SHORTEN_FALLBACK: &str = "Failed to shorten URL";
/// Fallback message for a failed statistics fetch.
pub const STATS_FALLBACK: &str = "Failed to fetch statistics";
/// Fallback message for a failed top-URLs fetch.
pub const TOP_FALLBACK: &str = "Failed to fetch top URLs";
/// Fallback message for a failed prefix search.
pub const SEARCH_FALLBACK: &str = "Failed to search URLs";

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Error type for TinyURL client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server returned a non-2xx status. `detail` is the server's structured
    /// message when the body carried one.
    #[error("server error ({status}){}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Server { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Project the error to the single string shown to the user.
    ///
    /// Prefers the server-supplied `detail`; every other failure collapses to
    /// the caller's fallback so no transport internals leak into the display
    /// layer.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Client for the TinyURL backend API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TinyUrlClient {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    client: Client,
}

impl TinyUrlClient {
    /// Create a client against the default backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Build a short link for a code, the same way the web frontend does.
    pub fn short_link(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Shorten a URL with the chosen collision strategy.
    ///
    /// `POST /api/shorten`
    pub async fn shorten(
        &self,
        url: &str,
        strategy: CollisionStrategy,
    ) -> Result<ShortenResponse, ApiError> {
        let endpoint = format!("{}/api/shorten", self.base_url);
        let body = ShortenRequest {
            url: url.to_string(),
            collision_strategy: strategy,
        };
        let response = self.client.post(&endpoint).json(&body).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the statistics snapshot.
    ///
    /// `GET /api/stats`
    pub async fn stats(&self) -> Result<StatsSnapshot, ApiError> {
        let endpoint = format!("{}/api/stats", self.base_url);
        let response = self.client.get(&endpoint).send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the leaderboard, unwrapping the `top_urls` envelope.
    ///
    /// `GET /api/top`
    pub async fn top_urls(&self) -> Result<Vec<TopEntry>, ApiError> {
        let endpoint = format!("{}/api/top", self.base_url);
        let response = self.client.get(&endpoint).send().await?;
        let envelope: TopUrlsResponse = Self::parse_response(response).await?;
        Ok(envelope.top_urls)
    }

    /// Search stored URLs by prefix.
    ///
    /// `GET /api/search?prefix=&max_results=`
    ///
    /// The result shape is defined by the backend and not interpreted here;
    /// the payload is returned as parsed JSON.
    pub async fn search(
        &self,
        prefix: &str,
        max_results: u32,
    ) -> Result<serde_json::Value, ApiError> {
        let endpoint = format!("{}/api/search", self.base_url);
        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("prefix", prefix.to_string()),
                ("max_results", max_results.to_string()),
            ])
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Check status and deserialize the body, or extract the server's
    /// `detail` message from a non-2xx response.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|e| e.detail);
        ApiError::Server { status, detail }
    }
}

impl Default for TinyUrlClient {
    fn default() -> Self {
        Self::new()
    }
}
