//! HTTP client wrapper for the Spotify Web API.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};
use crate::retry::{retry_after_secs, send_with_retry, RetryConfig};

/// Base URL for the Spotify Web API.
const BASE_URL: &str = "https://api.spotify.com/v1";

/// Client for interacting with the Spotify Web API.
///
/// The client holds a bearer access token obtained via [`crate::auth`] and
/// routes every request through the rate-limit retry loop in
/// [`crate::retry`].
#[derive(Clone)]
pub struct SpotifyClient {
    access_token: String,
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl SpotifyClient {
    /// Creates a new SpotifyClient with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Creates a new SpotifyClient with a custom base URL.
    ///
    /// This is primarily useful for tests that point the client at a mock
    /// server.
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            retry: RetryConfig::default(),
        }
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request to the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path with any query string
    ///   (e.g., "/artists/123", "/albums/456/tracks?limit=50")
    ///
    /// # Returns
    /// The deserialized response body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = send_with_retry(&self.retry, || {
            self.http_client
                .get(&url)
                .bearer_auth(&self.access_token)
                .send()
        })
        .await?;

        self.handle_response(response).await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `body` - The request body to serialize as JSON
    ///
    /// # Returns
    /// The deserialized response body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = send_with_retry(&self.retry, || {
            self.http_client
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(body)
                .send()
        })
        .await?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();
        let retry_after = retry_after_secs(&response);

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body).unwrap_or_else(|| {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body
            }
        });

        let api_error = match status_code {
            401 | 403 => ApiError::Auth { message },
            404 => ApiError::NotFound {
                resource: "resource".to_string(),
                id: "unknown".to_string(),
            },
            429 => ApiError::RateLimit { retry_after },
            400 => ApiError::Validation { message },
            _ => ApiError::Http {
                status: status_code,
                message,
            },
        };

        Error::Api(api_error)
    }
}

/// Extracts the message from a Spotify error envelope
/// (`{"error": {"status": ..., "message": ...}}`), if the body is one.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("access_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
