//! Access-token acquisition for the Spotify Web API.
//!
//! Spotify issues short-lived bearer tokens from its accounts service.
//! Two grants are supported:
//!
//! - `refresh_token` - used when the credentials carry a refresh token
//!   obtained out-of-band; required for user-scoped calls such as
//!   playlist modification.
//! - `client_credentials` - app-only access, sufficient for read-only
//!   catalog lookups.

use serde::Deserialize;

use crate::error::{ApiError, Error, Result};

/// Token endpoint of the Spotify accounts service.
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Application credentials for the Spotify accounts service.
#[derive(Clone)]
pub struct Credentials {
    /// The application client id.
    pub client_id: String,
    /// The application client secret.
    pub client_secret: String,
    /// Optional refresh token for user-scoped access.
    pub refresh_token: Option<String>,
}

impl Credentials {
    /// Creates app-only credentials (client-credentials grant).
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: None,
        }
    }

    /// Attaches a refresh token, enabling user-scoped access.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A bearer token returned by the accounts service.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// The bearer token value.
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: String,
    /// Token lifetime in seconds (typically 3600).
    pub expires_in: u64,
    /// Granted scopes, when the grant carries any.
    #[serde(default)]
    pub scope: Option<String>,
}

/// Requests an access token from the accounts service.
///
/// Uses the refresh-token grant when `credentials.refresh_token` is set,
/// and the client-credentials grant otherwise.
///
/// # Errors
///
/// Returns `ApiError::Auth` when the accounts service rejects the
/// credentials, and a transport error if the request itself fails.
pub async fn request_access_token(
    http_client: &reqwest::Client,
    credentials: &Credentials,
) -> Result<AccessToken> {
    request_access_token_at(http_client, credentials, TOKEN_URL).await
}

/// Like [`request_access_token`], but against a custom token endpoint.
///
/// This is primarily useful for tests that point at a mock server.
pub async fn request_access_token_at(
    http_client: &reqwest::Client,
    credentials: &Credentials,
    token_url: &str,
) -> Result<AccessToken> {
    let params: Vec<(&str, &str)> = match &credentials.refresh_token {
        Some(refresh_token) => vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ],
        None => vec![("grant_type", "client_credentials")],
    };

    let response = http_client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api(ApiError::Auth {
            message: if body.is_empty() {
                format!("token request failed with status {}", status.as_u16())
            } else {
                body
            },
        }));
    }

    let token = response.json::<AccessToken>().await?;
    Ok(token)
}
