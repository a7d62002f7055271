//! Rate-limit retry logic with exponential backoff.
//!
//! The Spotify Web API throttles clients with 429 responses and a
//! `Retry-After` header. Every request issued by [`SpotifyClient`]
//! (see [`crate::client`]) is routed through [`send_with_retry`], which
//! honours that header and falls back to exponential backoff when it is
//! absent. Non-429 responses are returned to the caller untouched.

use std::time::Duration;

use tokio::time::sleep;

/// Default initial backoff duration for retries (1 second).
const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

/// Default maximum backoff duration for retries (30 seconds).
const DEFAULT_MAX_BACKOFF_SECS: u64 = 30;

/// Default maximum number of retry attempts.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for retry behavior.
#[derive(Clone, Debug)]
pub(crate) struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration for retries.
    pub initial_backoff: Duration,
    /// Maximum backoff duration for retries.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_secs(DEFAULT_INITIAL_BACKOFF_SECS),
            max_backoff: Duration::from_secs(DEFAULT_MAX_BACKOFF_SECS),
        }
    }
}

impl RetryConfig {
    /// Calculates the backoff duration for a retry attempt.
    ///
    /// If `retry_after` is provided (from a 429 response), uses that value
    /// capped at `max_backoff`. Otherwise, uses exponential backoff:
    /// `initial * 2^attempt`, capped at `max_backoff`.
    pub fn calculate_backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let max_backoff_secs = self.max_backoff.as_secs();
        match retry_after {
            Some(secs) => Duration::from_secs(secs.min(max_backoff_secs)),
            None => {
                let initial_secs = self.initial_backoff.as_secs();
                let backoff_secs = initial_secs.saturating_mul(1 << attempt);
                Duration::from_secs(backoff_secs.min(max_backoff_secs))
            }
        }
    }
}

/// Extracts the `Retry-After` header value in seconds, if present and numeric.
pub(crate) fn retry_after_secs(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
}

/// Sends a request, retrying on 429 responses.
///
/// `make_request` is invoked once per attempt. The last response (success
/// or a 429 that exhausted the retry budget) is returned for the caller to
/// interpret; transport errors abort immediately.
pub(crate) async fn send_with_retry<F, Fut>(
    config: &RetryConfig,
    mut make_request: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut attempt = 0;
    loop {
        let response = make_request().await?;

        if response.status().as_u16() == 429 && attempt < config.max_retries {
            let retry_after = retry_after_secs(&response);
            let backoff = config.calculate_backoff(attempt, retry_after);
            sleep(backoff).await;
            attempt += 1;
            continue;
        }

        return Ok(response);
    }
}
