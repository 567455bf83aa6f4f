//! HTTP transport and the rate-limit-aware request executor.
//!
//! The transport issues a single request and hands back `(status, body)`
//! without interpreting either. The executor wraps it with the one retry
//! rule the Hostup API needs: HTTP 429 is retried with exponential backoff
//! plus jitter, everything else (2xx, other 4xx/5xx) is returned to the
//! classifier untouched.

use std::time::Duration;

use rand::Rng;
use reqwest::{Client, RequestBuilder};

use crate::error::{ApiError, Result};
use crate::util::truncate_for_log;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default overall request timeout (seconds), distinct from connect.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Upper bound (exclusive) of the uniform jitter added to each backoff.
const JITTER_UPPER_MILLIS: u64 = 500;

/// Create the HTTP client with timeout configuration.
pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Retry budget and backoff base for the 429 path.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Backoff before the first retry; doubles on each subsequent one.
    pub first_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 6,
            first_backoff: Duration::from_millis(30_000),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based, clamped to >= 1):
    /// `first_backoff * 2^(retry-1)` plus uniform jitter in `0..500ms`.
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        // Cap the shift so 2^n cannot overflow.
        let effective = retry.clamp(1, 20);
        let base_millis = u64::try_from(self.first_backoff.as_millis())
            .unwrap_or(u64::MAX)
            .saturating_mul(1_u64 << (effective - 1));
        let jitter = rand::rng().random_range(0..JITTER_UPPER_MILLIS);
        Duration::from_millis(base_millis.saturating_add(jitter))
    }
}

/// Perform a single HTTP request and return `(status_code, body)`.
///
/// No retry, no JSON awareness. Reqwest-level failures map to
/// [`ApiError::Timeout`] or [`ApiError::Network`].
async fn send_once(request_builder: RequestBuilder) -> Result<(u16, String)> {
    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("Response Status: {status_code}");

    let body = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("Response Body: {}", truncate_for_log(&body));

    Ok((status_code, body))
}

/// Execute a request, retrying on HTTP 429 according to `policy`.
///
/// Returns the raw `(status_code, body)` of the first non-429 response.
/// With `max_retries = N` at most `N + 1` requests are issued; once the
/// budget is exhausted the last 429 body is surfaced in
/// [`ApiError::RateLimitExceeded`].
pub(crate) async fn execute(
    request_builder: RequestBuilder,
    policy: &RetryPolicy,
) -> Result<(u16, String)> {
    let mut retry_count: u32 = 0;
    loop {
        let Some(req) = request_builder.try_clone() else {
            // Cannot clone (streaming body); fall back to a single attempt.
            log::warn!("Cannot clone request, disabling rate-limit retry");
            return send_once(request_builder).await;
        };

        let (status_code, body) = send_once(req).await?;
        if status_code != 429 {
            return Ok((status_code, body));
        }

        if retry_count >= policy.max_retries {
            return Err(ApiError::RateLimitExceeded {
                http_status: status_code,
                body,
                max_retries: policy.max_retries,
            });
        }

        retry_count += 1;
        let delay = policy.backoff_delay(retry_count);
        log::warn!(
            "Rate limit reached (HTTP 429). Retry: {}/{}. Waiting {:.1}s before trying again...",
            retry_count,
            policy.max_retries,
            delay.as_secs_f32()
        );
        tokio::time::sleep(delay).await;
    }
}
