use crate::util::truncate_for_log;

/// Unified error type for all Hostup API operations.
///
/// Only truly exceptional conditions surface here. A well-formed provider
/// error envelope (HTTP 4xx/5xx with a parseable body) is **not** an error
/// at this level — it is returned as a failed
/// [`ApiResponse`](crate::ApiResponse) for the caller to interpret.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A network-level failure (connection refused, DNS resolution of the
    /// API host, broken transfer). Terminal for the current call.
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The connect or overall request deadline was exceeded.
    ///
    /// Timeouts are not retried; only rate limiting triggers retries.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// HTTP 429 persisted past the retry budget.
    #[error("Rate limit reached (HTTP {http_status}), max retry ({max_retries}) attempts exhausted")]
    RateLimitExceeded {
        /// Status code of the last response (always 429 in practice).
        http_status: u16,
        /// Body of the last 429 response, kept for diagnostics.
        body: String,
        /// The retry budget that was exhausted.
        max_retries: u32,
    },

    /// The response body did not parse under the schema selected by the
    /// observed status code (success schema on 200, error envelope
    /// otherwise). Never silently coerced to a default value.
    #[error("Unexpected response schema (HTTP {http_status}): {detail}; body: {}", truncate_for_log(.body))]
    SchemaMismatch {
        /// Status code of the offending response.
        http_status: u16,
        /// Raw response body.
        body: String,
        /// Deserializer error message.
        detail: String,
    },
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_rate_limit_exceeded() {
        let e = ApiError::RateLimitExceeded {
            http_status: 429,
            body: String::new(),
            max_retries: 6,
        };
        assert_eq!(
            e.to_string(),
            "Rate limit reached (HTTP 429), max retry (6) attempts exhausted"
        );
    }

    #[test]
    fn display_schema_mismatch_includes_body() {
        let e = ApiError::SchemaMismatch {
            http_status: 200,
            body: "<html>oops</html>".to_string(),
            detail: "expected value at line 1".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("HTTP 200"));
        assert!(msg.contains("<html>oops</html>"));
    }
}
