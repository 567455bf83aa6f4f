//! Three-way response classification.
//!
//! The Hostup API uses a per-endpoint success schema on HTTP 200 and one
//! uniform error envelope on every other status. A body that fits neither
//! schema is a [`SchemaMismatch`](crate::ApiError::SchemaMismatch) — we
//! never fall back from the success schema to the error envelope on a 200,
//! since that would silently hide malformed success payloads.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::types::ErrorEnvelope;
use crate::util::truncate_for_log;

/// Outcome of one provider call: status, raw body, and exactly one parsed
/// payload (success-typed or error-typed). Immutable after construction.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// True iff the status was 200 and the body parsed as `T`.
    pub success: bool,
    /// HTTP status code of the response.
    pub http_status: u16,
    /// Raw body, always retained for diagnostics.
    pub raw_body: String,
    /// The parsed payload.
    pub payload: Payload<T>,
}

/// The parsed side of an [`ApiResponse`].
#[derive(Debug, Clone)]
pub enum Payload<T> {
    /// 200 with a body matching the endpoint's success schema.
    Success(T),
    /// Non-200 with a well-formed [`ErrorEnvelope`].
    Error(ErrorEnvelope),
}

impl<T> ApiResponse<T> {
    /// The success payload, if this was a protocol success.
    pub fn success_payload(&self) -> Option<&T> {
        match &self.payload {
            Payload::Success(parsed) => Some(parsed),
            Payload::Error(_) => None,
        }
    }

    /// The provider error envelope, if the call failed provider-side.
    pub fn error_payload(&self) -> Option<&ErrorEnvelope> {
        match &self.payload {
            Payload::Success(_) => None,
            Payload::Error(envelope) => Some(envelope),
        }
    }
}

/// Classify a raw `(status, body)` pair under the expected success schema.
pub(crate) fn classify<T: DeserializeOwned>(
    http_status: u16,
    body: String,
) -> Result<ApiResponse<T>> {
    if http_status == 200 {
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(ApiResponse {
                success: true,
                http_status,
                raw_body: body,
                payload: Payload::Success(parsed),
            }),
            Err(e) => {
                log::error!("JSON parse failed: {e}");
                log::error!("Raw response: {}", truncate_for_log(&body));
                Err(ApiError::SchemaMismatch {
                    http_status,
                    body,
                    detail: e.to_string(),
                })
            }
        }
    } else {
        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => Ok(ApiResponse {
                success: false,
                http_status,
                raw_body: body,
                payload: Payload::Error(envelope),
            }),
            Err(e) => {
                log::error!("JSON parse failed for error envelope (HTTP {http_status}): {e}");
                log::error!("Raw response: {}", truncate_for_log(&body));
                Err(ApiError::SchemaMismatch {
                    http_status,
                    body,
                    detail: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZonesResponse;

    const ZONES_BODY: &str = r#"{
        "success": true,
        "requestId": "req-1",
        "data": {"zones": [
            {"server_id": "1", "account_id": "7", "domain_id": "10000", "domain": "example.org"}
        ]}
    }"#;

    const ERROR_BODY: &str = r#"{
        "error": "Not Found",
        "message": "Zone not found",
        "code": "ZONE_NOT_FOUND",
        "timestamp": "2026-01-03T20:27:22.879Z",
        "requestId": "req-9"
    }"#;

    #[test]
    fn status_200_with_matching_body_is_success() {
        let resp = classify::<ZonesResponse>(200, ZONES_BODY.to_string()).unwrap();
        assert!(resp.success);
        assert_eq!(resp.http_status, 200);
        let zones = resp.success_payload().unwrap();
        assert_eq!(zones.data.zones[0].domain, "example.org");
        assert!(resp.error_payload().is_none());
    }

    #[test]
    fn status_200_with_error_envelope_body_is_schema_mismatch() {
        // No fallback to the error schema on a 200.
        let result = classify::<ZonesResponse>(200, ERROR_BODY.to_string());
        assert!(matches!(
            result,
            Err(ApiError::SchemaMismatch {
                http_status: 200,
                ..
            })
        ));
    }

    #[test]
    fn status_404_with_valid_envelope_is_failed_response() {
        let resp = classify::<ZonesResponse>(404, ERROR_BODY.to_string()).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.http_status, 404);
        let envelope = resp.error_payload().unwrap();
        assert_eq!(envelope.error, "Not Found");
        assert_eq!(envelope.message, "Zone not found");
        assert_eq!(envelope.code, "ZONE_NOT_FOUND");
        assert_eq!(envelope.request_id, "req-9");
        assert_eq!(resp.raw_body, ERROR_BODY);
    }

    #[test]
    fn status_400_with_garbage_body_is_schema_mismatch() {
        let result = classify::<ZonesResponse>(400, "<html>bad request</html>".to_string());
        let Err(ApiError::SchemaMismatch {
            http_status, body, ..
        }) = result
        else {
            panic!("expected SchemaMismatch");
        };
        assert_eq!(http_status, 400);
        assert_eq!(body, "<html>bad request</html>");
    }

    #[test]
    fn raw_body_retained_on_success() {
        let resp = classify::<ZonesResponse>(200, ZONES_BODY.to_string()).unwrap();
        assert_eq!(resp.raw_body, ZONES_BODY);
    }
}
