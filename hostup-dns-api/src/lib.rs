//! # hostup-dns-api
//!
//! Client library for the [Hostup](https://developer.hostup.se/) DNS REST
//! API, with an ACME DNS-01 challenge resolver suitable for use as a
//! [Lego exec plugin](https://go-acme.github.io/lego/dns/exec/).
//!
//! ## Layers
//!
//! Data flows one direction, results flow back up as typed outcomes:
//!
//! 1. transport — one HTTP request in, `(status, body)` out
//! 2. retrying executor — exponential backoff + jitter on HTTP 429 only
//! 3. classifier — typed success / typed error envelope / schema mismatch
//! 4. [`HostupClient`] — verb-level zone and record operations
//! 5. [`ChallengeResolver`] — present/cleanup workflow for `_acme-challenge`
//!    TXT records
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostup_dns_api::{HostupClient, DEFAULT_BASE_URI};
//!
//! # async fn example() -> hostup_dns_api::Result<()> {
//! let client = HostupClient::new("api-key", DEFAULT_BASE_URI);
//! let zones = client.list_zones().await?;
//! if let Some(payload) = zones.success_payload() {
//!     for zone in &payload.data.zones {
//!         println!("{} ({})", zone.domain, zone.domain_id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Operations return [`Result<ApiResponse<T>>`](ApiResponse). A well-formed
//! provider error (non-200 with the uniform error envelope) is a
//! *non-success response*, not an [`ApiError`]; the error type is reserved
//! for network failures, timeouts, schema mismatches, and an exhausted
//! rate-limit retry budget.

mod challenge;
mod client;
mod error;
mod http;
mod response;
mod types;
mod util;

pub use challenge::{
    naked_domain, ChallengeAction, ChallengeOutcome, ChallengeRequest, ChallengeResolver,
};
pub use client::{HostupClient, CHALLENGE_TTL, DEFAULT_BASE_URI};
pub use error::{ApiError, Result};
pub use http::RetryPolicy;
pub use response::{ApiResponse, Payload};
pub use types::{
    CreatedRecord, DeleteRecordData, DeleteRecordResponse, DnsRecord, DnsRecordsData,
    DnsRecordsResponse, ErrorEnvelope, RecordsZone, SetRecordData, SetRecordResponse, Zone,
    ZonesData, ZonesResponse,
};
