//! Verb-level facade over the Hostup DNS API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::http::{build_http_client, execute, RetryPolicy};
use crate::response::{classify, ApiResponse};
use crate::types::{DeleteRecordResponse, DnsRecordsResponse, SetRecordResponse, ZonesResponse};

/// Default base URI of the hosted Hostup API.
pub const DEFAULT_BASE_URI: &str = "https://cloud.hostup.se/api/";

/// Default TTL for ACME challenge TXT records (seconds).
pub const CHALLENGE_TTL: u32 = 300;

/// Hostup DNS API client.
///
/// Holds the immutable configuration (base URI, API key, retry policy) and
/// the underlying connection pool; safe to reuse across sequential calls.
/// Every operation returns an [`ApiResponse`] on protocol success or a
/// well-formed provider error, and fails with
/// [`ApiError`](crate::ApiError) only on network trouble, schema
/// mismatches, or an exhausted rate-limit budget.
pub struct HostupClient {
    client: reqwest::Client,
    base_uri: String,
    api_key: String,
    retry_policy: RetryPolicy,
}

/// JSON body of the create/replace record endpoint.
#[derive(Serialize)]
struct SetRecordBody<'a> {
    #[serde(rename = "type")]
    record_type: &'a str,
    name: &'a str,
    value: &'a str,
    ttl: u32,
}

impl HostupClient {
    /// Create a client with the default retry policy (6 retries, 30s first
    /// backoff).
    pub fn new(api_key: impl Into<String>, base_uri: impl Into<String>) -> Self {
        Self::with_retry_policy(api_key, base_uri, RetryPolicy::default())
    }

    /// Create a client with an explicit retry policy.
    pub fn with_retry_policy(
        api_key: impl Into<String>,
        base_uri: impl Into<String>,
        retry_policy: RetryPolicy,
    ) -> Self {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        Self {
            client: build_http_client(),
            base_uri,
            api_key: api_key.into(),
            retry_policy,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let request = self.client.get(&url).header("X-API-Key", &self.api_key);
        let (status, body) = execute(request, &self.retry_policy).await?;
        classify(status, body)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let url = self.url(path);
        log::debug!("POST {url}");

        let request = self
            .client
            .post(&url)
            .header("X-API-Key", &self.api_key)
            .json(body);
        let (status, response_body) = execute(request, &self.retry_policy).await?;
        classify(status, response_body)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let url = self.url(path);
        log::debug!("DELETE {url}");

        let request = self.client.delete(&url).header("X-API-Key", &self.api_key);
        let (status, body) = execute(request, &self.retry_policy).await?;
        classify(status, body)
    }

    /// List all DNS zones associated with the account.
    pub async fn list_zones(&self) -> Result<ApiResponse<ZonesResponse>> {
        self.get("dns/zones").await
    }

    /// List all DNS records of a zone.
    pub async fn list_records(&self, zone_id: &str) -> Result<ApiResponse<DnsRecordsResponse>> {
        self.get(&format!("dns/zones/{zone_id}/records")).await
    }

    /// Create or replace a DNS record.
    pub async fn set_record(
        &self,
        zone_id: &str,
        record_type: &str,
        name: &str,
        value: &str,
        ttl: u32,
    ) -> Result<ApiResponse<SetRecordResponse>> {
        let body = SetRecordBody {
            record_type,
            name,
            value,
            ttl,
        };
        self.post(&format!("dns/zones/{zone_id}/records"), &body)
            .await
    }

    /// Create or replace a TXT record with the ACME challenge TTL.
    pub async fn set_txt_record(
        &self,
        zone_id: &str,
        name: &str,
        value: &str,
    ) -> Result<ApiResponse<SetRecordResponse>> {
        self.set_record(zone_id, "TXT", name, value, CHALLENGE_TTL)
            .await
    }

    /// Delete a single DNS record by its id.
    pub async fn delete_record(
        &self,
        zone_id: &str,
        record_id: u64,
    ) -> Result<ApiResponse<DeleteRecordResponse>> {
        self.delete(&format!("dns/zones/{zone_id}/records/{record_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_uri_trailing_slash_normalized() {
        let client = HostupClient::new("key", "https://cloud.hostup.se/api/");
        assert_eq!(
            client.url("dns/zones"),
            "https://cloud.hostup.se/api/dns/zones"
        );

        let client = HostupClient::new("key", "https://cloud.hostup.se/api");
        assert_eq!(
            client.url("dns/zones/10000/records/20000"),
            "https://cloud.hostup.se/api/dns/zones/10000/records/20000"
        );
    }
}
