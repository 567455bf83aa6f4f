//! Wire types for the Hostup DNS API.
//!
//! Every 200 response shares the `{success, requestId, data}` envelope with
//! an endpoint-specific `data` shape; every non-200 response uses the
//! uniform [`ErrorEnvelope`]. Unknown fields (e.g. `timestamp` on success
//! responses) are ignored.

use serde::Deserialize;

/// Response of `GET dns/zones`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: ZonesData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZonesData {
    pub zones: Vec<Zone>,
}

/// A DNS zone owned by the account.
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub server_id: String,
    pub account_id: String,
    /// Provider-assigned zone id, used in record URLs.
    pub domain_id: String,
    /// Registrable domain name, compared case-insensitively when matching.
    pub domain: String,
}

impl ZonesResponse {
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for zone in &self.data.zones {
            out.push_str(&format!(
                "Zone {{\n  server_id: '{}',\n  account_id: '{}',\n  domain_id: '{}',\n  domain: '{}'\n}}\n",
                zone.server_id, zone.account_id, zone.domain_id, zone.domain
            ));
        }
        out
    }
}

/// Response of `GET dns/zones/{zoneId}/records`.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordsResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: DnsRecordsData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordsData {
    pub zone: RecordsZone,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordsZone {
    pub id: String,
    pub domain: String,
    pub records: Vec<DnsRecord>,
}

/// A single DNS resource record within a zone.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    /// Record id, unique within its zone.
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u32,
    pub status: String,
    pub created: String,
}

impl DnsRecordsResponse {
    pub fn pretty(&self) -> String {
        let mut out = format!(
            "DNS Records:\n  Request ID: {}\n  Zone ID: {}\n  Domain: {}\n",
            self.request_id, self.data.zone.id, self.data.zone.domain
        );
        for r in &self.data.zone.records {
            out.push_str(&format!(
                "  - ID: {}, Type: {}, Name: {}, Value: {}, TTL: {}, Status: {}, Created: {}\n",
                r.id, r.record_type, r.name, r.value, r.ttl, r.status, r.created
            ));
        }
        out
    }
}

/// Response of `POST dns/zones/{zoneId}/records`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRecordResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: SetRecordData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRecordData {
    pub record: CreatedRecord,
}

/// The record as echoed back by the create/replace endpoint (no `created`
/// timestamp yet, status is usually `pending`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRecord {
    pub id: u64,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u32,
    pub status: String,
}

impl SetRecordResponse {
    pub fn pretty(&self) -> String {
        let r = &self.data.record;
        format!(
            "Record set:\n  Request ID: {}\n  ID: {}, Type: {}, Name: {}, Value: {}, TTL: {}, Status: {}\n",
            self.request_id, r.id, r.record_type, r.name, r.value, r.ttl, r.status
        )
    }
}

/// Response of `DELETE dns/zones/{zoneId}/records/{recordId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRecordResponse {
    pub success: bool,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: DeleteRecordData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRecordData {
    pub message: String,
}

impl DeleteRecordResponse {
    pub fn pretty(&self) -> String {
        format!(
            "Record deleted:\n  Request ID: {}\n  Message: {}\n",
            self.request_id, self.data.message
        )
    }
}

/// Uniform error envelope returned with every non-200 status.
///
/// All fields are required: a non-200 body missing any of them is a schema
/// mismatch, not a provider error.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
    pub code: String,
    pub timestamp: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} [requestId={}]",
            self.error, self.code, self.message, self.request_id
        )
    }
}
