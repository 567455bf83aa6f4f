//! ACME DNS-01 challenge resolution on top of [`HostupClient`].
//!
//! Turns "present a TXT challenge for domain D with value V" (or "remove
//! it") into the zone lookup, record lookup, and mutating call sequence.
//! Provider-reported conditions (zone or record missing, non-success
//! response) come back as a failed [`ChallengeOutcome`]; only network
//! failures, schema mismatches, and exhausted rate-limit budgets propagate
//! as errors.

use crate::client::HostupClient;
use crate::error::Result;
use crate::response::ApiResponse;

/// The two Lego exec-plugin actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeAction {
    /// Create the challenge TXT record.
    Present,
    /// Remove the challenge TXT record.
    Cleanup,
}

/// One present/cleanup instruction, as handed over by Lego.
#[derive(Debug, Clone)]
pub struct ChallengeRequest {
    pub action: ChallengeAction,
    /// Fully qualified challenge name, e.g. `_acme-challenge.example.org.`.
    pub fqdn: String,
    /// Challenge token value.
    pub value: String,
}

/// Structured result of one challenge resolution.
#[derive(Debug, Clone)]
pub struct ChallengeOutcome {
    pub success: bool,
    /// Human-readable explanation; non-empty on both success and failure.
    pub message: String,
    /// HTTP status of the last provider response consulted.
    pub last_status: u16,
    /// Raw body of the last provider response consulted.
    pub last_body: String,
}

impl ChallengeOutcome {
    fn from_response<T>(success: bool, message: impl Into<String>, resp: &ApiResponse<T>) -> Self {
        Self {
            success,
            message: message.into(),
            last_status: resp.http_status,
            last_body: resp.raw_body.clone(),
        }
    }
}

/// Derive the registrable ("naked") domain from a challenge name by taking
/// the last two non-empty dot-separated labels. A trailing dot is preserved
/// as received; names with fewer than two labels pass through unchanged.
///
/// Known limitation: multi-label public suffixes (`co.uk` and friends) are
/// not understood — this is deliberately not a public-suffix-list lookup.
pub fn naked_domain(fqdn: &str) -> String {
    let labels: Vec<&str> = fqdn.split('.').filter(|label| !label.is_empty()).collect();
    if labels.len() < 2 {
        return fqdn.to_string();
    }
    let mut naked = format!("{}.{}", labels[labels.len() - 2], labels[labels.len() - 1]);
    if fqdn.ends_with('.') {
        naked.push('.');
    }
    naked
}

/// Trim the trailing dot and lowercase for comparison. Lego hands over
/// dotted FQDNs while the provider stores names without the trailing dot.
fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Linear workflow: resolve zone, then (cleanup only) resolve record, then
/// mutate.
pub struct ChallengeResolver<'a> {
    client: &'a HostupClient,
}

impl<'a> ChallengeResolver<'a> {
    pub fn new(client: &'a HostupClient) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, request: &ChallengeRequest) -> Result<ChallengeOutcome> {
        let zones = self.client.list_zones().await?;
        if !zones.success {
            return Ok(ChallengeOutcome::from_response(
                false,
                "Could not list zones",
                &zones,
            ));
        }

        let naked = naked_domain(&request.fqdn);
        let wanted = normalize_domain_name(&naked);
        let zone_id = zones.success_payload().and_then(|payload| {
            payload
                .data
                .zones
                .iter()
                .find(|zone| normalize_domain_name(&zone.domain) == wanted)
                .map(|zone| zone.domain_id.clone())
        });
        let Some(zone_id) = zone_id else {
            return Ok(ChallengeOutcome::from_response(
                false,
                format!("Zone not found for naked domain: {naked}"),
                &zones,
            ));
        };
        log::debug!("Resolved naked domain '{naked}' to zone {zone_id}");

        match request.action {
            ChallengeAction::Present => self.present(&zone_id, request).await,
            ChallengeAction::Cleanup => self.cleanup(&zone_id, request).await,
        }
    }

    async fn present(&self, zone_id: &str, request: &ChallengeRequest) -> Result<ChallengeOutcome> {
        let set = self
            .client
            .set_txt_record(zone_id, &request.fqdn, &request.value)
            .await?;
        if set.success {
            Ok(ChallengeOutcome::from_response(
                true,
                "Successfully added TXT record",
                &set,
            ))
        } else {
            Ok(ChallengeOutcome::from_response(
                false,
                format!("Could not add TXT record for domain: {}", request.fqdn),
                &set,
            ))
        }
    }

    async fn cleanup(&self, zone_id: &str, request: &ChallengeRequest) -> Result<ChallengeOutcome> {
        let records = self.client.list_records(zone_id).await?;
        if !records.success {
            return Ok(ChallengeOutcome::from_response(
                false,
                format!("Could not get DNS records for zone: {zone_id}"),
                &records,
            ));
        }

        let wanted = normalize_domain_name(&request.fqdn);
        let record_id = records.success_payload().and_then(|payload| {
            payload
                .data
                .zone
                .records
                .iter()
                .find(|record| normalize_domain_name(&record.name) == wanted)
                .map(|record| record.id)
        });
        let Some(record_id) = record_id else {
            return Ok(ChallengeOutcome::from_response(
                false,
                format!("DNS record not found for domain: {}", request.fqdn),
                &records,
            ));
        };

        let deleted = self.client.delete_record(zone_id, record_id).await?;
        if deleted.success {
            Ok(ChallengeOutcome::from_response(
                true,
                "Successfully deleted TXT record",
                &deleted,
            ))
        } else {
            Ok(ChallengeOutcome::from_response(
                false,
                format!("Could not delete TXT record for domain: {}", request.fqdn),
                &deleted,
            ))
        }
    }
}
