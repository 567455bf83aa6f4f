//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

/// Zones list with two zones; `example.org` has id 10000.
pub fn zones_body() -> String {
    r#"{
        "success": true,
        "requestId": "req-zones",
        "data": {"zones": [
            {"server_id": "1", "account_id": "7", "domain_id": "10111", "domain": "marton.cloud"},
            {"server_id": "1", "account_id": "7", "domain_id": "10000", "domain": "example.org"}
        ]}
    }"#
    .to_string()
}

/// Records of zone 10000: one A record and the ACME challenge TXT record
/// with id 20000.
pub fn records_body() -> String {
    r#"{
        "success": true,
        "requestId": "req-records",
        "data": {"zone": {
            "id": "10000",
            "domain": "example.org",
            "records": [
                {"id": 19999, "type": "A", "name": "www.example.org",
                 "value": "192.0.2.10", "ttl": 3600, "status": "active",
                 "created": "2025-11-01T08:00:00.000Z"},
                {"id": 20000, "type": "TXT", "name": "_acme-challenge.example.org",
                 "value": "\"tok\"", "ttl": 300, "status": "active",
                 "created": "2026-01-03T20:27:22.879Z"}
            ]
        }}
    }"#
    .to_string()
}

/// Records of zone 10000 without the challenge record.
pub fn records_body_without_challenge() -> String {
    r#"{
        "success": true,
        "requestId": "req-records",
        "data": {"zone": {
            "id": "10000",
            "domain": "example.org",
            "records": [
                {"id": 19999, "type": "A", "name": "www.example.org",
                 "value": "192.0.2.10", "ttl": 3600, "status": "active",
                 "created": "2025-11-01T08:00:00.000Z"}
            ]
        }}
    }"#
    .to_string()
}

/// Uniform provider error envelope.
pub fn error_envelope_body() -> String {
    r#"{
        "error": "Not Found",
        "message": "Zone not found",
        "code": "ZONE_NOT_FOUND",
        "timestamp": "2026-01-03T20:27:22.879Z",
        "requestId": "req-err"
    }"#
    .to_string()
}

/// Successful set-record response.
pub fn set_record_body() -> String {
    r#"{
        "success": true,
        "requestId": "req-set",
        "data": {"record": {
            "id": 30000000, "type": "TXT",
            "name": "_acme-challenge.example.org",
            "value": "\"tok\"", "ttl": 300, "status": "pending"
        }}
    }"#
    .to_string()
}

/// Successful delete-record response.
pub fn delete_record_body() -> String {
    r#"{
        "success": true,
        "requestId": "req-del",
        "data": {"message": "DNS record deleted successfully"}
    }"#
    .to_string()
}
