//! Command-line surface.
//!
//! Flags can come from the environment (required for Lego mode, where Lego
//! controls the argument list): `HOSTUP_DNS_CLIENT_API_KEY` and
//! `HOSTUP_DNS_CLIENT_BASE_URI`.

use clap::{Parser, Subcommand};

use hostup_dns_api::DEFAULT_BASE_URI;

#[derive(Debug, Parser)]
#[command(
    name = "hostup-dns-client",
    version,
    about = "Manage Hostup DNS zones and records, and answer ACME DNS-01 challenges (Lego exec plugin)"
)]
pub struct Cli {
    /// API key for authentication
    #[arg(
        short = 'k',
        long,
        env = "HOSTUP_DNS_CLIENT_API_KEY",
        hide_env_values = true
    )]
    pub api_key: String,

    /// Base URI for the Hostup API
    #[arg(
        short = 'b',
        long,
        env = "HOSTUP_DNS_CLIENT_BASE_URI",
        default_value = DEFAULT_BASE_URI
    )]
    pub base_uri: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all DNS zones associated with the account
    ListZones,

    /// List DNS records for a zone
    ListRecords {
        /// Zone ID; use list-zones to find it
        zone_id: String,
    },

    /// Add or replace a DNS record
    ///
    /// Example: add-record 10111 A foo.example.org 1.2.3.4 3600
    AddRecord {
        /// Zone ID; use list-zones to find it
        zone_id: String,
        /// A, TXT, CNAME, etc.
        record_type: String,
        /// Record name, e.g. "foo.example.org"
        name: String,
        /// Record value, e.g. "1.2.3.4" for an A record
        value: String,
        /// Time to live in seconds
        ttl: u32,
    },

    /// Remove a single record by its ID; use list-records to find it
    DeleteRecord {
        zone_id: String,
        record_id: u64,
    },

    /// Lego DNS-01: create the challenge TXT record
    ///
    /// Example: present "_acme-challenge.my.example.org." "<token>"
    Present {
        /// Fully qualified challenge name
        fqdn: String,
        /// Challenge value
        value: String,
    },

    /// Lego DNS-01: remove the challenge TXT record
    Cleanup {
        /// Fully qualified challenge name
        fqdn: String,
        /// Challenge value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lego_present_invocation_parses() {
        let cli = Cli::try_parse_from([
            "hostup-dns-client",
            "-k",
            "api-key",
            "present",
            "_acme-challenge.example.",
            "token",
        ])
        .unwrap();
        assert_eq!(cli.api_key, "api-key");
        assert_eq!(cli.base_uri, DEFAULT_BASE_URI);
        let Command::Present { fqdn, value } = cli.command else {
            panic!("expected present, got {:?}", cli.command);
        };
        assert_eq!(fqdn, "_acme-challenge.example.");
        assert_eq!(value, "token");
    }

    #[test]
    fn lego_cleanup_invocation_parses() {
        let cli = Cli::try_parse_from([
            "hostup-dns-client",
            "--api-key",
            "api-key",
            "cleanup",
            "_acme-challenge.example.",
            "token",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Cleanup { .. }));
    }

    #[test]
    fn add_record_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "hostup-dns-client",
            "-k",
            "api-key",
            "add-record",
            "10111",
            "A",
            "foo.example.org",
            "1.2.3.4",
            "3600",
        ])
        .unwrap();
        let Command::AddRecord {
            zone_id,
            record_type,
            name,
            value,
            ttl,
        } = cli.command
        else {
            panic!("expected add-record, got {:?}", cli.command);
        };
        assert_eq!(zone_id, "10111");
        assert_eq!(record_type, "A");
        assert_eq!(name, "foo.example.org");
        assert_eq!(value, "1.2.3.4");
        assert_eq!(ttl, 3600);
    }

    #[test]
    fn base_uri_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "hostup-dns-client",
            "-k",
            "api-key",
            "-b",
            "http://localhost:8080/api/",
            "list-zones",
        ])
        .unwrap();
        assert_eq!(cli.base_uri, "http://localhost:8080/api/");
    }

    #[test]
    fn invalid_ttl_is_rejected() {
        let result = Cli::try_parse_from([
            "hostup-dns-client",
            "-k",
            "api-key",
            "add-record",
            "10111",
            "A",
            "foo.example.org",
            "1.2.3.4",
            "not-a-number",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result =
            Cli::try_parse_from(["hostup-dns-client", "-k", "api-key", "frobnicate", "a", "b"]);
        assert!(result.is_err());
    }
}
