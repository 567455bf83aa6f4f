//! CLI entry point.
//!
//! stdout carries command output (Lego parses it); all logging goes to
//! stderr. Transport, schema, and rate-limit failures exit non-zero after
//! being logged; provider-level failures (error envelope, missing zone or
//! record) are printed as outcomes and also exit non-zero, so ACME tooling
//! can decide whether to retry the challenge cycle.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Command};
use hostup_dns_api::{
    ApiResponse, ChallengeAction, ChallengeRequest, ChallengeResolver, HostupClient, Payload,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Logging to stderr; stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Cli::parse();
    let client = HostupClient::new(args.api_key, args.base_uri);

    match run(args.command, &client).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, client: &HostupClient) -> hostup_dns_api::Result<ExitCode> {
    match command {
        Command::ListZones => {
            let resp = client.list_zones().await?;
            Ok(report(resp, hostup_dns_api::ZonesResponse::pretty))
        }
        Command::ListRecords { zone_id } => {
            let resp = client.list_records(&zone_id).await?;
            Ok(report(resp, hostup_dns_api::DnsRecordsResponse::pretty))
        }
        Command::AddRecord {
            zone_id,
            record_type,
            name,
            value,
            ttl,
        } => {
            let resp = client
                .set_record(&zone_id, &record_type, &name, &value, ttl)
                .await?;
            Ok(report(resp, hostup_dns_api::SetRecordResponse::pretty))
        }
        Command::DeleteRecord { zone_id, record_id } => {
            let resp = client.delete_record(&zone_id, record_id).await?;
            Ok(report(resp, hostup_dns_api::DeleteRecordResponse::pretty))
        }
        Command::Present { fqdn, value } => {
            resolve_challenge(client, ChallengeAction::Present, fqdn, value).await
        }
        Command::Cleanup { fqdn, value } => {
            resolve_challenge(client, ChallengeAction::Cleanup, fqdn, value).await
        }
    }
}

/// Print a provider response: pretty body on success, the error envelope on
/// a provider-side failure.
fn report<T>(resp: ApiResponse<T>, pretty: impl Fn(&T) -> String) -> ExitCode {
    match &resp.payload {
        Payload::Success(parsed) => {
            println!("{}", pretty(parsed));
            ExitCode::SUCCESS
        }
        Payload::Error(envelope) => {
            tracing::error!("API error (HTTP {}): {envelope}", resp.http_status);
            println!("Error: {envelope}");
            ExitCode::FAILURE
        }
    }
}

async fn resolve_challenge(
    client: &HostupClient,
    action: ChallengeAction,
    fqdn: String,
    value: String,
) -> hostup_dns_api::Result<ExitCode> {
    let request = ChallengeRequest {
        action,
        fqdn,
        value,
    };
    let resolver = ChallengeResolver::new(client);
    let outcome = resolver.resolve(&request).await?;

    println!("{}", outcome.message);
    if outcome.success {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(
            "Challenge failed (last HTTP status {}): {}",
            outcome.last_status,
            outcome.message
        );
        Ok(ExitCode::FAILURE)
    }
}
