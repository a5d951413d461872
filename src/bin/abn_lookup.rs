//! ABR lookup command line interface
//!
//! # Usage
//!
//! ```bash
//! # Details for an ABN
//! ABN_LOOKUP_GUID=... abn-lookup abn 51824753556
//!
//! # Details for an ACN
//! abn-lookup --guid ... acn 004085616
//!
//! # Name search, top 5 matches
//! abn-lookup name "taxation office" --max-results 5
//!
//! # Offline check-digit validation
//! abn-lookup validate 51824753556
//! ```
//!
//! Records are printed to stdout as JSON. Set `RUST_LOG=abn_lookup=debug` to trace requests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;

use abn_lookup::config::{BASE_URL_VAR, GUID_VAR};
use abn_lookup::{AbnClient, AbnConfig, AbnError, DEFAULT_MAX_RESULTS};

#[derive(Parser)]
#[command(name = "abn-lookup")]
#[command(version)]
#[command(about = "Look up and validate Australian Business Numbers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// ABR authentication GUID
    #[arg(long, global = true, env = GUID_VAR, hide_env_values = true)]
    guid: Option<String>,

    /// Override the ABR JSON service base URL
    #[arg(long, global = true, env = BASE_URL_VAR)]
    base_url: Option<String>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch business details by ABN
    Abn { abn: String },

    /// Fetch business details by ACN
    Acn { acn: String },

    /// Search registered business names
    Name {
        name: String,

        #[arg(long, short = 'n', default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: u32,
    },

    /// Check an ABN's check digits without contacting the registry
    Validate { abn: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AbnConfig::from_env().context("invalid configuration")?;
    if let Some(guid) = cli.guid {
        config.guid = guid;
    }
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }

    let client = AbnClient::from_config(config)?;

    match cli.command {
        Commands::Abn { abn } => report(client.abn_search(&abn).await, cli.compact),
        Commands::Acn { acn } => report(client.acn_search(&acn).await, cli.compact),
        Commands::Name { name, max_results } => {
            report(client.name_search(&name, max_results).await, cli.compact)
        }
        Commands::Validate { abn } => match client.validate_abn(&abn) {
            Ok(()) => {
                println!("{abn}: valid");
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                println!("{abn}: {e}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

fn report<T: Serialize>(
    outcome: abn_lookup::Result<abn_lookup::Lookup<T>>,
    compact: bool,
) -> Result<ExitCode> {
    match outcome {
        Ok(lookup) => {
            tracing::debug!(status = lookup.status, "lookup succeeded");
            let rendered = if compact {
                serde_json::to_string(&lookup.data)?
            } else {
                serde_json::to_string_pretty(&lookup.data)?
            };
            println!("{rendered}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            match e.status() {
                Some(status) => eprintln!("error (HTTP {status}): {e}"),
                None => eprintln!("error: {e}"),
            }
            if let AbnError::Transport(source) = &e {
                tracing::warn!(error = ?source, "transport failure");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
