//! CLI entrypoint for the opnVote ballot decoder
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use opnvote_application::{DecodeBallotInput, DecodeBallotUseCase};
use opnvote_infrastructure::{ConfigLoader, IpfsMetadataFetcher, RsaDecryptionGateway};
use opnvote_presentation::{Cli, ConsoleRenderer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Resolve the fetcher configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to load configuration")?
    };

    if let Some(gateway) = &cli.gateway {
        config = config.with_gateway(gateway);
    }

    info!("Using IPFS gateway {}", config.gateway);

    // === Dependency Injection ===
    let gateway = Arc::new(RsaDecryptionGateway::new());
    let fetcher = Arc::new(
        IpfsMetadataFetcher::new(config).context("failed to build the IPFS fetcher")?,
    );
    let use_case = DecodeBallotUseCase::new(gateway, fetcher);

    if !cli.quiet {
        println!();
        println!("=== opnVote Ballot Decoder ===");
        println!();
    }

    // Build input
    let mut input = DecodeBallotInput::new(&cli.encrypted_votes, &cli.private_key);
    if let Some(cid) = &cli.cid {
        input = input.with_description_cid(cid);
    }

    let decoded = use_case
        .execute(input)
        .await
        .context("failed to decode ballot")?;

    print!("{}", ConsoleRenderer::render(&decoded, &Local));

    Ok(())
}
