//! Rewards CLI
//!
//! Command-line interface for issuing, validating and reading shop tokens.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rewards_lib::jwe::Compression;
use rewards_lib::{Rewards, RewardsConfig};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "rewards")]
#[command(about = "Rewards CLI - Issue and verify shop identity tokens", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Shop identifier appended to tokens
    #[arg(long, global = true, env = "REWARDS_SHOP_ID")]
    shop_id: Option<String>,

    /// Shop secret (e.g. sk_61c394cf3346077b)
    #[arg(long, global = true, env = "REWARDS_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// JSON configuration file with shop_id and secret
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Compression for new tokens (deflate or none)
    #[arg(long, global = true, env = "REWARDS_COMPRESSION")]
    compression: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a payload and issue an identified token
    Issue {
        /// Payload JSON file, or - for stdin
        #[arg(short, long, default_value = "-")]
        payload: String,
    },

    /// Validate a payload without issuing a token
    Validate {
        /// Payload JSON file, or - for stdin
        #[arg(short, long, default_value = "-")]
        payload: String,
    },

    /// Decode a token issued for this shop
    Read {
        /// Token in envelope@shop_id form
        token: String,

        /// Require an unexpired partner token
        #[arg(long)]
        partner: bool,
    },

    /// Issue a partner token valid for one hour
    Partner,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "rewards_cli=debug,rewards_lib=debug"
    } else {
        "rewards_cli=info,rewards_lib=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Validate { payload } => commands::validate::run(payload, cli.verbose),
        Commands::Issue { payload } => commands::issue::run(&issuer(&cli)?, payload, cli.verbose),
        Commands::Read { token, partner } => {
            commands::read::run(&issuer(&cli)?, token, *partner, cli.verbose)
        }
        Commands::Partner => commands::partner::run(&issuer(&cli)?, cli.verbose),
    }
}

/// Build the issuer from `--config`, or from `--shop-id` and `--secret`.
fn issuer(cli: &Cli) -> Result<Rewards> {
    let mut config = match (&cli.config, &cli.shop_id, &cli.secret) {
        (Some(path), _, _) => RewardsConfig::from_file(path)?,
        (None, Some(shop_id), Some(secret)) => RewardsConfig::new(shop_id, secret),
        _ => anyhow::bail!(
            "no shop configured: pass --config, or --shop-id and --secret (or set REWARDS_SHOP_ID and REWARDS_SECRET)"
        ),
    };

    if let Some(compression) = &cli.compression {
        let compression = Compression::parse(compression)
            .with_context(|| format!("unknown compression: {compression}"))?;
        config = config.with_compression(compression);
    }

    tracing::debug!(?config, "loaded shop configuration");
    Rewards::from_config(&config).context("invalid shop configuration")
}
