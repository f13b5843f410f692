//! Bot Block Checker entry point
//!
//! Loads configuration, sets up logging and serves the `/check` API.

use anyhow::Context;
use bot_block_checker::config::{load_config_with_hash, validate, Config};
use bot_block_checker::server::serve;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bot Block Checker: which AI crawlers does a site's robots.txt block?
///
/// Serves `GET /check?url=...&bots=...&includeRobotsTxt=...`, fetching the
/// site's robots.txt and reporting per-agent access to the site root.
#[derive(Parser, Debug)]
#[command(name = "bot-block-checker")]
#[command(version)]
#[command(about = "Reports which AI crawlers a site's robots.txt blocks", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration file
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration, print it, and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
        validate(&config).context("invalid --bind address")?;
    }

    if cli.dry_run {
        print_config(&config);
        return Ok(());
    }

    serve(&config).await.context("server failed")?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bot_block_checker=info,warn"),
            1 => EnvFilter::new("bot_block_checker=debug,info"),
            2 => EnvFilter::new("bot_block_checker=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the effective configuration for --dry-run
fn print_config(config: &Config) {
    println!("=== Bot Block Checker Dry Run ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\nFetcher:");
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Max redirects: {}", config.fetcher.max_redirects);
    println!("  User agent: {}", config.fetcher.user_agent);

    println!("\nDefault bots ({}):", config.bots.default.len());
    for bot in &config.bots.default {
        println!("  - {}", bot);
    }

    println!("\n✓ Configuration is valid");
}
