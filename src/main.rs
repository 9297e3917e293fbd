//! Tap-Reviews main entry point
//!
//! This is the command-line interface for the Tap-Reviews scraper.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tap_reviews::config::{load_config, validate, Config, FailurePolicy};
use tap_reviews::crawler::run_crawl;
use tap_reviews::output::print_summary;
use tap_reviews::url::{parse_base_url, ReviewUrlBuilder};
use tracing_subscriber::EnvFilter;

/// Tap-Reviews: a page-by-page review scraper
///
/// Fetches the review listing of one app page by page, extracts reviews and
/// their comments, and writes one JSON file per page. The crawl stops at the
/// first page without reviews or after the page ceiling.
#[derive(Parser, Debug)]
#[command(name = "tap-reviews")]
#[command(version)]
#[command(about = "A page-by-page review scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// App whose reviews are crawled (overrides the config file)
    #[arg(long)]
    app_id: Option<u64>,

    /// Last page to request (overrides the config file)
    #[arg(long)]
    max_page: Option<u32>,

    /// Sort order token (overrides the config file)
    #[arg(long)]
    order: Option<String>,

    /// Output directory (overrides the config file)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<String>,

    /// What to do when a page fails: stop, skip or abort
    #[arg(long, value_name = "POLICY")]
    on_page_failure: Option<FailurePolicy>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration and first URL without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tap_reviews=info,warn"),
            1 => EnvFilter::new("tap_reviews=debug,info"),
            2 => EnvFilter::new("tap_reviews=trace,debug"),
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

/// Loads the config file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match (&cli.config, cli.app_id) {
        (Some(path), _) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        (None, Some(app_id)) => Config::new(app_id),
        (None, None) => bail!("Either --config or --app-id must be given"),
    };

    if let Some(app_id) = cli.app_id {
        config.crawler.app_id = app_id;
    }
    if let Some(max_page) = cli.max_page {
        config.crawler.max_page = max_page;
    }
    if let Some(order) = &cli.order {
        config.crawler.order = order.clone();
    }
    if let Some(dir) = &cli.out_dir {
        config.output.directory = dir.clone();
    }
    if let Some(policy) = cli.on_page_failure {
        config.crawler.on_page_failure = policy;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let base = parse_base_url(&config.crawler.base_url)?;
    let urls = ReviewUrlBuilder::new(base, config.crawler.app_id, config.crawler.order.clone());

    println!("=== Tap-Reviews Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  App id: {}", config.crawler.app_id);
    println!("  Max page: {}", config.crawler.max_page);
    println!("  Order: {}", config.crawler.order);
    println!("  On page failure: {}", config.crawler.on_page_failure);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling at {}", urls.page_url(1));

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    match run_crawl(config).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
