// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Build the crawl settings and the HTTP fetcher
// 4. Dispatch to the crawl or scan handler and print the report
// 5. Exit with proper code (0 = success, 2 = error)
//
// A page that fails to load is not an error here: the crawl logs it,
// keeps going, and lists it in the report.
// =============================================================================

mod classify;
mod cli;
mod config;
mod crawl;
mod error;
mod fetch;
mod links;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, FetchArgs};
use config::CrawlConfig;
use crawl::Scope;
use error::ConfigError;
use fetch::{HttpFetcher, PageFetcher};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries the report.
// RUST_LOG overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "html_crawler=debug" } else { "html_crawler=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl {
            seed,
            scope,
            max_depth,
            max_pages,
            workers,
            delay_ms,
            fetch,
        } => {
            let config = fetch_config(&fetch)
                .with_max_depth(max_depth)
                .with_max_pages(max_pages)
                .with_workers(workers)
                .with_delay(Duration::from_millis(delay_ms))
                .validate()?;
            handle_crawl(&seed, scope, &fetch, &config).await
        }
        Commands::Scan { url, fetch } => {
            let config = fetch_config(&fetch).validate()?;
            handle_scan(&url, &fetch, &config).await
        }
    }
}

// Settings shared by both subcommands
fn fetch_config(args: &FetchArgs) -> CrawlConfig {
    CrawlConfig::default()
        .with_user_agent(args.user_agent.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_insecure_tls(args.insecure)
        .with_extractor(args.extractor)
}

fn parse_url(input: &str) -> Result<Url, ConfigError> {
    Url::parse(input).map_err(|source| ConfigError::InvalidUrl {
        input: input.to_string(),
        source,
    })
}

// Handles the 'crawl' subcommand
async fn handle_crawl(seed: &str, scope: Option<String>, args: &FetchArgs, config: &CrawlConfig) -> Result<i32> {
    let seed = parse_url(seed)?;
    let scope = match scope {
        Some(prefix) => Scope::new(prefix),
        None => Scope::from_seed(&seed),
    };

    let fetcher = HttpFetcher::new(config).context("failed to create HTTP client")?;
    let outcome = crawl::crawl(&seed, &scope, &fetcher, config).await;

    let report = report::CrawlReport::new(&seed, scope.as_str(), outcome, args.range);
    report::print_crawl_report(&report, args.json)?;
    Ok(0)
}

// Handles the 'scan' subcommand
async fn handle_scan(url: &str, args: &FetchArgs, config: &CrawlConfig) -> Result<i32> {
    let url = parse_url(url)?;
    let fetcher = HttpFetcher::new(config).context("failed to create HTTP client")?;

    tracing::info!(url = %url, "scanning page");
    let html = fetcher
        .fetch(&url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    let links = config.extractor.extract(&html, &url);
    let report = report::ScanReport::new(&url, &links, args.range);
    report::print_scan_report(&report, args.json)?;
    Ok(0)
}
