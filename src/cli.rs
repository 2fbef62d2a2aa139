// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: breadth-first crawl of a site, then tally its HTML pages
// - scan: fetch a single page and tally the HTML links on it
//
// Options shared by both live in FetchArgs and are pulled in with
// #[command(flatten)].
// =============================================================================

use crate::classify::LetterRange;
use crate::config::DEFAULT_USER_AGENT;
use crate::links::LinkExtractor;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "html-crawler",
    version,
    about = "Crawl a website breadth-first and count its HTML pages by first letter",
    long_about = "html-crawler follows .html links from a seed URL, never leaving the given URL prefix, \
                  visits each page once, and reports how many page names start with a letter in a range."
)]
pub struct Cli {
    /// Show debug logging (same as RUST_LOG=html_crawler=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a site starting from a seed URL
    ///
    /// Example: html-crawler crawl https://example.com/docs/ --range O-Y
    Crawl {
        /// Seed URL; the first page fetched
        seed: String,

        /// Only follow links starting with this prefix (default: the seed's directory)
        #[arg(long)]
        scope: Option<String>,

        /// Maximum link hops from the seed (default: unlimited)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Stop after visiting this many pages (default: unlimited)
        #[arg(long)]
        max_pages: Option<usize>,

        /// Number of pages fetched at the same time
        #[arg(long, default_value_t = 1)]
        workers: usize,

        /// Milliseconds to wait between rounds of requests
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,

        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Fetch one page and tally the .html links it contains
    ///
    /// Example: html-crawler scan https://example.com/index.html
    Scan {
        /// Page URL
        url: String,

        #[command(flatten)]
        fetch: FetchArgs,
    },
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Letter range to count, inclusive and case-insensitive
    #[arg(long, default_value = "O-Y")]
    pub range: LetterRange,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// How links are discovered
    #[arg(long, value_enum, default_value_t = LinkExtractor::Html)]
    pub extractor: LinkExtractor,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Do not verify TLS certificates. For test servers with self-signed
    /// certificates only.
    #[arg(long)]
    pub insecure: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::parse_from(["html-crawler", "crawl", "https://site.test/base/"]);
        match cli.command {
            Commands::Crawl { seed, scope, workers, fetch, .. } => {
                assert_eq!(seed, "https://site.test/base/");
                assert_eq!(scope, None);
                assert_eq!(workers, 1);
                assert_eq!(fetch.range, LetterRange::default());
                assert_eq!(fetch.extractor, LinkExtractor::Html);
                assert!(!fetch.insecure);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_scan_with_options() {
        let cli = Cli::parse_from([
            "html-crawler",
            "scan",
            "https://site.test/",
            "--range",
            "a-m",
            "--extractor",
            "pattern",
            "--json",
        ]);
        match cli.command {
            Commands::Scan { fetch, .. } => {
                assert_eq!(fetch.range.to_string(), "A-M");
                assert_eq!(fetch.extractor, LinkExtractor::Pattern);
                assert!(fetch.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_range_rejected() {
        let result = Cli::try_parse_from(["html-crawler", "scan", "https://site.test/", "--range", "Z-A"]);
        assert!(result.is_err());
    }
}
