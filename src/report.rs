// src/report.rs
// =============================================================================
// Printing results, either as text for humans or as JSON for scripts.
//
// Text output goes to stdout; progress logging goes to stderr, so
// `html-crawler crawl ... --json > out.json` gives a clean JSON file.
// =============================================================================

use crate::classify::{count_in_range, LetterRange, RangeTally};
use crate::crawl::{CrawlOutcome, FetchFailure};
use anyhow::Result;
use serde::Serialize;
use url::Url;

/// Summary of a full crawl
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    pub scope: String,
    pub total_pages: usize,
    pub tally: RangeTally,
    pub pages: Vec<String>,
    pub visited: usize,
    pub failures: Vec<FetchFailure>,
}

impl CrawlReport {
    pub fn new(seed: &Url, scope: &str, outcome: CrawlOutcome, range: LetterRange) -> Self {
        let tally = count_in_range(&outcome.pages, range);
        Self {
            seed: seed.to_string(),
            scope: scope.to_string(),
            total_pages: outcome.pages.len(),
            tally,
            pages: outcome.pages.into_iter().collect(),
            visited: outcome.visited.len(),
            failures: outcome.failures,
        }
    }
}

/// Summary of the links on a single page
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub url: String,
    pub total_links: usize,
    pub tally: RangeTally,
}

impl ScanReport {
    pub fn new(url: &Url, links: &[Url], range: LetterRange) -> Self {
        Self {
            url: url.to_string(),
            total_links: links.len(),
            tally: count_in_range(links.iter().map(Url::as_str), range),
        }
    }
}

pub fn print_crawl_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!();
    println!("📊 Summary:");
    println!("   🌐 Visited: {}", report.visited);
    println!("   📄 HTML pages: {}", report.total_pages);
    println!("   ❌ Failed: {}", report.failures.len());
    println!("   🔤 Starting with {}: {}", report.tally.range, report.tally.count);
    print_matched(&report.tally);

    if !report.failures.is_empty() {
        println!();
        println!("{:<70} {}", "FAILED URL", "ERROR");
        println!("{}", "=".repeat(100));
        for failure in &report.failures {
            println!("{:<70} {}", truncate(&failure.url, 67), failure.error);
        }
    }

    Ok(())
}

pub fn print_scan_report(report: &ScanReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!();
    println!("📊 Summary:");
    println!("   🔗 HTML links found: {}", report.total_links);
    println!("   🔤 Starting with {}: {}", report.tally.range, report.tally.count);
    print_matched(&report.tally);
    Ok(())
}

fn print_matched(tally: &RangeTally) {
    if tally.matched.is_empty() {
        return;
    }
    println!();
    println!("Matched files:");
    for name in &tally.matched {
        println!("   {}", name);
    }
}

// Truncate long URLs for the table
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
