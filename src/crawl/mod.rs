// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Scope restriction by URL prefix (never leaves the target site)
// - Each URL is fetched at most once, even when many pages link to it
// - One failed page never stops the crawl
// - Optional depth/page limits, politeness delay and concurrent workers
//
// Submodules:
// - state: frontier, visited set and results for one crawl
// - scope: the URL prefix filter
// - queue: the crawl loop itself
// =============================================================================

mod queue;
mod scope;
mod state;

pub use queue::crawl;
pub use scope::Scope;
pub use state::{CrawlOutcome, FetchFailure};
