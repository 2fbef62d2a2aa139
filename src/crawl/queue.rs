// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl loop with a breadth-first approach.
//
// How it works:
// 1. Start with the seed URL in the frontier
// 2. Take the next unvisited URL(s) off the front and mark them visited
// 3. Fetch the page(s); a failure is logged and the loop moves on
// 4. Record the page if its path ends in ".html"
// 5. Extract ".html" links, resolve them against the page URL
// 6. Add in-scope, never-seen links to the back of the frontier
// 7. Repeat until the frontier is empty (or a limit is reached)
//
// With workers > 1, step 2 takes up to `workers` URLs at once and step 3
// fetches them concurrently. Results are still handled in frontier order,
// and only this loop touches the visited set, so no URL is fetched twice.
// =============================================================================

use super::scope::Scope;
use super::state::{CrawlItem, CrawlOutcome, CrawlState};
use crate::config::CrawlConfig;
use crate::fetch::PageFetcher;
use futures::future::join_all;
use url::Url;

// Crawls a website starting from a seed URL
//
// Parameters:
//   seed: the first page to fetch (always fetched, even if out of scope)
//   scope: only links starting with this prefix are followed
//   fetcher: where page bodies come from
//   config: workers, limits, delay and link extraction strategy
//
// Returns: the content pages found, every visited URL, and the failures
pub async fn crawl<F>(seed: &Url, scope: &Scope, fetcher: &F, config: &CrawlConfig) -> CrawlOutcome
where
    F: PageFetcher + ?Sized,
{
    tracing::info!(seed = %seed, scope = %scope.as_str(), workers = config.workers, "starting crawl");

    // Frontier, visited set and results live only for this call
    let mut state = CrawlState::new(seed.clone());

    loop {
        // Take the next batch of unvisited pages (already marked visited)
        let round = next_round(&mut state, config);
        if round.is_empty() {
            break;
        }

        // Fetch the whole round at once; join_all keeps the results in
        // the same order as `round`
        let bodies = join_all(round.iter().map(|item| fetcher.fetch(&item.url))).await;

        // Handle results in frontier order so links are queued exactly
        // as a one-at-a-time crawl would queue them
        for (item, body) in round.into_iter().zip(bodies) {
            match body {
                Ok(html) => process_page(&mut state, scope, config, &item, &html),
                Err(e) => {
                    // Log it, remember it, keep crawling
                    tracing::warn!(url = %item.url, error = %e, "failed to fetch page");
                    state.record_failure(&item.url, &e);
                }
            }
        }

        // Polite crawling: optional pause before the next round
        if !config.delay.is_zero() && state.has_pending() {
            tokio::time::sleep(config.delay).await;
        }
    }

    let outcome = state.into_outcome();
    tracing::info!(
        visited = outcome.visited.len(),
        pages = outcome.pages.len(),
        failures = outcome.failures.len(),
        "crawl finished"
    );
    outcome
}

// Takes up to `workers` unvisited items off the frontier
fn next_round(state: &mut CrawlState, config: &CrawlConfig) -> Vec<CrawlItem> {
    let mut round = Vec::with_capacity(config.workers);

    while round.len() < config.workers {
        // Page limit counts visited URLs, failed ones included
        if let Some(max_pages) = config.max_pages {
            if state.visited_count() >= max_pages {
                break;
            }
        }

        // None means the frontier is empty
        match state.next_unvisited() {
            Some(item) => {
                tracing::info!(depth = item.depth, url = %item.url, "crawling");
                round.push(item);
            }
            None => break,
        }
    }

    round
}

// Records a fetched page and queues the links it contains
fn process_page(state: &mut CrawlState, scope: &Scope, config: &CrawlConfig, item: &CrawlItem, html: &str) {
    // Only ".html" pages count as content pages
    if item.url.path().ends_with(".html") {
        state.record_page(&item.url);
    }

    // At the depth limit we keep the page but don't follow its links
    if let Some(max_depth) = config.max_depth {
        if item.depth >= max_depth {
            return;
        }
    }

    // Links come back absolute, resolved against this page's URL
    for link in config.extractor.extract(html, &item.url) {
        // Out-of-scope links are expected; drop them quietly
        if !scope.contains(&link) {
            tracing::debug!(url = %link, "skipping out-of-scope link");
            continue;
        }
        // Ignored if the URL was already visited or queued
        state.enqueue(link, item.depth + 1);
    }
}
