// src/crawl/state.rs
// =============================================================================
// Everything one crawl keeps track of.
//
// - frontier: FIFO queue of pages still to visit (breadth-first order)
// - discovered: every URL ever put on the frontier, so a URL is queued once
// - visited: URLs already taken off the frontier; inserted before fetching
// - pages: successfully fetched URLs whose path ends in ".html"
// - failures: URLs whose fetch failed, with the reason
//
// A CrawlState is created by crawl(), lives for that one call, and is turned
// into a CrawlOutcome at the end. Nothing is ever removed from these sets.
// =============================================================================

use crate::error::FetchError;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet, VecDeque};
use url::Url;

// A page waiting in the frontier
#[derive(Debug, Clone)]
pub(super) struct CrawlItem {
    pub url: Url,
    pub depth: usize, // link hops from the seed (seed = 0)
}

/// A page that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub url: String,
    pub error: String,
}

/// What a finished crawl found
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlOutcome {
    /// Content pages (".html" URLs fetched successfully), sorted
    pub pages: BTreeSet<String>,
    /// Every URL taken off the frontier, in visit order
    pub visited: Vec<String>,
    pub failures: Vec<FetchFailure>,
}

#[derive(Debug)]
pub(super) struct CrawlState {
    frontier: VecDeque<CrawlItem>,
    discovered: HashSet<String>,
    visited: HashSet<String>,
    visit_order: Vec<String>,
    pages: BTreeSet<String>,
    failures: Vec<FetchFailure>,
}

impl CrawlState {
    pub fn new(seed: Url) -> Self {
        let mut state = Self {
            frontier: VecDeque::new(),
            discovered: HashSet::new(),
            visited: HashSet::new(),
            visit_order: Vec::new(),
            pages: BTreeSet::new(),
            failures: Vec::new(),
        };
        state.discovered.insert(seed.to_string());
        state.frontier.push_back(CrawlItem { url: seed, depth: 0 });
        state
    }

    // Pops frontier items until one has not been visited yet, and marks it
    // visited in the same step. Returns None once the frontier is empty.
    pub fn next_unvisited(&mut self) -> Option<CrawlItem> {
        while let Some(item) = self.frontier.pop_front() {
            if self.visited.insert(item.url.to_string()) {
                self.visit_order.push(item.url.to_string());
                return Some(item);
            }
        }
        None
    }

    // Adds a URL to the back of the frontier unless it was visited or queued
    // before. Returns true if it was added.
    pub fn enqueue(&mut self, url: Url, depth: usize) -> bool {
        let key = url.to_string();
        if self.visited.contains(&key) || !self.discovered.insert(key) {
            return false;
        }
        self.frontier.push_back(CrawlItem { url, depth });
        true
    }

    pub fn record_page(&mut self, url: &Url) {
        self.pages.insert(url.to_string());
    }

    pub fn record_failure(&mut self, url: &Url, error: &FetchError) {
        self.failures.push(FetchFailure {
            url: url.to_string(),
            error: error.to_string(),
        });
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.frontier.is_empty()
    }

    pub fn into_outcome(self) -> CrawlOutcome {
        CrawlOutcome {
            pages: self.pages,
            visited: self.visit_order,
            failures: self.failures,
        }
    }
}
