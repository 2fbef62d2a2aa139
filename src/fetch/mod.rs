// src/fetch/mod.rs
// =============================================================================
// This module fetches page bodies.
//
// The crawler only talks to the PageFetcher trait, so tests can swap the real
// HTTP client for an in-memory site.
//
// Submodules:
// - http: the reqwest-backed fetcher used by the CLI
// =============================================================================

mod http;

use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

pub use http::HttpFetcher;

/// Something that can turn a URL into page text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page. Exactly one attempt, no retries.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}
