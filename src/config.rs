// src/config.rs
// =============================================================================
// Settings for one crawl run.
//
// CrawlConfig is built from command-line flags in main.rs, using the
// with_*() builder methods, and then validated before the crawl starts.
// The defaults reproduce a plain sequential crawl: one worker, no delay,
// no depth or page limit, TLS verification on.
// =============================================================================

use crate::error::ConfigError;
use crate::links::LinkExtractor;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; html-crawler/0.1)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Sent as the User-Agent header on every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate and hostname checks (testing only)
    pub accept_invalid_certs: bool,
    /// How many pages are fetched at the same time
    pub workers: usize,
    /// Pause after each round of fetches
    pub delay: Duration,
    /// Link hops from the seed; None = unlimited
    pub max_depth: Option<usize>,
    /// Stop after this many pages have been visited; None = unlimited
    pub max_pages: Option<usize>,
    pub extractor: LinkExtractor,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            workers: 1,
            delay: Duration::ZERO,
            max_depth: None,
            max_pages: None,
            extractor: LinkExtractor::default(),
        }
    }
}

impl CrawlConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_insecure_tls(mut self, accept_invalid_certs: bool) -> Self {
        self.accept_invalid_certs = accept_invalid_certs;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_extractor(mut self, extractor: LinkExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(self)
    }
}
