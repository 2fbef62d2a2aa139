// src/links/mod.rs
// =============================================================================
// This module discovers links to other HTML pages.
//
// Submodules:
// - html: walks <a href> elements with a real HTML parser (scraper)
// - pattern: matches the literal href="....html" attribute text (regex)
//
// Both strategies keep only href values ending in ".html" (case-sensitive)
// and resolve them against the URL of the page they were found on.
// =============================================================================

mod html;
mod pattern;

use clap::ValueEnum;
use serde::Serialize;
use url::Url;

/// Which link discovery strategy the crawler uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkExtractor {
    /// Parse the document and enumerate anchor tags
    #[default]
    Html,
    /// Match href="...html" in the raw text
    Pattern,
}

impl LinkExtractor {
    /// Returns absolute URLs of every .html link on the page, in document order
    pub fn extract(&self, html: &str, page_url: &Url) -> Vec<Url> {
        match self {
            LinkExtractor::Html => html::extract_html_links(html, page_url),
            LinkExtractor::Pattern => pattern::extract_pattern_links(html, page_url),
        }
    }
}

// Only hrefs whose literal value ends in ".html" count as page links
fn is_page_href(href: &str) -> bool {
    href.ends_with(".html")
}

// Resolves a possibly-relative href against the page it appeared on
//
// Examples (page = https://example.org/dir/page.html):
//   "sub/child.html"             -> https://example.org/dir/sub/child.html
//   "/top.html"                  -> https://example.org/top.html
//   "https://other.test/x.html"  -> https://other.test/x.html
//   "mailto:x.html"              -> None (not http/https)
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    // join() handles both cases: absolute hrefs replace the base,
    // relative ones are resolved against it
    let url = base.join(href).ok()?;

    // Only HTTP/HTTPS pages can be crawled
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}
