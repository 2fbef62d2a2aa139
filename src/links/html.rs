// src/links/html.rs
// =============================================================================
// This module extracts page links from HTML using the `scraper` crate.
//
// scraper parses the document into a DOM (built on html5ever), so links are
// found the way a browser would see them: attribute quoting, whitespace and
// odd attribute order all work. Links injected by JavaScript are not seen.
// =============================================================================

use super::{is_page_href, resolve_url};
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

// Compiled once; "a[href]" means every <a> tag that has an href attribute
fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    // Constant selector, known to be valid
    SELECTOR.get_or_init(|| Selector::parse("a[href]").unwrap())
}

// Extracts all .html links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   page_url: the URL of the page (for resolving relative links)
//
// Returns: absolute URLs in document order (duplicates kept)
pub fn extract_html_links(html: &str, page_url: &Url) -> Vec<Url> {
    // Parse the HTML into a document
    let document = Html::parse_document(html);

    document
        // Every <a> element with an href attribute
        .select(anchor_selector())
        // Get the raw href value
        .filter_map(|element| element.value().attr("href"))
        // Browsers ignore surrounding whitespace in href values
        .map(str::trim)
        // Keep only links to other HTML pages
        .filter(|href| is_page_href(href))
        // Turn relative hrefs into absolute URLs; skip unparseable ones
        .filter_map(|href| resolve_url(page_url, href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org/learn.html">Rust</a>"#;
        let links = extract_html_links(html, &page("https://example.com/"));
        assert_eq!(links, vec![page("https://www.rust-lang.org/learn.html")]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="sub/child.html">Child</a>"#;
        let links = extract_html_links(html, &page("https://example.org/dir/page.html"));
        assert_eq!(links, vec![page("https://example.org/dir/sub/child.html")]);
    }

    #[test]
    fn test_skips_non_html_targets() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="style.css">CSS</a>
            <link href="other.html">
        "#;
        let links = extract_html_links(html, &page("https://example.com/"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_multiple_links_keep_order() {
        let html = r#"
            <a href="b.html">B</a>
            <a href="/a.html">A</a>
            <a href="../c.html">C</a>
            <a href="b.html">B again</a>
        "#;
        let links = extract_html_links(html, &page("https://example.com/x/y/"));
        let links: Vec<&str> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            links,
            vec![
                "https://example.com/x/y/b.html",
                "https://example.com/a.html",
                "https://example.com/x/c.html",
                "https://example.com/x/y/b.html",
            ]
        );
    }
}
