// src/links/pattern.rs
// =============================================================================
// Literal href="...html" matching with `regex`.
//
// This does not parse HTML. It finds the text href=, a quote, anything but a
// quote ending in ".html", and the closing quote. Unquoted attributes and
// spaces around '=' are not matched.
// =============================================================================

use super::resolve_url;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Constant pattern, known to be valid
    PATTERN.get_or_init(|| Regex::new(r#"href=['"]([^'"]+\.html)['"]"#).unwrap())
}

/// Extracts and resolves every quoted href value ending in ".html"
pub fn extract_pattern_links(html: &str, page_url: &Url) -> Vec<Url> {
    href_pattern()
        // Every non-overlapping match, left to right
        .captures_iter(html)
        // Group 1 is the href value without the quotes
        .filter_map(|caps| caps.get(1))
        // Resolve against the page; skip unparseable or non-http targets
        .filter_map(|href| resolve_url(page_url, href.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_both_quote_styles() {
        let page = Url::parse("https://site.test/base/").unwrap();
        let html = r#"<a href="a.html">a</a><a href='b.html'>b</a>"#;
        let links = extract_pattern_links(html, &page);
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].as_str(), "https://site.test/base/b.html");
    }

    #[test]
    fn test_ignores_unquoted_and_uppercase() {
        let page = Url::parse("https://site.test/").unwrap();
        let html = r#"<a href=a.html>a</a><a HREF="b.html">b</a><a href="c.HTML">c</a>"#;
        assert!(extract_pattern_links(html, &page).is_empty());
    }

    #[test]
    fn test_matches_outside_anchor_tags() {
        // Any element's href counts, not just <a>
        let page = Url::parse("https://site.test/").unwrap();
        let html = r#"<link rel="next" href="next.html">"#;
        let links = extract_pattern_links(html, &page);
        assert_eq!(links[0].as_str(), "https://site.test/next.html");
    }
}
