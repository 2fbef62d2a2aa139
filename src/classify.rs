// src/classify.rs
// =============================================================================
// Tallies pages by the first letter of their file name.
//
// Given a set of URLs and a letter range like O-Y, we:
// 1. Take the last '/'-separated segment of each URL ("Orange.html")
// 2. Skip it if empty (URLs ending in '/')
// 3. Uppercase its first character
// 4. Count it if that character falls inside [low, high]
//
// This is a pure function over finished results: no I/O, no state.
// =============================================================================

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An inclusive character range, e.g. O-Y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterRange {
    pub low: char,
    pub high: char,
}

impl LetterRange {
    pub fn new(low: char, high: char) -> Result<Self, ConfigError> {
        let low = upper(low);
        let high = upper(high);
        if low > high {
            return Err(ConfigError::ReversedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn contains(&self, c: char) -> bool {
        self.low <= c && c <= self.high
    }
}

impl Default for LetterRange {
    fn default() -> Self {
        Self { low: 'O', high: 'Y' }
    }
}

impl fmt::Display for LetterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

// Parses "O-Y" (or "o-y") into a LetterRange
impl FromStr for LetterRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (low, high) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ConfigError::InvalidRange(s.to_string()))?;

        let mut low_chars = low.chars();
        let mut high_chars = high.chars();
        match (low_chars.next(), low_chars.next(), high_chars.next(), high_chars.next()) {
            (Some(l), None, Some(h), None) => LetterRange::new(l, h),
            _ => Err(ConfigError::InvalidRange(s.to_string())),
        }
    }
}

/// Result of counting URLs in a letter range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeTally {
    pub range: LetterRange,
    pub count: usize,
    /// Matching file names, sorted
    pub matched: Vec<String>,
}

/// Counts URLs whose file name starts with a letter inside `range`.
///
/// Works on any iterator of string-like URLs so it can tally both crawl
/// results and the raw link list of a single page.
pub fn count_in_range<I, S>(urls: I, range: LetterRange) -> RangeTally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matched: Vec<String> = urls
        .into_iter()
        .filter_map(|url| {
            let name = file_name(url.as_ref());
            let first = upper(name.chars().next()?);
            range.contains(first).then(|| name.to_string())
        })
        .collect();

    matched.sort();

    RangeTally {
        range,
        count: matched.len(),
        matched,
    }
}

// Last '/'-delimited segment; "" for "https://a.test/dir/"
fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or("")
}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_in_range_mixed_case() {
        let urls = ["a.html", "Orange.html", "yam.html", "Zebra.html", ""];
        let tally = count_in_range(urls, LetterRange::new('O', 'Y').unwrap());
        assert_eq!(tally.count, 2);
        assert_eq!(tally.matched, vec!["Orange.html", "yam.html"]);
    }

    #[test]
    fn test_uses_final_segment_of_full_urls() {
        let urls = [
            "https://site.test/base/P/pear.html",
            "https://site.test/base/Q/apple.html",
            "https://site.test/base/dir/",
        ];
        let tally = count_in_range(urls, LetterRange::default());
        assert_eq!(tally.matched, vec!["pear.html"]);
    }

    #[test]
    fn test_digits_and_symbols_excluded() {
        let urls = ["1.html", "_x.html", "-y.html"];
        let tally = count_in_range(urls, LetterRange::default());
        assert_eq!(tally.count, 0);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let urls = ["o.html", "Y.html"];
        let tally = count_in_range(urls, LetterRange::default());
        assert_eq!(tally.count, 2);
    }

    #[test]
    fn test_parse_range() {
        let range: LetterRange = "o-y".parse().unwrap();
        assert_eq!(range, LetterRange { low: 'O', high: 'Y' });
        assert_eq!(range.to_string(), "O-Y");
    }

    #[test]
    fn test_parse_range_rejects_bad_input() {
        assert!("OY".parse::<LetterRange>().is_err());
        assert!("OO-Y".parse::<LetterRange>().is_err());
        assert!(matches!(
            "Y-O".parse::<LetterRange>(),
            Err(ConfigError::ReversedRange { .. })
        ));
    }
}
