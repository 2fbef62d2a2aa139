// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// FetchError describes why a single page could not be fetched. It never stops
// a crawl: the crawler logs it, records it, and moves on to the next URL.
//
// ConfigError describes invalid user input (bad URL, bad letter range, etc.)
// and is reported once at startup.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error and Display
// - #[from]: automatic conversion so `?` works on the wrapped error type
// =============================================================================

use thiserror::Error;

/// Why fetching one page failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Could not resolve hostname
    #[error("could not resolve hostname: {0}")]
    Dns(String),

    /// SSL/TLS handshake or certificate error
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connection refused, reset, unreachable host
    #[error("connection failed: {0}")]
    Connect(String),

    /// Redirect loop or redirect limit exceeded
    #[error("too many redirects")]
    TooManyRedirects,

    /// Server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// Body is not valid UTF-8
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Any other transport error
    #[error("request failed: {0}")]
    Request(String),
}

impl FetchError {
    // Sorts a reqwest error into one of our variants
    //
    // reqwest exposes a few is_*() predicates; DNS and TLS failures only
    // show up in the error text, so those are matched on the message.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        let message = error.to_string();
        let detail = full_chain(&error);
        let lowered = detail.to_lowercase();

        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else if lowered.contains("certificate") || lowered.contains("tls") || lowered.contains("ssl") {
            FetchError::Tls(message)
        } else if error.is_connect() {
            if lowered.contains("dns") || lowered.contains("resolve") {
                FetchError::Dns(message)
            } else {
                FetchError::Connect(message)
            }
        } else {
            FetchError::Request(message)
        }
    }
}

// Joins an error and all of its sources into one string
fn full_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

/// Invalid user-supplied configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid letter range '{0}': expected two characters like O-Y")]
    InvalidRange(String),

    #[error("letter range '{low}-{high}' is reversed")]
    ReversedRange { low: char, high: char },

    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_utf8() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let fetch_err: FetchError = err.into();
        assert!(matches!(fetch_err, FetchError::Decode(_)));
        assert!(fetch_err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
    }
}
