// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One GET request per page, browser-like User-Agent
// - Follows up to 5 redirects
// - Non-2xx responses are failures
// - Bodies must be valid UTF-8
// - TLS certificates are verified unless --insecure was given
//
// Rust concepts:
// - async/await: network I/O without blocking the runtime
// - Client is reference-counted inside, so cloning it is cheap
// =============================================================================

use super::PageFetcher;
use crate::config::{CrawlConfig, MAX_REDIRECTS};
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the crawl settings
    //
    // Fails only if the TLS backend cannot be initialized.
    pub fn new(config: &CrawlConfig) -> reqwest::Result<Self> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled (--insecure)");
        }

        // One client for the whole crawl; it pools connections
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        // Send the GET request; transport failures (DNS, TLS, timeout, ...)
        // are sorted into FetchError variants
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        // Anything outside 2xx counts as a failed page
        // (redirects were already followed by the client)
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // Read raw bytes so invalid UTF-8 is an error rather than
        // silently replaced characters
        let body = response.bytes().await.map_err(FetchError::from_reqwest)?;
        Ok(String::from_utf8(body.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher(user_agent: &str) -> HttpFetcher {
        let config = CrawlConfig::default().with_user_agent(user_agent);
        HttpFetcher::new(&config).unwrap()
    }

    fn url(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page.html"))
            .and(header("user-agent", "Mozilla/5.0 test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher("Mozilla/5.0 test")
            .fetch(&url(&server, "/page.html"))
            .await
            .unwrap();
        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let server = MockServer::start().await;

        let err = fetcher("ua")
            .fetch(&url(&server, "/missing.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/binary.html"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
            .mount(&server)
            .await;

        let err = fetcher("ua")
            .fetch(&url(&server, "/binary.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow.html"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = CrawlConfig::default().with_timeout(Duration::from_millis(200));
        let err = HttpFetcher::new(&config)
            .unwrap()
            .fetch(&url(&server, "/slow.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_redirect_loop_is_too_many_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop.html"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop.html"))
            .mount(&server)
            .await;

        let err = fetcher("ua")
            .fetch(&url(&server, "/loop.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::TooManyRedirects), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let target = Url::parse(&format!("http://{}/index.html", addr)).unwrap();
        let err = fetcher("ua").fetch(&target).await.unwrap_err();
        assert!(matches!(err, FetchError::Connect(_)), "got {:?}", err);
    }
}
