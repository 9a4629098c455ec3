//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch page content under the concurrency gate
//! - Error classification
//!
//! A failed fetch is never an error for the caller: it is logged and
//! reported as empty content.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::crawler::gate::ConcurrencyGate;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with something other than 200 OK
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Request timed out
    Timeout,

    /// Network error (connection refused, DNS, TLS, body read, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Converts the outcome into page content, empty for every failure
    pub fn into_content(self) -> String {
        match self {
            Self::Success { body, .. } => body,
            _ => String::new(),
        }
    }

    /// Returns true if the fetch produced a page
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler settings (request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(crawler.request_timeout_secs);

    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | Success |
/// | Any other status | HttpError |
/// | Timeout | Timeout |
/// | Connection/transport/body error | NetworkError |
///
/// Does not touch the concurrency gate; see [`Fetcher::fetch`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    tracing::info!(status = status.as_u16(), "Response received");

    if status != StatusCode::OK {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(e),
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    if e.is_timeout() {
        FetchResult::Timeout
    } else if e.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", e),
        }
    } else {
        FetchResult::NetworkError {
            error: e.to_string(),
        }
    }
}

/// Performs single page retrievals under a concurrency gate
///
/// Cloning is cheap; clones share the HTTP connection pool and the gate.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    gate: ConcurrencyGate,
}

impl Fetcher {
    pub fn new(client: Client, gate: ConcurrencyGate) -> Self {
        Self { client, gate }
    }

    /// Returns the gate this fetcher admits requests through
    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    /// Fetches a page, returning its content or an empty string on failure
    ///
    /// A gate slot is held for the duration of the request and released on
    /// every exit path.
    pub async fn fetch(&self, url: &str) -> String {
        let _permit = match self.gate.acquire().await {
            Ok(permit) => permit,
            Err(e) => {
                tracing::error!("Concurrency gate unavailable for {}: {}", url, e);
                return String::new();
            }
        };

        let result = fetch_url(&self.client, url).await;
        match &result {
            FetchResult::Success { .. } => {}
            FetchResult::HttpError { status_code } => {
                tracing::error!("Failed to get {}: HTTP {}", url, status_code);
            }
            FetchResult::Timeout => {
                tracing::error!("Failed to get {}: request timed out", url);
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Exception occurred while getting {}: {}", url, error);
            }
        }

        result.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_fetcher(capacity: usize) -> Fetcher {
        let crawler = CrawlerConfig {
            request_timeout_secs: 2,
            ..CrawlerConfig::default()
        };
        let client = build_http_client(&UserAgentConfig::default(), &crawler).unwrap();
        Fetcher::new(client, ConcurrencyGate::new(capacity))
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), &CrawlerConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_into_content() {
        let ok = FetchResult::Success {
            status_code: 200,
            body: "<html></html>".to_string(),
        };
        assert!(ok.is_success());
        assert_eq!(ok.into_content(), "<html></html>");

        assert_eq!(FetchResult::HttpError { status_code: 500 }.into_content(), "");
        assert_eq!(FetchResult::Timeout.into_content(), "");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/x\">x</a>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = test_fetcher(1);
        let content = fetcher.fetch(&format!("{}/", server.uri())).await;

        assert_eq!(content, "<a href=\"/x\">x</a>");
        assert_eq!(fetcher.gate().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<a href=\"/x\">x</a>"))
            .mount(&server)
            .await;

        let fetcher = test_fetcher(1);
        let content = fetcher.fetch(&format!("{}/", server.uri())).await;

        assert_eq!(content, "");
        assert_eq!(fetcher.gate().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_fetch_non_ok_success_status_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(203).set_body_string("partial"))
            .mount(&server)
            .await;

        let result = fetch_url(&test_fetcher(1).client, &format!("{}/", server.uri())).await;
        assert!(matches!(result, FetchResult::HttpError { status_code: 203 }));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = fetch_url(&test_fetcher(1).client, &format!("{}/missing", server.uri())).await;
        assert!(matches!(result, FetchResult::HttpError { status_code: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let fetcher = test_fetcher(1);
        let result = fetch_url(&fetcher.client, &format!("{}/", server.uri())).await;
        assert!(matches!(result, FetchResult::Timeout));

        let content = fetcher.fetch(&format!("{}/", server.uri())).await;
        assert_eq!(content, "");
        assert_eq!(fetcher.gate().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_empty() {
        // Grab a free port, then close the listener so nothing answers on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let fetcher = test_fetcher(1);
        let url = format!("http://127.0.0.1:{}/", port);

        let result = fetch_url(&fetcher.client, &url).await;
        assert!(matches!(result, FetchResult::NetworkError { .. }));
        assert_eq!(fetcher.fetch(&url).await, "");
    }

    #[tokio::test]
    async fn test_fetch_unparseable_address_is_empty() {
        let fetcher = test_fetcher(1);
        assert_eq!(fetcher.fetch("http://").await, "");
        assert_eq!(fetcher.gate().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_user_agent_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::header(
                "user-agent",
                UserAgentConfig::default().header_value().as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let content = test_fetcher(1).fetch(&format!("{}/", server.uri())).await;
        assert_eq!(content, "ok");
    }
}
