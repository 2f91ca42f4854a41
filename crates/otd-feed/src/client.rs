//! HTTP client for the Wikimedia "on this day" feed.
//!
//! One GET per run: `{base_url}/{MM}/{DD}` with a bearer token. No retries,
//! no pagination. Non-2xx responses and malformed bodies are typed errors.

use crate::credentials::Credentials;
use crate::error::{FeedError, FeedResult};
use otd_core::{FeedDate, OnThisDayFeed};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for feed requests. The upstream API has no SLA; a hung
/// request must not hang the run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default feed endpoint (English Wikipedia, all categories).
pub const DEFAULT_BASE_URL: &str =
    "https://api.wikimedia.org/feed/v1/wikipedia/en/onthisday/all";

/// Client for fetching one day's feed.
pub struct FeedClient {
    /// HTTP client.
    client: Client,
    /// Feed base URL, without trailing slash.
    base_url: String,
    /// Resolved bearer token.
    credentials: Credentials,
}

impl FeedClient {
    /// Create a new feed client with the default request timeout.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> FeedResult<Self> {
        Self::with_timeout(base_url, credentials, DEFAULT_TIMEOUT)
    }

    /// Create a new feed client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        credentials: Credentials,
        timeout: Duration,
    ) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// URL for a single day's feed: `{base}/{MM}/{DD}`.
    fn day_url(&self, date: &FeedDate) -> String {
        format!("{}/{}", self.base_url, date.request_path())
    }

    /// Fetch and parse the feed for one day.
    pub async fn fetch(&self, date: &FeedDate) -> FeedResult<OnThisDayFeed> {
        let url = self.day_url(date);
        info!(url = %url, "Fetching on-this-day feed");

        let response = self
            .client
            .get(&url)
            .bearer_auth(self.credentials.bearer_token())
            .send()
            .await
            .map_err(|e| FeedError::HttpClient(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let feed: OnThisDayFeed = response
            .json()
            .await
            .map_err(|e| FeedError::HttpClient(format!("Failed to parse response: {e}")))?;

        let counts = feed.category_counts();
        debug!(
            events = counts.events,
            selected = counts.selected,
            births = counts.births,
            deaths = counts.deaths,
            holidays = counts.holidays,
            "Feed categories received"
        );

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> FeedClient {
        FeedClient::new(base_url, Credentials::new("test-token")).unwrap()
    }

    #[test]
    fn test_day_url_zero_padded() {
        let client = test_client("https://example.org/feed");
        let date = FeedDate::new(3, 7).unwrap();
        assert_eq!(client.day_url(&date), "https://example.org/feed/03/07");
    }

    #[test]
    fn test_day_url_trims_trailing_slash() {
        let client = test_client("https://example.org/feed/");
        let date = FeedDate::new(11, 1).unwrap();
        assert_eq!(client.day_url(&date), "https://example.org/feed/11/01");
    }

    #[tokio::test]
    async fn test_fetch_parses_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/11/01"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "events": [
                    {"year": 1512, "text": "Sistine Chapel ceiling unveiled"},
                    {"year": 1952, "text": "Elizabeth II becomes queen"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let date = FeedDate::new(11, 1).unwrap();
        let feed = client.fetch(&date).await.unwrap();

        assert_eq!(feed.events.len(), 2);
        assert_eq!(feed.events[0].year, 1512);
    }

    #[tokio::test]
    async fn test_fetch_missing_events_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/06/15"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"selected": []})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let date = FeedDate::new(6, 15).unwrap();
        let feed = client.fetch(&date).await.unwrap();

        assert!(feed.events.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let date = FeedDate::new(1, 1).unwrap();
        let err = client.fetch(&date).await.unwrap_err();

        match err {
            FeedError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "events": [{"year": "not a year", "text": "x"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let date = FeedDate::new(1, 1).unwrap();
        assert!(matches!(
            client.fetch(&date).await,
            Err(FeedError::HttpClient(_))
        ));
    }
}
