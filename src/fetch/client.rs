// HTTP client for fetching article HTML.
//
// A thin reqwest wrapper: validate the URL, GET it with a desktop browser
// user agent (many news sites reject unknown clients), and return the body.
// Transport errors and non-success statuses both become FetchError::Network.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::traits::HtmlFetcher;
use crate::error::FetchError;

/// Desktop Chrome user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for [`ArticleFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Check that `url` is a well-formed http(s) URL with a host.
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    let parsed = Url::parse(trimmed).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => Err(FetchError::InvalidUrl(url.to_string())),
    }
}

/// reqwest-backed fetcher used by the CLI and web server.
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HtmlFetcher for ArticleFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let url = validate_url(url)?;

        debug!(url = %url, "Fetching article HTML");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("{url} returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(url = %url, bytes = body.len(), "Fetched article HTML");
        Ok(body)
    }
}
