// HTML fetcher trait: the seam between the network and the pipeline.
//
// The reqwest-backed ArticleFetcher is the real implementation. StaticFetcher
// serves canned markup so the pipeline and web layer can be exercised
// without network access.

use async_trait::async_trait;

use super::client::validate_url;
use crate::error::FetchError;

/// Trait for turning a URL into raw HTML.
#[async_trait]
pub trait HtmlFetcher: Send + Sync {
    /// Fetch the page at `url`. Implementations never retry.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Returns the same markup for every valid URL.
pub struct StaticFetcher {
    pub html: String,
}

impl StaticFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl HtmlFetcher for StaticFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        validate_url(url)?;
        Ok(self.html.clone())
    }
}
