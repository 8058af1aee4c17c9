// Full analysis: URL or HTML in, ranked keywords out.
//
// The extractor and ranker run synchronously to completion. Only the fetch
// step awaits. Failures are returned as typed AnalysisError values; this layer
// logs them but never retries.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::extract::{ExtractedText, TextExtractor};
use crate::fetch::HtmlFetcher;
use crate::keywords::{KeywordList, KeywordRanker, TfIdfRanker};

/// The result of one analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub text: ExtractedText,
    pub keywords: KeywordList,
}

/// Extractor + ranker pair, shareable across concurrent requests.
#[derive(Clone)]
pub struct Analyzer {
    extractor: TextExtractor,
    ranker: Arc<dyn KeywordRanker>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(TextExtractor::default(), Arc::new(TfIdfRanker::default()))
    }
}

impl Analyzer {
    pub fn new(extractor: TextExtractor, ranker: Arc<dyn KeywordRanker>) -> Self {
        Self { extractor, ranker }
    }

    pub fn extractor(&self) -> &TextExtractor {
        &self.extractor
    }

    pub fn ranker(&self) -> &dyn KeywordRanker {
        self.ranker.as_ref()
    }

    /// Extract article text from `html` and rank its keywords.
    pub fn analyze_html(&self, html: &str) -> Result<Analysis, AnalysisError> {
        let text = self.extractor.extract(html)?;
        let keywords = self.ranker.rank(text.as_str())?;
        Ok(Analysis { text, keywords })
    }

    /// Fetch `url` and analyze the returned page.
    pub async fn analyze_url(
        &self,
        fetcher: &dyn HtmlFetcher,
        url: &str,
    ) -> Result<Analysis, AnalysisError> {
        let html = fetcher.fetch_html(url).await.inspect_err(|e| {
            warn!(url = url, error = %e, "Fetch failed");
        })?;

        let analysis = self.analyze_html(&html).inspect_err(|e| {
            warn!(url = url, error = %e, "Analysis failed");
        })?;

        info!(
            url = url,
            text_chars = analysis.text.char_count(),
            keywords = analysis.keywords.len(),
            top_keyword = analysis.keywords.first().map(|k| k.word.as_str()).unwrap_or(""),
            "Analyzed article"
        );

        Ok(analysis)
    }
}
