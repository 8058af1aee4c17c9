// Two-stage article text extraction.
//
// Noise elements (scripts, navigation, page chrome) are detached from the
// parsed tree first, so their text can never reach the ranker. Then the first
// <article> container is tried; if it is missing or too thin, every <p> on the
// page is collected instead.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error::ExtractionError;

/// Tags that are page chrome, never article content.
pub const NOISE_TAGS: [&str; 8] = [
    "script", "style", "nav", "footer", "header", "aside", "noscript", "iframe",
];

/// An <article> container must yield more than this many characters to be
/// accepted without falling back to paragraphs.
pub const ARTICLE_MIN_CHARS: usize = 100;

/// Extracted text shorter than this is treated as "no content".
pub const MIN_TEXT_CHARS: usize = 50;

static NOISE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&NOISE_TAGS.join(", ")).expect("noise selector is valid"));
static ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("article selector is valid"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("paragraph selector is valid"));

/// Plain article text produced by [`TextExtractor::extract`].
///
/// Extractor output is always at least `min_chars` characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Wrap text that did not come from the extractor (e.g. piped into `rank`).
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thresholds for the two extraction paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// The <article> path wins only when its text is strictly longer than this.
    pub article_min_chars: usize,
    /// Final text shorter than this fails with [`ExtractionError`].
    pub min_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            article_min_chars: ARTICLE_MIN_CHARS,
            min_chars: MIN_TEXT_CHARS,
        }
    }
}

/// Stateless HTML → article text extractor.
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    pub config: ExtractorConfig,
}

impl TextExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract the article body from raw HTML.
    ///
    /// Malformed markup is parsed best-effort; only a lack of text fails.
    pub fn extract(&self, html: &str) -> Result<ExtractedText, ExtractionError> {
        let mut document = Html::parse_document(html);
        strip_noise(&mut document);

        if let Some(text) = self.article_text(&document) {
            return Ok(ExtractedText(text));
        }

        let text = paragraph_text(&document);
        let chars = text.chars().count();
        if text.is_empty() || chars < self.config.min_chars {
            return Err(ExtractionError::NoContent {
                chars,
                required: self.config.min_chars,
            });
        }

        Ok(ExtractedText(text))
    }

    /// Text of the first <article>, if it clears the article threshold.
    fn article_text(&self, document: &Html) -> Option<String> {
        let article = document.root_element().select(&ARTICLE_SELECTOR).next()?;
        let text = collapse_whitespace(&article.text().collect::<Vec<_>>().join(" "));
        (text.chars().count() > self.config.article_min_chars).then_some(text)
    }
}

/// Detach every noise element from the tree.
///
/// Detached subtrees stay in the node arena, so `Html::select` would still find
/// their descendants. Later lookups go through `root_element()`, which only
/// walks the attached tree.
fn strip_noise(document: &mut Html) {
    let ids: Vec<_> = document.select(&NOISE_SELECTOR).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// All <p> elements, each whitespace-collapsed, empty ones skipped.
fn paragraph_text(document: &Html) -> String {
    document
        .root_element()
        .select(&PARAGRAPH_SELECTOR)
        .map(inline_text)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paragraph content is mostly inline markup, so text nodes are concatenated
/// as-is rather than space-separated ("<b>U</b>.S." stays "U.S.").
fn inline_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
