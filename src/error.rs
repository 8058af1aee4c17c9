// Typed failures for the analysis pipeline.
//
// Every failure is scoped to a single request. The core hands the caller one
// of these kinds and the caller decides presentation (CLI message, HTTP status).

use thiserror::Error;

/// Failures raised by the fetcher before the core ever sees any markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The URL is empty, unparseable, or not http(s).
    #[error("Invalid URL: '{0}'. Must start with http:// or https://")]
    InvalidUrl(String),

    /// Transport failure or a non-success status from the remote server.
    #[error("Failed to fetch URL: {0}")]
    Network(String),
}

/// The markup held no article container or paragraphs with enough text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Could not extract meaningful text from the page ({chars} chars, need {required})")]
    NoContent { chars: usize, required: usize },
}

/// The cleaned text has too few words to rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Text is too short for meaningful keyword extraction ({words} words, need {required})")]
pub struct InputTooShortError {
    pub words: usize,
    pub required: usize,
}

/// Any failure of a full URL/HTML → keywords run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    InputTooShort(#[from] InputTooShortError),
}
