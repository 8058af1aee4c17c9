// Keyword ranker trait: swap-ready abstraction.
//
// The pipeline and web layer only see this trait. The default implementation
// is TF-IDF over pseudo-documents; anything that turns text into a ranked
// keyword list can stand in for it.

use serde::{Deserialize, Serialize};

use crate::error::InputTooShortError;

/// One ranked keyword and its averaged weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    /// Non-negative, rounded to 4 decimal places
    pub weight: f64,
}

/// Keywords sorted by weight descending. Built fresh per request.
pub type KeywordList = Vec<Keyword>;

/// Trait for ranking the keywords of a single cleaned article text.
pub trait KeywordRanker: Send + Sync {
    /// Rank the keywords of `text`.
    ///
    /// An empty list is a valid outcome (everything was filtered out).
    fn rank(&self, text: &str) -> Result<KeywordList, InputTooShortError>;
}
