// Keyword ranking: TF-IDF over sentence-like segments of a single article.

pub mod segment;
pub mod stopwords;
pub mod tfidf;
pub mod traits;

pub use stopwords::StopwordSet;
pub use tfidf::{RankerConfig, TfIdfRanker};
pub use traits::{Keyword, KeywordList, KeywordRanker};
