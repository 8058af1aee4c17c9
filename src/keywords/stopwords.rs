// Stopword configuration: general English stopwords plus news boilerplate.
//
// The default set is built once per process and only ever read afterwards.
// Callers that need a different set build one with `extended` and hand it to
// a ranker explicitly; the shared default is never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// Filler words and site chrome that show up in nearly every news page.
pub const NEWS_STOPWORDS: &[&str] = &[
    // Common filler words in news articles
    "said", "also", "would", "could", "one", "two", "new", "like", "get", "even", "much", "many",
    "may", "us", "say", "says", "according", "told", "year", "years",
    // News site / webpage boilerplate
    "photo", "photos", "image", "images", "copyright", "newsletter", "subscribe", "sign",
    "signing", "log", "login", "advertisement", "cookie", "cookies", "privacy", "policy",
    "associated", "press", "reuters", "getty",
];

static DEFAULT_SET: LazyLock<StopwordSet> = LazyLock::new(StopwordSet::build_default);

/// An immutable set of lowercase words excluded from keyword scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words (lowercased, blanks dropped).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The process-wide default: English stopwords plus [`NEWS_STOPWORDS`].
    pub fn default_set() -> &'static StopwordSet {
        &DEFAULT_SET
    }

    fn build_default() -> Self {
        let english: Vec<String> = get(LANGUAGE::English);
        Self::from_words(
            english
                .iter()
                .map(String::as_str)
                .chain(NEWS_STOPWORDS.iter().copied()),
        )
    }

    /// A new set containing these words plus `extra`. `self` is untouched.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(Self::from_words(extra).words);
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::default_set().clone()
    }
}
