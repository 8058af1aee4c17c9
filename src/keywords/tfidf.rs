// TF-IDF keyword ranking over pseudo-documents.
//
// The article is cut into segments (see `segment`), each segment is treated as
// a separate document, and every term gets the standard vectorizer weighting:
// raw count × smoothed IDF, with each segment's vector L2-normalized. Terms
// are then averaged across all segments and the top ones returned.
//
// Terms appearing in most segments carry no signal for this article and are
// pruned before weighting.

use std::borrow::Cow;
use std::collections::HashMap;

use super::segment::{Segmentation, CHUNK_CHARS};
use super::stopwords::StopwordSet;
use super::traits::{Keyword, KeywordList, KeywordRanker};
use crate::error::InputTooShortError;

/// Maximum number of keywords returned.
pub const TOP_N: usize = 50;
/// Vocabulary cap, by corpus frequency.
pub const MAX_FEATURES: usize = 500;
/// Terms must appear in at least this many segments.
pub const MIN_DF: usize = 1;
/// Terms in more than this fraction of segments are dropped.
pub const MAX_DF: f64 = 0.85;
/// Texts with fewer whitespace-delimited words are rejected.
pub const MIN_WORDS: usize = 10;
/// Tokens shorter than this are noise.
pub const MIN_TOKEN_LEN: usize = 3;

/// Tunables for [`TfIdfRanker`]. Defaults match the production behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    pub top_n: usize,
    pub max_features: usize,
    pub min_df: usize,
    pub max_df: f64,
    pub min_words: usize,
    pub chunk_chars: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            max_features: MAX_FEATURES,
            min_df: MIN_DF,
            max_df: MAX_DF,
            min_words: MIN_WORDS,
            chunk_chars: CHUNK_CHARS,
        }
    }
}

/// TF-IDF based keyword ranker: the default [`KeywordRanker`].
///
/// Holds only read-only configuration, so one instance can serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct TfIdfRanker {
    config: RankerConfig,
    stopwords: Cow<'static, StopwordSet>,
}

impl Default for TfIdfRanker {
    fn default() -> Self {
        Self::new(RankerConfig::default())
    }
}

impl TfIdfRanker {
    /// A ranker using the process-wide default stopwords.
    pub fn new(config: RankerConfig) -> Self {
        Self {
            config,
            stopwords: Cow::Borrowed(StopwordSet::default_set()),
        }
    }

    /// A ranker using a caller-supplied stopword set.
    pub fn with_stopwords(config: RankerConfig, stopwords: StopwordSet) -> Self {
        Self {
            config,
            stopwords: Cow::Owned(stopwords),
        }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Unigrams and bigrams of one segment, in reading order.
    ///
    /// Stopwords are removed before bigrams are formed, so "state of the art"
    /// yields the bigram "state art".
    fn terms(&self, segment: &str) -> Vec<String> {
        let lower = segment.to_lowercase();
        let tokens: Vec<&str> = tokenize(&lower)
            .filter(|t| !self.stopwords.contains(t))
            .collect();

        let mut terms = Vec::with_capacity(tokens.len() * 2);
        for (i, token) in tokens.iter().enumerate() {
            terms.push((*token).to_string());
            if i > 0 {
                terms.push(format!("{} {}", tokens[i - 1], token));
            }
        }
        terms
    }
}

impl KeywordRanker for TfIdfRanker {
    fn rank(&self, text: &str) -> Result<KeywordList, InputTooShortError> {
        let words = text.split_whitespace().count();
        if words < self.config.min_words {
            return Err(InputTooShortError {
                words,
                required: self.config.min_words,
            });
        }

        let segments = Segmentation::of(text, self.config.chunk_chars).into_segments();
        let corpus = Corpus::build(segments.iter().map(|s| self.terms(s)));
        if corpus.vocab.is_empty() {
            return Ok(Vec::new());
        }

        let retained = corpus.retained(&self.config);
        let averages = corpus.average_weights(&retained);

        let mut ranked: Vec<(usize, f64)> = averages
            .into_iter()
            .enumerate()
            .filter(|(id, _)| retained[*id])
            .map(|(id, w)| (id, round4(w)))
            .filter(|(_, w)| *w > 0.0)
            .collect();

        // Equal weights keep the order in which the terms were first seen.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(self.config.top_n);

        Ok(ranked
            .into_iter()
            .map(|(id, weight)| Keyword {
                word: corpus.vocab[id].term.clone(),
                weight,
            })
            .collect())
    }
}

/// Alphabetic tokens of at least [`MIN_TOKEN_LEN`] ASCII letters.
///
/// A token is a maximal run of word characters (letters, digits, '_'); runs
/// containing anything other than ASCII letters are dropped whole, so "covid19"
/// and "café" produce nothing rather than fragments.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.len() >= MIN_TOKEN_LEN && t.bytes().all(|b| b.is_ascii_alphabetic()))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

struct TermStats {
    term: String,
    /// Number of segments containing the term
    df: usize,
    /// Occurrences across all segments
    total: usize,
}

/// Term counts per segment. Term ids are assigned in first-seen order.
struct Corpus {
    vocab: Vec<TermStats>,
    docs: Vec<HashMap<usize, usize>>,
}

impl Corpus {
    fn build(segments: impl Iterator<Item = Vec<String>>) -> Self {
        let mut ids: HashMap<String, usize> = HashMap::new();
        let mut vocab: Vec<TermStats> = Vec::new();
        let mut docs = Vec::new();

        for terms in segments {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for term in terms {
                let id = *ids.entry(term).or_insert_with_key(|term| {
                    vocab.push(TermStats {
                        term: term.clone(),
                        df: 0,
                        total: 0,
                    });
                    vocab.len() - 1
                });
                *counts.entry(id).or_insert(0) += 1;
            }
            for (&id, &count) in &counts {
                vocab[id].df += 1;
                vocab[id].total += count;
            }
            docs.push(counts);
        }

        Self { vocab, docs }
    }

    /// Mask of terms surviving document-frequency pruning and the vocabulary cap.
    fn retained(&self, config: &RankerConfig) -> Vec<bool> {
        let max_doc_count = config.max_df * self.docs.len() as f64;
        let mut candidates: Vec<usize> = (0..self.vocab.len())
            .filter(|&id| {
                let df = self.vocab[id].df;
                df >= config.min_df && df as f64 <= max_doc_count
            })
            .collect();

        if candidates.len() > config.max_features {
            candidates.sort_by(|&a, &b| {
                self.vocab[b]
                    .total
                    .cmp(&self.vocab[a].total)
                    .then(a.cmp(&b))
            });
            candidates.truncate(config.max_features);
        }

        let mut mask = vec![false; self.vocab.len()];
        for id in candidates {
            mask[id] = true;
        }
        mask
    }

    /// Mean L2-normalized TF-IDF weight of every term across all segments.
    /// Unretained terms come back as 0.
    fn average_weights(&self, retained: &[bool]) -> Vec<f64> {
        let n = self.docs.len() as f64;
        let idf: Vec<f64> = self
            .vocab
            .iter()
            .map(|stats| ((1.0 + n) / (1.0 + stats.df as f64)).ln() + 1.0)
            .collect();

        let mut sums = vec![0.0; self.vocab.len()];
        for counts in &self.docs {
            let row: Vec<(usize, f64)> = counts
                .iter()
                .filter(|(id, _)| retained[**id])
                .map(|(&id, &count)| (id, count as f64 * idf[id]))
                .collect();

            let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (id, w) in row {
                sums[id] += w / norm;
            }
        }

        sums.into_iter().map(|s| s / n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_and_mixed_tokens() {
        let tokens: Vec<&str> = tokenize("an ox ate covid19 hay_bale café rapidly don't").collect();
        assert_eq!(tokens, vec!["ate", "rapidly", "don"]);
    }

    #[test]
    fn test_terms_include_bigrams_after_stopword_removal() {
        let ranker = TfIdfRanker::default();
        let terms = ranker.terms("The volcano erupted over the harbour");
        assert_eq!(
            terms,
            vec![
                "volcano",
                "erupted",
                "volcano erupted",
                "harbour",
                "erupted harbour",
            ]
        );
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.00004), 0.0);
    }

    #[test]
    fn test_max_df_prunes_terms_in_every_segment() {
        let corpus = Corpus::build(
            vec![
                vec!["tariff".to_string(), "steel".to_string()],
                vec!["tariff".to_string(), "wheat".to_string()],
                vec!["tariff".to_string(), "steel".to_string()],
            ]
            .into_iter(),
        );
        let mask = corpus.retained(&RankerConfig::default());
        // tariff: df 3 > 0.85 * 3
        assert_eq!(mask, vec![false, true, true]);
    }

    #[test]
    fn test_max_features_keeps_most_frequent_then_first_seen() {
        let corpus = Corpus::build(
            vec![
                vec!["alpha".to_string(), "beta".to_string(), "beta".to_string()],
                vec!["gamma".to_string(), "delta".to_string()],
                vec!["epsilon".to_string()],
            ]
            .into_iter(),
        );
        let config = RankerConfig {
            max_features: 2,
            ..RankerConfig::default()
        };
        // beta (2 occurrences), then alpha (first seen among the 1-count ties)
        assert_eq!(corpus.retained(&config), vec![true, true, false, false, false]);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let corpus = Corpus::build(
            vec![
                vec!["solar".to_string(), "panel".to_string()],
                vec!["wind".to_string()],
            ]
            .into_iter(),
        );
        let weights = corpus.average_weights(&[true, true, true]);
        // Row 1: two equal weights → each 1/sqrt(2); row 2: single weight → 1.
        let half_root = (0.5f64).sqrt() / 2.0;
        assert!((weights[0] - half_root).abs() < 1e-9);
        assert!((weights[1] - half_root).abs() < 1e-9);
        assert!((weights[2] - 0.5).abs() < 1e-9);
    }
}
