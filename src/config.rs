use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::extract::ExtractorConfig;
use crate::fetch::FetchConfig;
use crate::keywords::{RankerConfig, StopwordSet, TfIdfRanker};

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment is valid. The .env file
/// is loaded automatically at startup via dotenvy. Loaded once before the
/// first request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub fetch: FetchConfig,
    pub extractor: ExtractorConfig,
    pub ranker: RankerConfig,
    /// Words added on top of the default stopword set (WORDCLOUD_EXTRA_STOPWORDS)
    pub extra_stopwords: Vec<String>,
    /// Address the web server binds to
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            extractor: ExtractorConfig::default(),
            ranker: RankerConfig::default(),
            extra_stopwords: Vec::new(),
            bind: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs = parse_var(&lookup, "WORDCLOUD_FETCH_TIMEOUT_SECS")?
            .unwrap_or(defaults.fetch.timeout.as_secs());
        let fetch = FetchConfig {
            user_agent: lookup("WORDCLOUD_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.fetch.user_agent),
            timeout: Duration::from_secs(timeout_secs),
        };

        let extractor = ExtractorConfig {
            article_min_chars: parse_var(&lookup, "WORDCLOUD_ARTICLE_MIN_CHARS")?
                .unwrap_or(defaults.extractor.article_min_chars),
            min_chars: parse_var(&lookup, "WORDCLOUD_MIN_TEXT_CHARS")?
                .unwrap_or(defaults.extractor.min_chars),
        };

        let ranker = RankerConfig {
            top_n: parse_var(&lookup, "WORDCLOUD_TOP_N")?.unwrap_or(defaults.ranker.top_n),
            max_features: parse_var(&lookup, "WORDCLOUD_MAX_FEATURES")?
                .unwrap_or(defaults.ranker.max_features),
            max_df: parse_var(&lookup, "WORDCLOUD_MAX_DF")?.unwrap_or(defaults.ranker.max_df),
            ..defaults.ranker
        };
        if !(0.0..=1.0).contains(&ranker.max_df) {
            anyhow::bail!(
                "WORDCLOUD_MAX_DF must be between 0.0 and 1.0, got {}",
                ranker.max_df
            );
        }

        let extra_stopwords = lookup("WORDCLOUD_EXTRA_STOPWORDS")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            fetch,
            extractor,
            ranker,
            extra_stopwords,
            bind: lookup("WORDCLOUD_BIND").unwrap_or(defaults.bind),
            port: parse_var(&lookup, "WORDCLOUD_PORT")?.unwrap_or(defaults.port),
        })
    }

    /// Build the ranker this configuration describes.
    ///
    /// Without extra stopwords the ranker borrows the shared default set.
    pub fn build_ranker(&self) -> TfIdfRanker {
        if self.extra_stopwords.is_empty() {
            TfIdfRanker::new(self.ranker)
        } else {
            let stopwords = StopwordSet::default_set().extended(&self.extra_stopwords);
            TfIdfRanker::with_stopwords(self.ranker, stopwords)
        }
    }
}

/// Parse an optional variable, naming it in the error when malformed.
fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        _ => Ok(None),
    }
}
