// Output formatting: terminal display and JSON rendering.

pub mod terminal;

use serde::Serialize;

use crate::keywords::Keyword;

/// The `{ "words": [...] }` document returned by the web API and `--json`.
#[derive(Debug, Serialize)]
pub struct WordCloud<'a> {
    pub words: &'a [Keyword],
}

/// Render keywords as pretty-printed `{ "words": [...] }` JSON.
pub fn keywords_json(keywords: &[Keyword]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&WordCloud { words: keywords })
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_keywords_json_shape() {
        let keywords = vec![Keyword {
            word: "economy".to_string(),
            weight: 0.3691,
        }];
        let value: serde_json::Value =
            serde_json::from_str(&keywords_json(&keywords).unwrap()).unwrap();
        assert_eq!(value["words"][0]["word"], "economy");
        assert_eq!(value["words"][0]["weight"], 0.3691);
    }
}
