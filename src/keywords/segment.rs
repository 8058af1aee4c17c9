// Segmentation: turning one article into many pseudo-documents.
//
// IDF means nothing with a single document, so the article is split into
// sentences. Text without sentence punctuation is cut into fixed-size windows
// instead. The choice is made once per request from a count check.

/// Default window size, in characters, for the chunking fallback.
pub const CHUNK_CHARS: usize = 200;

/// Fewer sentences than this switches to fixed-size chunks.
pub const MIN_SENTENCES: usize = 2;

/// How the text was cut into pseudo-documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segmentation {
    /// Split on sentence terminators.
    Sentences(Vec<String>),
    /// Contiguous fixed-size character windows.
    Chunks(Vec<String>),
}

impl Segmentation {
    /// Split `text` into sentences, or into `chunk_chars` windows when fewer
    /// than two sentences come out.
    pub fn of(text: &str, chunk_chars: usize) -> Self {
        let sentences = split_sentences(text);
        if sentences.len() >= MIN_SENTENCES {
            Segmentation::Sentences(sentences)
        } else {
            Segmentation::Chunks(chunk(text, chunk_chars))
        }
    }

    pub fn segments(&self) -> &[String] {
        match self {
            Segmentation::Sentences(s) | Segmentation::Chunks(s) => s,
        }
    }

    pub fn into_segments(self) -> Vec<String> {
        match self {
            Segmentation::Sentences(s) | Segmentation::Chunks(s) => s,
        }
    }

    pub fn is_chunked(&self) -> bool {
        matches!(self, Segmentation::Chunks(_))
    }
}

/// '!' and '?' count as '.'; pieces are trimmed and empties dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Contiguous windows of `size` characters. Never splits a code point.
pub fn chunk(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|window| window.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_normalizes_terminators() {
        let parts = split_sentences("Is it real? Yes! It is.  . Done");
        assert_eq!(parts, vec!["Is it real", "Yes", "It is", "Done"]);
    }

    #[test]
    fn test_single_sentence_falls_back_to_chunks() {
        let text = "a".repeat(450);
        let seg = Segmentation::of(&text, 200);
        assert!(seg.is_chunked());
        let lens: Vec<usize> = seg.segments().iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![200, 200, 50]);
    }

    #[test]
    fn test_chunk_respects_multibyte_chars() {
        let text = "é".repeat(5);
        let parts = chunk(&text, 2);
        assert_eq!(parts, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_two_sentences_are_kept() {
        let seg = Segmentation::of("First part. Second part", 200);
        assert_eq!(
            seg,
            Segmentation::Sentences(vec!["First part".to_string(), "Second part".to_string()])
        );
    }
}
