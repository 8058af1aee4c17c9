// Unit tests for article text extraction.
//
// Covers the <article> path, the paragraph fallback, noise removal, the
// two thresholds, and malformed markup. Pure functions, no network.

use wordcloud::error::ExtractionError;
use wordcloud::extract::{ExtractorConfig, TextExtractor};

const LONG_SENTENCE: &str = "Central bank officials signalled on Tuesday that interest rates \
    would stay on hold while inflation continues to cool across the region.";

fn extract(html: &str) -> Result<String, ExtractionError> {
    TextExtractor::default()
        .extract(html)
        .map(|t| t.into_inner())
}

// ============================================================
// <article> path
// ============================================================

#[test]
fn article_container_is_preferred() {
    let html = format!(
        "<html><body>\
         <p>Sidebar teaser paragraph that is long enough to matter on its own here.</p>\
         <article><h1>Rates on hold</h1><p>{LONG_SENTENCE}</p></article>\
         </body></html>"
    );
    let text = extract(&html).unwrap();
    assert_eq!(text, format!("Rates on hold {LONG_SENTENCE}"));
    assert!(!text.contains("Sidebar"));
}

#[test]
fn article_text_is_space_joined_and_trimmed() {
    let html = format!(
        "<article>\n   <h2>  Headline  </h2>\n\n<div>\n{LONG_SENTENCE}\n</div>   </article>"
    );
    let text = extract(&html).unwrap();
    assert_eq!(text, format!("Headline {LONG_SENTENCE}"));
    assert!(!text.contains("  "));
    assert_eq!(text, text.trim());
}

#[test]
fn noise_inside_article_is_removed() {
    let html = format!(
        "<article><header>Share this story</header>\
         <script>var tracking = 1;</script>\
         <p>{LONG_SENTENCE}</p>\
         <aside>Related: celebrity gossip</aside>\
         <footer>Copyright notice</footer></article>"
    );
    let text = extract(&html).unwrap();
    assert_eq!(text, LONG_SENTENCE.split_whitespace().collect::<Vec<_>>().join(" "));
}

#[test]
fn first_article_wins_when_several_exist() {
    let html = format!(
        "<article><p>{LONG_SENTENCE}</p></article>\
         <article><p>Second article body that should never be returned by the extractor.</p></article>"
    );
    let text = extract(&html).unwrap();
    assert!(!text.contains("Second article"));
}

#[test]
fn short_article_falls_back_to_paragraphs() {
    // The article holds exactly 100 chars: not strictly greater, so fall back.
    let hundred = "x".repeat(100);
    let html = format!(
        "<article>{hundred}</article>\
         <div><p>First paragraph outside the article.</p><p>Second paragraph here.</p></div>"
    );
    let text = extract(&html).unwrap();
    assert_eq!(
        text,
        "First paragraph outside the article. Second paragraph here."
    );
}

// ============================================================
// Paragraph fallback
// ============================================================

#[test]
fn paragraphs_are_joined_without_article() {
    let html = "<html><body><div>\
        <p>The storm made landfall overnight.</p>\
        <p></p>\
        <p>  Thousands   were evacuated from coastal towns.  </p>\
        </div></body></html>";
    let text = extract(html).unwrap();
    assert_eq!(
        text,
        "The storm made landfall overnight. Thousands were evacuated from coastal towns."
    );
}

#[test]
fn inline_markup_does_not_split_words() {
    let html = "<p>Shares in <b>Acme</b> rose <em>sharply</em> after the <a href='#'>U</a>.S. ruling was announced today.</p>";
    let text = extract(html).unwrap();
    assert_eq!(
        text,
        "Shares in Acme rose sharply after the U.S. ruling was announced today."
    );
}

#[test]
fn nav_and_footer_paragraphs_never_leak() {
    let html = "<nav><p>Home News Sport Weather Subscribe to our newsletter today</p></nav>\
        <p>Engineers finished the bridge two months ahead of the original schedule.</p>\
        <footer><p>All rights reserved by the publisher of this fine website.</p></footer>";
    let text = extract(html).unwrap();
    assert_eq!(
        text,
        "Engineers finished the bridge two months ahead of the original schedule."
    );
}

#[test]
fn article_inside_aside_or_header_is_ignored() {
    let body = "Engineers finished the bridge two months ahead of the original schedule.";
    for chrome in ["aside", "header"] {
        let html = format!(
            "<{chrome}><article><p>Related story: a celebrity chef opened a new restaurant \
             downtown and the queue stretched around the block all weekend long.</p>\
             </article></{chrome}><p>{body}</p>"
        );
        let text = extract(&html).unwrap();
        assert_eq!(text, body, "article inside <{chrome}> leaked");
    }
}

#[test]
fn footer_paragraph_after_content_never_leaks() {
    let html = "<p>Engineers finished the bridge two months ahead of the original schedule.</p>\
        <footer><p>Subscribe to our newsletter for cookies privacy policy and more.</p></footer>";
    let text = extract(html).unwrap();
    assert!(!text.contains("Subscribe"), "{text}");
}

// ============================================================
// Failures
// ============================================================

#[test]
fn only_script_and_nav_fails() {
    let html = "<html><head><script>console.log('a very long script body that is not prose');</script></head>\
        <body><nav>Home | World | Business | Technology | Science | Health | Sport</nav></body></html>";
    assert!(matches!(
        extract(html),
        Err(ExtractionError::NoContent { chars: 0, .. })
    ));
}

#[test]
fn short_paragraphs_fail() {
    let err = extract("<p>Too short.</p><p>Still short.</p>").unwrap_err();
    assert_eq!(
        err,
        ExtractionError::NoContent {
            chars: 23,
            required: 50
        }
    );
}

#[test]
fn empty_markup_fails() {
    assert!(extract("").is_err());
}

#[test]
fn exactly_fifty_chars_succeeds() {
    let fifty = "a".repeat(50);
    let text = extract(&format!("<p>{fifty}</p>")).unwrap();
    assert_eq!(text.chars().count(), 50);
}

#[test]
fn thresholds_are_configurable() {
    let extractor = TextExtractor::new(ExtractorConfig {
        article_min_chars: 10,
        min_chars: 5,
    });
    let text = extractor
        .extract("<article>Short but enough.</article><p>other</p>")
        .unwrap();
    assert_eq!(text.as_str(), "Short but enough.");

    let text = extractor.extract("<p>Tiny</p><p>bits</p>").unwrap();
    assert_eq!(text.as_str(), "Tiny bits");
}

// ============================================================
// Malformed markup
// ============================================================

#[test]
fn malformed_markup_is_tolerated() {
    let html = "<html><body><p>Unclosed paragraph about the harvest festival in the valley\
        <p>Another one with <b>broken <i>nesting</b></i> that still has plenty of words<div></span>";
    let text = extract(html).unwrap();
    assert!(text.starts_with("Unclosed paragraph about the harvest festival"));
    assert!(text.contains("broken nesting"));
}

#[test]
fn multibyte_text_counts_characters() {
    // 30 two-byte chars = 60 bytes but only 30 chars, so too short.
    let html = format!("<p>{}</p>", "é".repeat(30));
    assert!(matches!(
        extract(&html),
        Err(ExtractionError::NoContent { chars: 30, .. })
    ));
}
