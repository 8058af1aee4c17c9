// Colored terminal output for keyword lists and extracted text.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use crate::extract::ExtractedText;
use crate::keywords::{Keyword, StopwordSet};

/// Display a ranked keyword list as a bar chart.
///
/// Bars are scaled relative to the top keyword, so the first bar is always full.
pub fn display_keywords(keywords: &[Keyword], source: &str) {
    if keywords.is_empty() {
        println!("No keywords survived filtering for {source}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} keywords for {} ===", keywords.len(), source).bold()
    );
    println!();

    let bar_width: usize = 20;
    let top = keywords[0].weight.max(f64::EPSILON);

    for (i, keyword) in keywords.iter().enumerate() {
        let relative = keyword.weight / top;
        let filled = (relative * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if relative >= 0.66 {
            bar.bright_green()
        } else if relative >= 0.33 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<32} {} {:.4}",
            i + 1,
            keyword.word.bold(),
            colored_bar,
            keyword.weight
        );
    }
    println!();
}

/// Display the extracted article text with a length summary.
pub fn display_extracted(text: &ExtractedText, preview_chars: Option<usize>) {
    let words = text.as_str().split_whitespace().count();
    println!(
        "{}",
        format!(
            "=== Extracted text ({} chars, {} words) ===",
            text.char_count(),
            words
        )
        .bold()
    );
    match preview_chars {
        Some(max) => println!("{}", super::truncate_chars(text.as_str(), max)),
        None => println!("{text}"),
    }
}

/// List stopwords alphabetically, a row at a time.
pub fn display_stopwords(set: &StopwordSet) {
    println!("{}", format!("=== {} stopwords ===", set.len()).bold());
    for row in set.sorted().chunks(8) {
        println!("  {}", row.join(", ").dimmed());
    }
}
