// Article text extraction: isolating article prose from arbitrary HTML.

pub mod article;

pub use article::{ExtractedText, ExtractorConfig, TextExtractor};
