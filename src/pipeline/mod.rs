// Pipeline orchestration: fetch → extract → rank.

pub mod analyze;

pub use analyze::{Analysis, Analyzer};
