// wordcloud: topic keywords for news articles
//
// This is the library root. Data flows fetch → extract → keywords; the
// pipeline module composes them and the web module serves them over HTTP.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod keywords;
pub mod output;
pub mod pipeline;

#[cfg(feature = "web")]
pub mod web;
