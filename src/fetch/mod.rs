// Article fetching: the network collaborator in front of the core pipeline.
//
// Nothing in `extract` or `keywords` ever touches a URL; this module turns a
// URL into raw HTML (or a typed FetchError) and stops there.

pub mod client;
pub mod traits;

pub use client::{validate_url, ArticleFetcher, FetchConfig};
pub use traits::{HtmlFetcher, StaticFetcher};
