pub mod gumtree;
pub mod http;
pub mod traits;
pub mod types;

pub use gumtree::GumtreeExtractor;
pub use http::HttpFetcher;
pub use traits::Fetcher;
pub use types::{ExtractOptions, FetchedPage};
