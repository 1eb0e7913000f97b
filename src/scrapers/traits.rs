use crate::scrapers::types::FetchedPage;
use anyhow::Result;
use async_trait::async_trait;

/// Retrieves a search-results page.
/// Lets the run be driven by a real HTTP client or by a canned page in tests.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`. Only transport-level problems are errors; any status
    /// code comes back in the page.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;

    /// Get the name of the fetcher, for logging
    fn source_name(&self) -> &'static str;
}
