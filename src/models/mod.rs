use serde::{Deserialize, Serialize};

/// One classified ad as it appears on a search-results page.
///
/// Field order is the on-disk order of the snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Display price, kept verbatim (no numeric parsing)
    pub price: String,
    pub title: String,
    pub location: String,
    /// Absolute listing URL; doubles as the record's identity
    pub url: String,
}

impl ListingRecord {
    /// Key used to match listings across runs.
    pub fn identity(&self) -> &str {
        &self.url
    }
}

/// All listings known as of the last successful run.
pub type Snapshot = Vec<ListingRecord>;
