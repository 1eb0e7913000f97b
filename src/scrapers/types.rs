/// Raw response from the listings source
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// The source counts as reachable only on a plain 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub const DEFAULT_ORIGIN: &str = "https://www.gumtree.com";
pub const DEFAULT_LOCATION_LABEL: &str = "Distance from search location: ";
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Extraction parameters for a search-results page
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Site origin prefixed to relative listing links
    pub origin: String,
    /// Leading label stripped from location text
    pub location_label: String,
    /// Maximum number of valid listings to keep
    pub max_results: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            location_label: DEFAULT_LOCATION_LABEL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
