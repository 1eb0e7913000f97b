pub mod config;
pub mod diff;
pub mod error;
pub mod models;
pub mod notify;
pub mod scrapers;
pub mod store;
pub mod trawl;

pub use error::TrawlError;
pub use models::ListingRecord;
pub use trawl::{RunOutcome, Trawler};
