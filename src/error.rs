//! Typed errors for a single trawl run.
//!
//! Each variant renders as one line; that line is what gets reported
//! through the error notifier.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrawlError {
    /// Transport failure or a non-200 response from the listings source
    #[error("error contacting listings source: {0}")]
    Fetch(String),

    /// The fetched body could not be parsed as a document at all
    #[error("error extracting listings: {0}")]
    Extraction(String),

    /// Snapshot file exists but could not be read
    #[error("error loading old results from {}: {source}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but is not a valid listing array
    #[error("old results file {} is corrupt: {source}", .path.display())]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// New snapshot could not be written
    #[error("error saving results to {}: {reason}", .path.display())]
    Persist { path: PathBuf, reason: String },
}

pub type TrawlResult<T> = std::result::Result<T, TrawlError>;
