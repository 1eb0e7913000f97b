use crate::config::Config;
use crate::diff::new_listings;
use crate::error::{TrawlError, TrawlResult};
use crate::models::ListingRecord;
use crate::notify::{compose_summary, Notifier};
use crate::scrapers::{Fetcher, GumtreeExtractor};
use crate::store::SnapshotStore;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a run ended. Every variant is a clean completion for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// New listings were found, stored and announced
    NewListings { found: usize, stored: usize },
    /// Nothing new; snapshot left untouched
    NoChange,
    /// The run aborted and the failure was reported
    Failed { message: String },
}

/// Runs one fetch → extract → diff → persist → notify cycle
pub struct Trawler {
    app_name: String,
    search_url: String,
    fetcher: Arc<dyn Fetcher>,
    extractor: GumtreeExtractor,
    store: SnapshotStore,
    notifier: Arc<dyn Notifier>,
}

impl Trawler {
    pub fn new(config: &Config, fetcher: Arc<dyn Fetcher>, notifier: Arc<dyn Notifier>) -> TrawlResult<Self> {
        Ok(Self {
            app_name: config.app_name.clone(),
            search_url: config.search_url.clone(),
            fetcher,
            extractor: GumtreeExtractor::new(config.extract_options())?,
            store: SnapshotStore::new(&config.store_file),
            notifier,
        })
    }

    /// Execute a single run. Failures are logged and reported through the
    /// notifier exactly once; this never returns an error.
    pub async fn run(&self) -> RunOutcome {
        info!("Begin run: {}", self.app_name);
        info!("============");

        match self.try_run().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = e.to_string();
                error!("{}", message);
                if let Err(e) = self.notifier.report_error(&message).await {
                    warn!("Failed to deliver error notice: {:#}", e);
                }
                RunOutcome::Failed { message }
            }
        }
    }

    async fn try_run(&self) -> TrawlResult<RunOutcome> {
        let (new_records, old_records) = tokio::try_join!(self.fetch_listings(), self.store.load())?;

        info!("Old results: {}, new results: {}", old_records.len(), new_records.len());
        debug!("Old results: {}", to_json(&old_records));
        debug!("New results: {}", to_json(&new_records));

        let diffs = new_listings(&new_records, &old_records);

        if diffs.is_empty() {
            info!("No change in results");
            return Ok(RunOutcome::NoChange);
        }

        info!("New listings found:");
        for listing in &diffs {
            info!("  {} | {} | {} | {}", listing.title, listing.location, listing.price, listing.url);
        }

        // Snapshot is written before any notice goes out
        info!("Writing to file...");
        self.store.save(&new_records).await?;

        info!("Sending completion notice");
        let summary = compose_summary(&diffs);
        if let Err(e) = self.notifier.send_completion_notice(&summary).await {
            warn!("Failed to deliver completion notice: {:#}", e);
        }

        Ok(RunOutcome::NewListings {
            found: diffs.len(),
            stored: new_records.len(),
        })
    }

    async fn fetch_listings(&self) -> TrawlResult<Vec<ListingRecord>> {
        info!("Fetching search results via {}", self.fetcher.source_name());

        let page = self
            .fetcher
            .fetch(&self.search_url)
            .await
            .map_err(|e| TrawlError::Fetch(format!("{:#}", e)))?;

        if !page.is_ok() {
            return Err(TrawlError::Fetch(format!(
                "unexpected status {} from {}",
                page.status, self.search_url
            )));
        }

        self.extractor.extract(&page.body)
    }
}

fn to_json(records: &[ListingRecord]) -> String {
    serde_json::to_string(records).unwrap_or_default()
}
