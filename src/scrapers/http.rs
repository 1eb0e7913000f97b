use crate::scrapers::traits::Fetcher;
use crate::scrapers::types::FetchedPage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Plain GET fetcher over reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Listings source returned status: {}", status);
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        debug!("Downloaded {} bytes of HTML", body.len());

        Ok(FetchedPage {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
