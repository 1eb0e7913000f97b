use anyhow::{Context, Result};
use clap::Parser;
use gumtree_trawler::config::{Args, Config};
use gumtree_trawler::notify::{EmailNotifier, LogNotifier, Notifier};
use gumtree_trawler::scrapers::{Fetcher, HttpFetcher};
use gumtree_trawler::{RunOutcome, Trawler};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_args(Args::parse())?;

    // Initialize logging: console plus a daily-rotated file under log_dir
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(&config.app_name)
        .filename_suffix("log")
        .build(&config.log_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_dir.display()))?;
    let (file_writer, _log_guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(config.request_timeout)?);

    let notifier: Arc<dyn Notifier> = match &config.email {
        Some(email) => Arc::new(EmailNotifier::new(&config.app_name, email)?),
        None => {
            warn!("SMTP settings incomplete, notices will only be logged");
            Arc::new(LogNotifier::new(&config.app_name))
        }
    };

    let trawler = Trawler::new(&config, fetcher, notifier)?;

    match trawler.run().await {
        RunOutcome::NewListings { found, stored } => {
            info!("✅ Found {} new listings, {} stored in {}", found, stored, config.store_file.display())
        }
        RunOutcome::NoChange => info!("Finished, nothing new"),
        RunOutcome::Failed { message } => info!("Finished with reported error: {}", message),
    }

    Ok(())
}
