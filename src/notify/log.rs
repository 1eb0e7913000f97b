use super::Notifier;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

/// Notifier used when no mail transport is configured
pub struct LogNotifier {
    app_name: String,
}

impl LogNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_completion_notice(&self, summary: &str) -> Result<()> {
        info!(app = %self.app_name, "Completion notice: {}", summary);
        Ok(())
    }

    async fn report_error(&self, message: &str) -> Result<()> {
        error!(app = %self.app_name, "Error notice: {}", message);
        Ok(())
    }
}
