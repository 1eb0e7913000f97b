use super::Notifier;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records every notice it is handed. Clones share the same log.
#[derive(Clone, Default)]
pub struct SpyNotifier {
    completions: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
    fail_delivery: bool,
}

impl SpyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record calls but report every delivery as failed
    pub fn failing() -> Self {
        Self {
            fail_delivery: true,
            ..Self::default()
        }
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self, log: &Mutex<Vec<String>>, text: &str) -> Result<()> {
        if let Ok(mut entries) = log.lock() {
            entries.push(text.to_string());
        }
        if self.fail_delivery {
            bail!("spy delivery failure");
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for SpyNotifier {
    async fn send_completion_notice(&self, summary: &str) -> Result<()> {
        self.record(&self.completions, summary)
    }

    async fn report_error(&self, message: &str) -> Result<()> {
        self.record(&self.errors, message)
    }
}
