use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::info;

use super::Notifier;
use crate::config::EmailConfig;

/// Sends notices over authenticated SMTP
pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    app_name: String,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn new(app_name: &str, cfg: &EmailConfig) -> Result<Self> {
        let creds = Credentials::new(cfg.user.clone(), cfg.password.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.host)
            .with_context(|| format!("invalid SMTP host {}", cfg.host))?
            .credentials(creds)
            .build();

        let from: Mailbox = cfg
            .from
            .parse::<Mailbox>()
            .with_context(|| format!("invalid sender address {}", cfg.from))?;
        let to: Mailbox = cfg
            .to
            .parse::<Mailbox>()
            .with_context(|| format!("invalid recipient address {}", cfg.to))?;

        Ok(Self {
            mailer,
            app_name: app_name.to_string(),
            from,
            to,
        })
    }

    async fn send(&self, subject: String, content_type: header::ContentType, body: String) -> Result<()> {
        let msg = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(content_type)
            .body(body)
            .context("build email")?;

        self.mailer.send(msg).await.context("send email")?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send_completion_notice(&self, summary: &str) -> Result<()> {
        let subject = completion_subject(&self.app_name, Local::now());
        self.send(subject, header::ContentType::TEXT_HTML, summary.to_string())
            .await?;
        info!("Completion notice sent to {}", self.to);
        Ok(())
    }

    async fn report_error(&self, message: &str) -> Result<()> {
        let subject = format!("{}: run failed", self.app_name);
        self.send(subject, header::ContentType::TEXT_PLAIN, format!("{}\n", message))
            .await?;
        info!("Error notice sent to {}", self.to);
        Ok(())
    }
}

/// "<app>: new results (YYYY-MM-DD HH:MM)"
fn completion_subject<Tz: TimeZone>(app_name: &str, at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}: new results ({})", app_name, at.format("%Y-%m-%d %H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn completion_subject_carries_app_name_and_minute() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();

        assert_eq!(completion_subject("gumtreeTrawler", at), "gumtreeTrawler: new results (2024-03-09 07:05)");
    }
}
