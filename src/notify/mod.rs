pub mod email;
pub mod log;
pub mod spy;

pub use email::EmailNotifier;
pub use log::LogNotifier;
pub use spy::SpyNotifier;

use crate::models::ListingRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Where run results and failures are delivered.
///
/// Delivery problems are returned to the caller but never change the
/// outcome of a run.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce newly found listings
    async fn send_completion_notice(&self, summary: &str) -> Result<()>;

    /// Report a failed run
    async fn report_error(&self, message: &str) -> Result<()>;
}

/// HTML summary of new listings: title, location, link and price per entry.
pub fn compose_summary(listings: &[ListingRecord]) -> String {
    let mut body = String::from("New results - ");

    for listing in listings {
        body.push_str("<p>");
        body.push_str("<br>");
        body.push_str(&html_escape::encode_text(&listing.title));
        body.push_str("<br>");
        body.push_str(&html_escape::encode_text(&listing.location));
        body.push_str("<br>");
        body.push_str(&html_escape::encode_text(&listing.url));
        body.push_str("<br>£");
        body.push_str(&html_escape::encode_text(&listing.price));
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_field() {
        let listings = vec![
            ListingRecord {
                price: "20.00".into(),
                title: "Sharp Microwave & Grill".into(),
                location: "Addlestone, Surrey".into(),
                url: "https://www.gumtree.com/p/1".into(),
            },
            ListingRecord {
                price: "5.00".into(),
                title: "Kettle".into(),
                location: "Woking".into(),
                url: "https://www.gumtree.com/p/2".into(),
            },
        ];

        let summary = compose_summary(&listings);

        assert!(summary.starts_with("New results - <p>"));
        assert!(summary.contains("<br>Sharp Microwave &amp; Grill<br>Addlestone, Surrey"));
        assert!(summary.contains("<br>https://www.gumtree.com/p/1<br>£20.00"));
        assert!(summary.ends_with("<br>https://www.gumtree.com/p/2<br>£5.00"));
        assert_eq!(summary.matches("<p>").count(), 2);
    }
}
