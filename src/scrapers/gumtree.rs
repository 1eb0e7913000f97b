use crate::error::{TrawlError, TrawlResult};
use crate::models::ListingRecord;
use crate::scrapers::types::ExtractOptions;
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Pulls listing records out of a Gumtree search-results page
pub struct GumtreeExtractor {
    options: ExtractOptions,
    card_selector: Selector,
}

impl GumtreeExtractor {
    pub fn new(options: ExtractOptions) -> TrawlResult<Self> {
        let card_selector = Selector::parse("a.listing-link")
            .map_err(|e| TrawlError::Extraction(format!("invalid card selector: {:?}", e)))?;

        Ok(Self {
            options,
            card_selector,
        })
    }

    /// Extract up to `max_results` priced listings, in document order.
    ///
    /// Cards without a price are adverts and are skipped without counting
    /// towards the cap. Neither a card missing pieces of markup nor stray
    /// undecodable bytes fail the call.
    pub fn extract(&self, body: &[u8]) -> TrawlResult<Vec<ListingRecord>> {
        let html = String::from_utf8_lossy(body);
        if let Cow::Owned(_) = html {
            warn!("Response body is not valid UTF-8, decoding lossily");
        }

        let document = Html::parse_document(&html);
        let cards: Vec<_> = document.select(&self.card_selector).collect();
        debug!("Found {} listing cards in HTML", cards.len());

        let mut records = Vec::new();

        for (idx, card) in cards.into_iter().enumerate() {
            if records.len() >= self.options.max_results {
                break;
            }

            match self.parse_card(card) {
                Some(record) => records.push(record),
                None => debug!("Skipped card {}: no price or link", idx),
            }
        }

        info!("Extracted {} listings", records.len());
        Ok(records)
    }

    fn parse_card(&self, card: ElementRef<'_>) -> Option<ListingRecord> {
        let content = child_with_class(card, "listing-content")?;

        // Filter out adverts
        let price = child_with_class(content, "listing-price")
            .and_then(|el| {
                el.children()
                    .filter_map(ElementRef::wrap)
                    .find(|m| m.value().name() == "meta" && m.value().attr("itemprop") == Some("price"))
            })
            .and_then(|meta| meta.value().attr("content"))
            .filter(|p| !p.trim().is_empty())?
            .to_string();

        let href = card.value().attr("href").map(str::trim).filter(|h| !h.is_empty())?;

        let title = child_text(content, "listing-title");
        let location = strip_label(&child_text(content, "listing-location"), &self.options.location_label);

        Some(ListingRecord {
            price,
            title,
            location,
            url: self.absolute_url(href),
        })
    }

    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            return href.to_string();
        }

        let origin = self.options.origin.trim_end_matches('/');
        if href.starts_with('/') {
            format!("{}{}", origin, href)
        } else {
            format!("{}/{}", origin, href)
        }
    }
}

/// First direct child element carrying `class`
fn child_with_class<'a>(el: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().classes().any(|c| c == class))
}

fn child_text(el: ElementRef<'_>, class: &str) -> String {
    child_with_class(el, class)
        .map(|child| child.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn strip_label(text: &str, label: &str) -> String {
    let label = label.trim_end();
    if label.is_empty() {
        return text.to_string();
    }
    match text.strip_prefix(label) {
        Some(rest) => rest.trim_start().to_string(),
        None => text.to_string(),
    }
}
