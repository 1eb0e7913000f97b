use crate::models::ListingRecord;
use std::collections::HashSet;

/// Records in `new_records` whose identity is absent from `old_records`,
/// in their original order. Only the identity (URL) is compared.
pub fn new_listings(new_records: &[ListingRecord], old_records: &[ListingRecord]) -> Vec<ListingRecord> {
    let known: HashSet<&str> = old_records.iter().map(ListingRecord::identity).collect();

    new_records
        .iter()
        .filter(|r| !known.contains(r.identity()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, title: &str) -> ListingRecord {
        ListingRecord {
            price: "20.00".into(),
            title: title.into(),
            location: "Woking".into(),
            url: url.into(),
        }
    }

    #[test]
    fn same_url_is_not_new_even_if_fields_changed() {
        let old = vec![record("u1", "Old title")];
        let new = vec![ListingRecord {
            price: "15.00".into(),
            ..record("u1", "New title")
        }];

        assert!(new_listings(&new, &old).is_empty());
    }

    #[test]
    fn keeps_order_of_new_records() {
        let old = vec![record("u2", "b")];
        let new = vec![record("u3", "c"), record("u2", "b"), record("u1", "a")];

        let urls: Vec<_> = new_listings(&new, &old).into_iter().map(|r| r.url).collect();

        assert_eq!(urls, vec!["u3", "u1"]);
    }

    #[test]
    fn empty_baseline_returns_everything() {
        let new = vec![record("u1", "a"), record("u2", "b")];

        assert_eq!(new_listings(&new, &[]), new);
    }

    #[test]
    fn dropped_listings_are_not_reported() {
        let old = vec![record("u1", "a"), record("u2", "b")];
        let new = vec![record("u1", "a")];

        assert!(new_listings(&new, &old).is_empty());
    }
}
