//! Title and price extraction from one market result row.
//!
//! Sub-extractions never abort the scrape: a missing child, empty text, or
//! a failed lookup degrades to a placeholder instead.

use anyhow::Result;
use async_trait::async_trait;
use scout_browser::PageElement;
use tracing::debug;

const TITLE_SELECTOR: &str = ".market_listing_item_name";

/// Price candidates in priority order. Regular listings carry the
/// fee-inclusive price; on-sale listings mark the price up differently,
/// hence the fallbacks.
const PRICE_SELECTORS: [&str; 3] = [
    ".market_listing_price_with_fee",
    ".normal_price",
    ".sale_price",
];

const UNKNOWN_TITLE: &str = "Unknown";
const PRICE_UNAVAILABLE: &str = "Price not available";

/// Text lookup within one result row.
///
/// This is the seam between the extraction rules and the live DOM, so the
/// fallback chains are testable without a browser.
#[async_trait]
pub trait ListingRow {
    /// Text of the first child matching `selector`, or `None` when no child
    /// matches.
    async fn text_of(&self, selector: &str) -> Result<Option<String>>;
}

#[async_trait]
impl ListingRow for PageElement {
    async fn text_of(&self, selector: &str) -> Result<Option<String>> {
        match self.find_child(selector).await? {
            Some(child) => Ok(Some(child.text().await?)),
            None => Ok(None),
        }
    }
}

/// The row's item title, or `"Unknown"` when the title child is missing,
/// empty, or unreadable.
pub async fn extract_title(row: &(impl ListingRow + Sync)) -> String {
    match row.text_of(TITLE_SELECTOR).await {
        Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => UNKNOWN_TITLE.to_string(),
        Err(err) => {
            debug!(target: "market.extract", error = ?err, "title lookup failed");
            UNKNOWN_TITLE.to_string()
        }
    }
}

/// The row's price via the ordered candidate chain; the first selector
/// yielding non-empty text wins. Failed lookups fall through to the next
/// candidate.
pub async fn extract_price(row: &(impl ListingRow + Sync)) -> String {
    for selector in PRICE_SELECTORS {
        match row.text_of(selector).await {
            Ok(Some(text)) if !text.trim().is_empty() => return text.trim().to_string(),
            Ok(_) => {}
            Err(err) => {
                debug!(
                    target: "market.extract",
                    %selector,
                    error = ?err,
                    "price lookup failed, trying next candidate"
                );
            }
        }
    }
    PRICE_UNAVAILABLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Row stub mapping selectors to canned text, with an optional set of
    /// selectors whose lookup fails outright.
    struct StubRow {
        texts: HashMap<&'static str, &'static str>,
        failing: &'static [&'static str],
    }

    #[async_trait]
    impl ListingRow for StubRow {
        async fn text_of(&self, selector: &str) -> Result<Option<String>> {
            if self.failing.contains(&selector) {
                anyhow::bail!("selector engine error: {selector}");
            }
            Ok(self.texts.get(selector).map(|s| s.to_string()))
        }
    }

    fn row(texts: &[(&'static str, &'static str)]) -> StubRow {
        StubRow {
            texts: texts.iter().copied().collect(),
            failing: &[],
        }
    }

    #[tokio::test]
    async fn first_price_candidate_wins() {
        let row = row(&[
            (".market_listing_price_with_fee", "$10.50 USD"),
            (".normal_price", "$9.00 USD"),
            (".sale_price", "$8.00 USD"),
        ]);
        assert_eq!(extract_price(&row).await, "$10.50 USD");
    }

    #[tokio::test]
    async fn empty_candidates_are_skipped() {
        let row = row(&[
            (".market_listing_price_with_fee", "   "),
            (".sale_price", " $4.20 USD "),
        ]);
        assert_eq!(extract_price(&row).await, "$4.20 USD");
    }

    #[tokio::test]
    async fn failing_candidates_fall_through() {
        let row = StubRow {
            texts: [(".sale_price", "$1.00 USD")].into_iter().collect(),
            failing: &[".market_listing_price_with_fee", ".normal_price"],
        };
        assert_eq!(extract_price(&row).await, "$1.00 USD");
    }

    #[tokio::test]
    async fn price_placeholder_when_every_candidate_misses() {
        assert_eq!(extract_price(&row(&[])).await, "Price not available");
    }

    #[tokio::test]
    async fn title_text_is_trimmed() {
        let row = row(&[(".market_listing_item_name", "  AK-47 | Redline  ")]);
        assert_eq!(extract_title(&row).await, "AK-47 | Redline");
    }

    #[tokio::test]
    async fn title_placeholder_on_missing_empty_or_failing_lookup() {
        assert_eq!(extract_title(&row(&[])).await, "Unknown");

        let empty = row(&[(".market_listing_item_name", "   ")]);
        assert_eq!(extract_title(&empty).await, "Unknown");

        let failing = StubRow {
            texts: HashMap::new(),
            failing: &[".market_listing_item_name"],
        };
        assert_eq!(extract_title(&failing).await, "Unknown");
    }
}
