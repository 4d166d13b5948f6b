//! The scrape routine: one search, first row, rendered reply.

use std::time::Duration;

use anyhow::Result;
use scout_browser::{BrowserSession, SessionConfig};
use tracing::{debug, error, warn};
use url::Url;

use crate::extract::{extract_price, extract_title};
use crate::similarity::similarity_percent;

/// Steam Community Market search page.
const MARKET_SEARCH_ENDPOINT: &str = "https://steamcommunity.com/market/search";

/// The "any category" filters the market UI sends for an unscoped search.
const ANY_CATEGORY_FILTERS: [&str; 7] = [
    "category_730_ItemSet[]",
    "category_730_ProPlayer[]",
    "category_730_StickerCapsule[]",
    "category_730_Tournament[]",
    "category_730_TournamentTeam[]",
    "category_730_Type[]",
    "category_730_Weapon[]",
];

const LISTING_ROW_SELECTOR: &str = ".market_listing_row";

/// How long to wait for the first result row to appear.
const RESULT_WAIT: Duration = Duration::from_secs(20);

const NO_RESULTS_REPLY: &str = "❌ No search results appeared (timeout).";
const NO_ROW_REPLY: &str = "❌ No result elements found.";

/// The only text an internal failure is allowed to surface to chat.
pub const UNEXPECTED_ERROR_REPLY: &str = "⚠️ Unexpected error during search.";

/// Outcome of one scrape call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first result row, extracted.
    Listing {
        title: String,
        price: String,
        similarity_percent: u8,
    },
    /// No result row appeared within the wait window.
    NoResultsTimeout,
    /// The wait resolved but the row selector matched nothing.
    NoListingRow,
}

impl SearchOutcome {
    /// The reply text shown to the requesting user.
    pub fn render(&self) -> String {
        match self {
            SearchOutcome::Listing {
                title,
                price,
                similarity_percent,
            } => format!(
                "🎯 Item: {title}\n💰 Price: {price}\n🔍 Similarity: {similarity_percent}%"
            ),
            SearchOutcome::NoResultsTimeout => NO_RESULTS_REPLY.to_string(),
            SearchOutcome::NoListingRow => NO_ROW_REPLY.to_string(),
        }
    }
}

/// Build the market search URL for `query`, escaped, with the fixed
/// any-category filters and app id.
pub fn search_url(query: &str) -> Url {
    let mut url = Url::parse(MARKET_SEARCH_ENDPOINT).expect("market base url");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", query);
        for filter in ANY_CATEGORY_FILTERS {
            pairs.append_pair(filter, "any");
        }
        pairs.append_pair("appid", "730");
    }
    url
}

/// Look up `query` on the market and produce the user-facing reply text.
///
/// This is the fail-closed boundary of the routine: every internal error is
/// logged with full detail and replaced by [`UNEXPECTED_ERROR_REPLY`], so
/// driver and network failures never leak into chat.
pub async fn lookup(config: &SessionConfig, query: &str) -> String {
    match search_market(config, query).await {
        Ok(outcome) => {
            debug!(target: "market.search", %query, outcome = ?outcome, "scrape finished");
            outcome.render()
        }
        Err(err) => {
            error!(target: "market.search", %query, error = ?err, "market lookup failed");
            UNEXPECTED_ERROR_REPLY.to_string()
        }
    }
}

/// Run one scrape in a session of its own. Teardown is unconditional: the
/// session closes on the timeout path, the success path, and every error
/// path in between.
async fn search_market(config: &SessionConfig, query: &str) -> Result<SearchOutcome> {
    let session = BrowserSession::connect(config).await?;
    let outcome = scrape_first_listing(&session, query).await;
    if let Err(err) = session.close().await {
        // A close failure is not worth masking the scrape outcome.
        warn!(target: "market.search", error = ?err, "failed to close browser session");
    }
    outcome
}

async fn scrape_first_listing(session: &BrowserSession, query: &str) -> Result<SearchOutcome> {
    session.goto(search_url(query).as_str()).await?;

    if session
        .wait_for_element(LISTING_ROW_SELECTOR, RESULT_WAIT)
        .await?
        .is_none()
    {
        return Ok(SearchOutcome::NoResultsTimeout);
    }

    let Some(row) = session.find_element(LISTING_ROW_SELECTOR).await? else {
        return Ok(SearchOutcome::NoListingRow);
    };

    let title = extract_title(&row).await;
    let price = extract_price(&row).await;
    let similarity = similarity_percent(query, &title);

    Ok(SearchOutcome::Listing {
        title,
        price,
        similarity_percent: similarity,
    })
}
