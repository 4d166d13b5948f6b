//! Steam Community Market lookup: the scrape-and-extract routine.
//!
//! One call to [`lookup`] drives a scoped browser session to the market
//! search page for app 730, waits for the first result row, extracts a title
//! and price through fallback selector chains, scores the title against the
//! query, and renders a reply string. The routine owns no state across
//! invocations and never fails past its own boundary: every internal error
//! is logged server-side and replaced by a fixed user-facing message.

mod extract;
mod search;
mod similarity;

pub use extract::{extract_price, extract_title, ListingRow};
pub use search::{lookup, search_url, SearchOutcome, UNEXPECTED_ERROR_REPLY};
pub use similarity::similarity_percent;
