//! Scoped WebDriver sessions for scraping.
//!
//! Each [`BrowserSession`] is a fresh, exclusively-owned WebDriver session
//! (Chromedriver by default) that lives for exactly one scrape: connect,
//! navigate, query, close. Sessions are never pooled or reused, so callers
//! must call [`BrowserSession::close`] on every exit path.

mod chrome;
mod session;

pub use chrome::{build_chrome_arguments, DESKTOP_USER_AGENT};
pub use session::{BrowserSession, PageElement, SessionConfig};
