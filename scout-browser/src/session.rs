use std::time::Duration;

use anyhow::Result;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::debug;
use webdriver::capabilities::Capabilities;

use crate::chrome::{build_chrome_arguments, DESKTOP_USER_AGENT};

/// Connection settings for one scoped session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebDriver endpoint (Chromedriver).
    pub webdriver_url: String,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// User agent presented to every page the session loads.
    pub user_agent: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}

/// An exclusively-owned WebDriver session.
///
/// The session uses the `eager` page-load strategy: [`BrowserSession::goto`]
/// resolves once the initial markup is parsed rather than waiting for the
/// full load event, which is sufficient for selector-driven extraction and
/// noticeably faster on asset-heavy pages.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Open a fresh session against the configured WebDriver endpoint.
    pub async fn connect(config: &SessionConfig) -> Result<Self> {
        let mut caps = Capabilities::new();
        caps.insert("pageLoadStrategy".to_string(), json!("eager"));

        let mut chrome_opts = serde_json::Map::new();
        chrome_opts.insert("args".to_string(), json!(build_chrome_arguments(config)));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await?;

        debug!(
            target: "browser.session",
            endpoint = %config.webdriver_url,
            headless = config.headless,
            "webdriver session opened"
        );
        Ok(Self { client })
    }

    /// Navigate to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.client.goto(url).await?;
        Ok(())
    }

    /// Wait up to `timeout` for at least one element matching `selector`.
    ///
    /// Returns `Ok(None)` when the wait expires; any other driver failure is
    /// an error so callers can keep the timeout outcome distinct.
    pub async fn wait_for_element(
        &self,
        selector: &str,
        timeout: Duration,
    ) -> Result<Option<PageElement>> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(element) => Ok(Some(PageElement { element })),
            Err(CmdError::WaitTimeout) => {
                debug!(target: "browser.session", %selector, "element wait timed out");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// First element matching `selector`, if any.
    pub async fn find_element(&self, selector: &str) -> Result<Option<PageElement>> {
        let mut matches = self.client.find_all(Locator::Css(selector)).await?;
        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PageElement {
                element: matches.swap_remove(0),
            }))
        }
    }

    /// End the session. The driver keeps the browser alive until the session
    /// closes, so this must run on every exit path.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

/// A DOM element scoped to its originating session.
pub struct PageElement {
    element: Element,
}

impl PageElement {
    /// First child element matching `selector`, if any.
    pub async fn find_child(&self, selector: &str) -> Result<Option<PageElement>> {
        let mut matches = self.element.find_all(Locator::Css(selector)).await?;
        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PageElement {
                element: matches.swap_remove(0),
            }))
        }
    }

    /// The element's visible text.
    pub async fn text(&self) -> Result<String> {
        self.element.text().await.map_err(Into::into)
    }
}
