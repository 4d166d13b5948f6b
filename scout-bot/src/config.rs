//! Startup configuration, resolved once from the process environment and
//! handed to the adapter explicitly; handler logic never reads the
//! environment.

use scout_browser::SessionConfig;
use thiserror::Error;

/// Required: the Discord bot token.
pub const TOKEN_VAR: &str = "SCOUT_DISCORD_TOKEN";
/// Optional: WebDriver endpoint override.
const WEBDRIVER_VAR: &str = "SCOUT_WEBDRIVER_URL";
/// Optional: set to `0`, `false`, or `no` (any case) to run the browser
/// visibly.
const HEADLESS_VAR: &str = "SCOUT_HEADLESS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingToken(&'static str),
}

/// Everything the bot process needs at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub browser: SessionConfig,
}

impl AppConfig {
    /// Read configuration from the process environment. A missing or blank
    /// token is a fatal startup condition for the caller to report.
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token = std::env::var(TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken(TOKEN_VAR))?;

        let mut browser = SessionConfig::default();
        if let Ok(url) = std::env::var(WEBDRIVER_VAR) {
            browser.webdriver_url = url;
        }
        if let Ok(raw) = std::env::var(HEADLESS_VAR) {
            browser.headless = !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no"
            );
        }

        Ok(Self {
            discord_token,
            browser,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn missing_token_is_a_typed_error() {
        temp_env::with_var(TOKEN_VAR, None::<&str>, || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains(TOKEN_VAR));
        });
    }

    #[test]
    #[serial]
    fn blank_token_is_rejected() {
        temp_env::with_var(TOKEN_VAR, Some("   "), || {
            assert!(AppConfig::from_env().is_err());
        });
    }

    #[test]
    #[serial]
    fn optional_variables_have_defaults() {
        temp_env::with_vars(
            [
                (TOKEN_VAR, Some("token")),
                (WEBDRIVER_VAR, None),
                (HEADLESS_VAR, None),
            ],
            || {
                let config = AppConfig::from_env().expect("config loads");
                assert_eq!(config.browser.webdriver_url, "http://localhost:9515");
                assert!(config.browser.headless);
            },
        );
    }

    #[test]
    #[serial]
    fn headless_opt_out_is_case_insensitive() {
        for raw in ["FALSE", "False", "NO", " 0 "] {
            temp_env::with_vars([(TOKEN_VAR, Some("token")), (HEADLESS_VAR, Some(raw))], || {
                let config = AppConfig::from_env().expect("config loads");
                assert!(!config.browser.headless, "{raw:?} should disable headless");
            });
        }
    }

    #[test]
    #[serial]
    fn environment_overrides_are_applied() {
        temp_env::with_vars(
            [
                (TOKEN_VAR, Some("token")),
                (WEBDRIVER_VAR, Some("http://127.0.0.1:4444")),
                (HEADLESS_VAR, Some("0")),
            ],
            || {
                let config = AppConfig::from_env().expect("config loads");
                assert_eq!(config.browser.webdriver_url, "http://127.0.0.1:4444");
                assert!(!config.browser.headless);
            },
        );
    }
}
