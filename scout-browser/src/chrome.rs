use crate::session::SessionConfig;

/// Common desktop Chrome identity. Marketplace pages serve interstitials to
/// clients that advertise automation, so every session presents this instead
/// of the driver default.
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Construct Chrome command-line arguments for one session.
pub fn build_chrome_arguments(config: &SessionConfig) -> Vec<String> {
    let mut args = vec![
        "--disable-blink-features=AutomationControlled".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
        "--disable-extensions".to_string(),
        format!("--user-agent={}", config.user_agent),
        "--window-size=1920,1080".to_string(),
        "--lang=en-US,en".to_string(),
    ];
    if config.headless {
        args.push("--headless".to_string());
        args.push("--disable-gpu".to_string());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_is_always_spoofed() {
        let config = SessionConfig::default();
        let args = build_chrome_arguments(&config);
        assert!(args.contains(&format!("--user-agent={DESKTOP_USER_AGENT}")));
    }

    #[test]
    fn headless_flags_follow_config() {
        let visible = SessionConfig {
            headless: false,
            ..SessionConfig::default()
        };
        assert!(!build_chrome_arguments(&visible).contains(&"--headless".to_string()));

        let headless = SessionConfig::default();
        let args = build_chrome_arguments(&headless);
        assert!(args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--disable-gpu".to_string()));
    }
}
