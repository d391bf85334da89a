use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("coinscope/", env!("CARGO_PKG_VERSION"));

pub const ENV_API_BASE: &str = "COINSCOPE_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "COINSCOPE_TIMEOUT_SECS";

/// Settings for [`CoinGeckoClient`](crate::CoinGeckoClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE),
            timeout: DEFAULT_TIMEOUT,
            user_agent: String::from(USER_AGENT),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `COINSCOPE_API_BASE` and `COINSCOPE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(ENV_API_BASE).filter(|value| !value.trim().is_empty()) {
            config.base_url = base.trim().trim_end_matches('/').to_owned();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(
                    value = %raw,
                    "ignoring invalid {ENV_TIMEOUT_SECS}, keeping {}s",
                    DEFAULT_TIMEOUT.as_secs()
                ),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
