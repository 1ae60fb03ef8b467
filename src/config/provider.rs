//! Alpha Vantage Provider Configuration

use super::credentials::SecretString;
use crate::error::InsightsError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the outbound overview request
///
/// ## Environment Variables
///
/// - `ALPHAVANTAGE_API_KEY`: API key sent as `apikey` (default: demo)
/// - `ALPHAVANTAGE_BASE_URL`: Scheme and host of the API (default: https://www.alphavantage.co)
/// - `ALPHAVANTAGE_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretString::from(DEFAULT_API_KEY),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Load provider configuration from the process environment
    pub fn from_env() -> Result<Self, InsightsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load provider configuration through an arbitrary variable lookup
    ///
    /// Blank values fall back to the defaults. An unparseable timeout is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, InsightsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = read("ALPHAVANTAGE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_key = read("ALPHAVANTAGE_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string());

        let timeout_secs: u64 = match read("ALPHAVANTAGE_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                InsightsError::Config(format!(
                    "ALPHAVANTAGE_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        if timeout_secs == 0 {
            return Err(InsightsError::Config(
                "ALPHAVANTAGE_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            api_key: SecretString::new(api_key),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
