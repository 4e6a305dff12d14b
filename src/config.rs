//! Configuration for the Codeforces API client
//!
//! The crate owns no config file; hosts embed [`ApiConfig`] in their own
//! configuration (any serde format works) or build it in code. Defaults
//! target the public Codeforces API.

use crate::{ConfigError, ConfigResult};
use serde::Deserialize;

/// Base URL of the public Codeforces API
pub const DEFAULT_API_BASE_URL: &str = "https://codeforces.com/api";

/// API client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Codeforces API
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User agent sent with every API request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout in seconds; unset means no timeout
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds; unset means no timeout
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("cf-scout/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

/// Validates the entire API configuration
pub fn validate(config: &ApiConfig) -> ConfigResult<()> {
    validate_base_url(&config.base_url)?;
    validate_user_agent(&config.user_agent)?;
    validate_timeouts(config)?;
    Ok(())
}

/// Validates the API base URL
fn validate_base_url(base_url: &str) -> ConfigResult<()> {
    if base_url.is_empty() {
        return Err(ConfigError::Validation(
            "base-url cannot be empty".to_string(),
        ));
    }

    // Allow both HTTP and HTTPS to support testing with mock servers
    if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    Ok(())
}

/// Validates the user agent string
fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
    if user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates timeout settings
fn validate_timeouts(config: &ApiConfig) -> ConfigResult<()> {
    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    if config.connect_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}
