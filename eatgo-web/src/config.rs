//! Frontend configuration module
//!
//! Endpoint URLs and client settings, fixed at compile time through
//! environment variables with production defaults.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "https://eatgo-customer-api.ahastudio.com";
const DEFAULT_LOGIN_BASE_URL: &str = "https://eatgo-login-api.ahastudio.com";

/// Key the access token is persisted under in local storage.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Frontend configuration for API endpoints and logging
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the restaurant API
    pub api_base_url: String,
    /// Base URL of the login API
    pub login_base_url: String,
    /// Local storage key holding the access token
    pub access_token_key: String,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EATGO_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            login_base_url: option_env!("EATGO_LOGIN_BASE_URL")
                .unwrap_or(DEFAULT_LOGIN_BASE_URL)
                .to_string(),
            access_token_key: ACCESS_TOKEN_KEY.to_string(),
            log_level: parse_log_level(option_env!("EATGO_LOG_LEVEL")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL of the restaurant API
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Base URL of the login API
    pub fn login_base_url(&self) -> &str {
        &self.login_base_url
    }
}

fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
