use serde::{Deserialize, Serialize};

/// Base URL used when neither `config.toml` nor the environment sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Storage key holding the admin session token.
pub const SESSION_TOKEN_KEY: &str = "adminToken";

/// File used by non-browser builds to persist the session token.
pub const DEFAULT_SESSION_FILE: &str = ".pubcash-session.json";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_session_file() -> String {
    DEFAULT_SESSION_FILE.to_string()
}

/// `[api]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// `[session]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Where desktop and mobile builds keep the token between launches.
    #[serde(default = "default_session_file")]
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Replace the API base URL, trimming any trailing slash so endpoint
    /// paths can always be appended with a leading `/`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = normalize_base_url(&base_url.into());
        self
    }
}

/// Strip trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
