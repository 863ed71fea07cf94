use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "PUBCASH_API_URL";

/// Build a config from optional file contents and an optional override URL.
///
/// Unparseable contents fall back to defaults rather than failing startup.
pub fn parse_config(contents: Option<&str>, api_url_override: Option<String>) -> AppConfig {
    let config = match contents {
        Some(contents) => toml::from_str::<AppConfig>(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to parse config file, using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    let base_url = api_url_override
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| config.api.base_url.clone());
    config.with_base_url(base_url)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::info!(path = CONFIG_PATH, error = %e, "config file not found, using defaults");
            None
        }
    };
    parse_config(contents.as_deref(), std::env::var(API_URL_ENV).ok())
}

/// Browsers have no filesystem or process environment, so the base URL is
/// baked in at compile time.
#[cfg(target_arch = "wasm32")]
fn build_config() -> AppConfig {
    parse_config(None, option_env!("PUBCASH_API_URL").map(str::to_string))
}

/// Load the configuration into the global `OnceLock` and log it. Safe to
/// call multiple times; only the first call reads anything.
pub fn load_config() -> &'static AppConfig {
    let config = app_config();
    tracing::info!(api = %config.api.base_url, "configuration loaded");
    config
}

/// The loaded configuration, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(build_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::DEFAULT_API_BASE_URL;

    #[test]
    fn missing_file_and_env_yield_defaults() {
        let config = parse_config(None, None);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn file_value_is_used() {
        let config = parse_config(Some("[api]\nbase_url = \"https://pubcash.test/api/\"\n"), None);
        assert_eq!(config.api.base_url, "https://pubcash.test/api");
    }

    #[test]
    fn env_override_wins_over_file() {
        let config = parse_config(
            Some("[api]\nbase_url = \"https://pubcash.test/api\"\n"),
            Some("http://127.0.0.1:9000".to_string()),
        );
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = parse_config(None, Some("  ".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let config = parse_config(Some("this is [not toml"), None);
        assert_eq!(config, AppConfig::default());
    }
}
