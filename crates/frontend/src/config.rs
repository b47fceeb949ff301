//! Build-time configuration overrides.

use floramed_core::DashboardConfig;
use log::warn;

/// Dashboard configuration with any `FLORAMED_*` values baked in by `build.rs`.
pub fn load() -> DashboardConfig {
    let mut config = DashboardConfig::default();

    if let Some(url) = option_env!("FLORAMED_API_BASE_URL") {
        config.api_base_url = url.to_string();
    }
    if let Some(endpoint) = option_env!("FLORAMED_NEWS_ENDPOINT") {
        config.news_endpoint = endpoint.to_string();
    }
    if let Some(key) = option_env!("FLORAMED_NEWS_API_KEY") {
        config.news_api_key = key.to_string();
    }
    if let Some(ms) = option_env!("FLORAMED_REQUEST_TIMEOUT_MS") {
        match ms.parse() {
            Ok(ms) => config.request_timeout_ms = ms,
            Err(err) => warn!("Ignoring FLORAMED_REQUEST_TIMEOUT_MS={ms}: {err}"),
        }
    }

    if config.news_api_key.is_empty() {
        warn!("FLORAMED_NEWS_API_KEY is empty; the news feed will come back empty");
    }

    config
}
