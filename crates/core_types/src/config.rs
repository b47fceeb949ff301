//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Backend the profile endpoint lives on.
pub const DEFAULT_API_BASE_URL: &str = "https://quarrelsome-mae-subham-org-14444f5f.koyeb.app";

/// Third-party news search endpoint.
pub const DEFAULT_NEWS_ENDPOINT: &str = "https://newsdata.io/api/1/news";

/// Public-tier newsdata.io key the dashboard ships with.
pub const DEFAULT_NEWS_API_KEY: &str = "pub_81924bea37683a2602e8855a2c144f6c1c31a";

/// Shown on news cards whose article has no image.
pub const DEFAULT_NEWS_IMAGE: &str =
    "https://mediaengagement.org/wp-content/uploads/2022/12/News-Desert-Web-Tile-1.png";

/// Greeting name used when there is no signed-in profile.
pub const PLACEHOLDER_NAME: &str = "User";

/// Viewports narrower than this (CSS px) collapse the sidebar.
pub const COLLAPSE_BREAKPOINT_PX: f64 = 768.0;

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub news_endpoint: String,
    pub news_api_key: String,
    /// Upper bound on each network call, including body decode.
    pub request_timeout_ms: u32,
    pub collapse_breakpoint_px: f64,
    pub placeholder_name: String,
    pub default_news_image: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            news_endpoint: DEFAULT_NEWS_ENDPOINT.to_string(),
            news_api_key: DEFAULT_NEWS_API_KEY.to_string(),
            request_timeout_ms: 10_000,
            collapse_breakpoint_px: COLLAPSE_BREAKPOINT_PX,
            placeholder_name: PLACEHOLDER_NAME.to_string(),
            default_news_image: DEFAULT_NEWS_IMAGE.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Absolute URL of the profile endpoint.
    pub fn profile_url(&self) -> String {
        format!("{}/api/user/profile", self.api_base_url.trim_end_matches('/'))
    }
}
