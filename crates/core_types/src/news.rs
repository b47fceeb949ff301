//! News feed wire types and the fixed query the dashboard runs.

use serde::{Deserialize, Serialize};

/// A single article from the news search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: String,
}

impl NewsArticle {
    /// Image to show for this article, `fallback` when it has none.
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => fallback,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Body returned by the news search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub results: Vec<NewsArticle>,
}

/// The news search the dashboard issues on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub keywords: &'static str,
    pub country: &'static str,
    pub language: &'static str,
    pub category: &'static str,
    pub size: u8,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            keywords: "herbs OR ayurveda OR homeopathy",
            country: "in",
            language: "en",
            category: "health,science",
            size: 6,
        }
    }
}

impl NewsQuery {
    /// Query-string pairs, unencoded, in the order the endpoint documents them.
    pub fn params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", api_key.to_string()),
            ("q", self.keywords.to_string()),
            ("country", self.country.to_string()),
            ("language", self.language.to_string()),
            ("category", self.category.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}
