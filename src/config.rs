use serde::Deserialize;
use std::time::Duration;

/// Site settings. Every field has a default, so a partial config only has
/// to name what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefixed to every relative URL found on the site. No trailing slash.
    pub base_url: String,
    pub search_path: String,
    /// Per-request budget in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Cover URL used for search results rendered without an image.
    pub no_thumbnail_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "https://bato.to".to_string(),
            search_path: "/v3x-search".to_string(),
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            no_thumbnail_url: "https://bato.to/public-assets/img/no-image.png".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path)
    }
}
