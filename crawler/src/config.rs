use std::time::Duration;

/// Maximum number of links followed out of any single page.
pub const DEFAULT_FAN_OUT: usize = 5;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Links followed per page, in order of appearance.
    pub fan_out: usize,
    /// Path prefix of the article namespace, e.g. `/wiki/`.
    pub article_prefix: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            fan_out: DEFAULT_FAN_OUT,
            article_prefix: "/wiki/".to_string(),
            timeout: Duration::from_secs(12),
            user_agent: "boolsearch-crawler/0.1 (+https://example.com/bot)".to_string(),
        }
    }
}
