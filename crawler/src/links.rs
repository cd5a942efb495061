use crate::frontier::CrawlFrontier;
use url::Url;

/// Frontier key for a locator: the URL with its fragment removed.
pub fn normalize(url: &Url) -> String {
    let mut u = url.clone();
    u.set_fragment(None);
    u.to_string()
}

/// Decides which hrefs point into the crawled site's article namespace.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    host: String,
    prefix: String,
}

impl LinkFilter {
    pub fn new(host: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self { host: host.into(), prefix: prefix.into() }
    }

    /// Resolve `href` against `base` and return it if it is an article link:
    /// http(s), same host, under the article prefix, no namespace separator,
    /// no query string. The fragment is dropped.
    pub fn qualify(&self, base: &Url, href: &str) -> Option<Url> {
        let mut url = base.join(href).ok()?;
        url.set_fragment(None);
        if !matches!(url.scheme(), "http" | "https") || url.host_str() != Some(self.host.as_str()) {
            return None;
        }
        if url.query().is_some() {
            return None;
        }
        let title = url.path().strip_prefix(self.prefix.as_str())?;
        if title.is_empty() || title.contains(':') || title.to_ascii_lowercase().contains("%3a") {
            return None;
        }
        Some(url)
    }
}

/// Pick at most `fan_out` qualifying links, in order of appearance, skipping
/// locators already claimed and repeats within the page.
pub fn select_links(
    hrefs: &[String],
    base: &Url,
    filter: &LinkFilter,
    frontier: &CrawlFrontier,
    fan_out: usize,
) -> Vec<Url> {
    let mut picked: Vec<Url> = Vec::new();
    for href in hrefs {
        if picked.len() >= fan_out {
            break;
        }
        let Some(url) = filter.qualify(base, href) else { continue };
        let key = normalize(&url);
        if frontier.contains(&key) || picked.iter().any(|p| normalize(p) == key) {
            continue;
        }
        picked.push(url);
    }
    picked
}
