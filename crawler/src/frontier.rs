use std::collections::HashSet;

/// Locators claimed by one crawl. Insert-only; a claimed locator is never
/// fetched again in the same run.
#[derive(Debug, Default)]
pub struct CrawlFrontier {
    claimed: HashSet<String>,
}

impl CrawlFrontier {
    pub fn new() -> Self { Self::default() }

    /// Claim `locator`; returns false if it was already claimed.
    pub fn claim(&mut self, locator: &str) -> bool {
        if self.claimed.contains(locator) {
            return false;
        }
        self.claimed.insert(locator.to_string())
    }

    pub fn contains(&self, locator: &str) -> bool { self.claimed.contains(locator) }

    pub fn len(&self) -> usize { self.claimed.len() }

    pub fn is_empty(&self) -> bool { self.claimed.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_once() {
        let mut f = CrawlFrontier::new();
        assert!(f.claim("https://en.wikipedia.org/wiki/Canada"));
        assert!(!f.claim("https://en.wikipedia.org/wiki/Canada"));
        assert!(f.contains("https://en.wikipedia.org/wiki/Canada"));
        assert_eq!(f.len(), 1);
    }
}
