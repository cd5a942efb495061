use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::frontier::CrawlFrontier;
use crate::links::{normalize, select_links, LinkFilter};
use crate::store::DocumentStore;
use crate::{clean, CrawlConfig};
use search_core::DocumentId;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageOutcome {
    Saved { doc_id: DocumentId },
    Failed { reason: String },
}

/// One visited locator, in visit order.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub depth: usize,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub seed: String,
    pub max_depth: usize,
    pub pages: Vec<PageRecord>,
    /// Scheduled locators dropped because another branch claimed them first.
    pub skipped: usize,
    pub started_at: String,
    pub finished_at: String,
}

impl CrawlReport {
    pub fn saved(&self) -> usize {
        self.pages.iter().filter(|p| matches!(p.outcome, PageOutcome::Saved { .. })).count()
    }

    pub fn failed(&self) -> usize {
        self.pages.iter().filter(|p| matches!(p.outcome, PageOutcome::Failed { .. })).count()
    }
}

struct Pending {
    url: Url,
    depth: usize,
}

/// Depth-first, depth-bounded crawler. Visits pages in the order a recursive
/// walk would, using an explicit stack.
pub struct Crawler<F, S> {
    config: CrawlConfig,
    fetcher: F,
    store: S,
}

impl<F: Fetcher, S: DocumentStore> Crawler<F, S> {
    pub fn new(config: CrawlConfig, fetcher: F, store: S) -> Self {
        Self { config, fetcher, store }
    }

    pub fn fetcher(&self) -> &F { &self.fetcher }

    pub fn store(&self) -> &S { &self.store }

    pub async fn crawl(&self, seed: &str, max_depth: usize) -> Result<CrawlReport, CrawlError> {
        let seed_url = parse_seed(seed)?;
        let host = seed_url.host_str().unwrap_or_default().to_string();
        let filter = LinkFilter::new(host, self.config.article_prefix.clone());
        let mut frontier = CrawlFrontier::new();
        let mut report = CrawlReport {
            seed: seed_url.to_string(),
            max_depth,
            pages: Vec::new(),
            skipped: 0,
            started_at: now(),
            finished_at: String::new(),
        };

        let mut stack = vec![Pending { url: seed_url, depth: 0 }];
        while let Some(Pending { url, depth }) = stack.pop() {
            if depth > max_depth {
                continue;
            }
            let key = normalize(&url);
            if !frontier.claim(&key) {
                tracing::debug!(url = %key, "already visited");
                report.skipped += 1;
                continue;
            }
            tracing::info!(depth, url = %key, "crawling");

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(url = %key, error = %e, "fetch failed");
                    report.pages.push(PageRecord { url: key, depth, outcome: PageOutcome::Failed { reason: e.to_string() } });
                    continue;
                }
            };

            let page = clean::clean_html(&html);
            let doc_id = DocumentId::for_locator(depth, &key);
            let outcome = match self.store.save(&page.text, &doc_id) {
                Ok(()) => PageOutcome::Saved { doc_id },
                Err(e) => {
                    tracing::warn!(url = %key, error = %e, "save failed");
                    PageOutcome::Failed { reason: e.to_string() }
                }
            };
            report.pages.push(PageRecord { url: key, depth, outcome });

            if depth < max_depth {
                let children = select_links(&page.links, &url, &filter, &frontier, self.config.fan_out);
                tracing::debug!(depth, links = children.len(), "following links");
                stack.extend(children.into_iter().rev().map(|url| Pending { url, depth: depth + 1 }));
            }
        }

        report.finished_at = now();
        tracing::info!(saved = report.saved(), failed = report.failed(), skipped = report.skipped, "crawl finished");
        Ok(report)
    }
}

fn parse_seed(seed: &str) -> Result<Url, CrawlError> {
    let err = |reason: String| CrawlError::Seed { seed: seed.to_string(), reason };
    let mut url = Url::parse(seed.trim()).map_err(|e| err(e.to_string()))?;
    url.set_fragment(None);
    if !matches!(url.scheme(), "http" | "https") {
        return Err(err(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(err("missing host".to_string()));
    }
    Ok(url)
}

fn now() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}
