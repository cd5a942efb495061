use crawler::{CrawlConfig, CrawlFrontier, Crawler, DocumentStore, FetchError, Fetcher, PageOutcome, StorageError};
use search_core::DocumentId;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;
use url::Url;

const BASE: &str = "https://en.wikipedia.org/wiki/";

struct MapFetcher {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl MapFetcher {
    fn new(pages: &[(&str, &[&str])]) -> Self {
        let pages = pages
            .iter()
            .map(|(name, links)| {
                let anchors: String = links.iter().map(|l| format!(r#"<a href="/wiki/{l}">{l}</a> "#)).collect();
                let html = format!("<html><body><p>Article {name}</p><p>{anchors}</p></body></html>");
                (format!("{BASE}{name}"), html)
            })
            .collect();
        Self { pages, fetched: Mutex::new(Vec::new()) }
    }

    fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().iter().map(|u| u.trim_start_matches(BASE).to_string()).collect()
    }
}

impl Fetcher for MapFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages.get(url.as_str()).cloned().ok_or(FetchError::Status(404))
    }
}

#[derive(Default)]
struct MemoryStore {
    docs: Mutex<BTreeMap<DocumentId, String>>,
}

impl DocumentStore for MemoryStore {
    fn save(&self, text: &str, id: &DocumentId) -> Result<(), StorageError> {
        self.docs.lock().unwrap().insert(id.clone(), text.to_string());
        Ok(())
    }
}

struct FullDisk;

impl DocumentStore for FullDisk {
    fn save(&self, _text: &str, id: &DocumentId) -> Result<(), StorageError> {
        Err(StorageError::DiskFull { path: id.file_name().into() })
    }
}

fn site() -> MapFetcher {
    MapFetcher::new(&[
        ("Root", &["A", "B", "Category:X", "A", "C", "D", "E", "F"]),
        ("A", &["Root", "B", "G"]),
        ("B", &["Deep"]),
        ("C", &["H"]),
        ("D", &[]),
        ("E", &[]),
        ("F", &[]),
        ("H", &["Root"]),
        ("Deep", &[]),
    ])
}

#[tokio::test]
async fn visits_depth_first_in_link_order() {
    let crawler = Crawler::new(CrawlConfig::default(), site(), MemoryStore::default());
    let report = crawler.crawl(&format!("{BASE}Root"), 2).await.unwrap();

    let visited: Vec<(String, usize)> = report
        .pages
        .iter()
        .map(|p| (p.url.trim_start_matches(BASE).to_string(), p.depth))
        .collect();
    let expected: Vec<(String, usize)> = [("Root", 0), ("A", 1), ("B", 2), ("G", 2), ("C", 1), ("H", 2), ("D", 1), ("E", 1)]
        .iter()
        .map(|(n, d)| (n.to_string(), *d))
        .collect();
    assert_eq!(visited, expected);
    assert_eq!(report.saved(), 7);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn never_revisits_and_never_exceeds_depth() {
    let fetcher = site();
    let crawler = Crawler::new(CrawlConfig::default(), fetcher, MemoryStore::default());
    let report = crawler.crawl(&format!("{BASE}Root"), 2).await.unwrap();

    let mut seen = HashSet::new();
    for p in &report.pages {
        assert!(seen.insert(p.url.clone()), "visited twice: {}", p.url);
        assert!(p.depth <= 2);
    }
    // fan-out of 5 leaves F unvisited; B's child sits at depth 3
    assert!(!seen.contains(&format!("{BASE}F")));
    assert!(!seen.contains(&format!("{BASE}Deep")));
}

#[tokio::test]
async fn follows_at_most_fan_out_links_per_page() {
    let crawler = Crawler::new(CrawlConfig::default(), site(), MemoryStore::default());
    crawler.crawl(&format!("{BASE}Root"), 1).await.unwrap();
    let docs = crawler.store().docs.lock().unwrap();
    // Root plus five children
    assert_eq!(docs.len(), 6);
    assert!(docs.keys().filter(|id| id.as_str().starts_with("depth1_")).count() <= 5);
}

#[tokio::test]
async fn depth_zero_fetches_only_the_seed() {
    let fetcher = site();
    let crawler = Crawler::new(CrawlConfig::default(), fetcher, MemoryStore::default());
    let report = crawler.crawl(&format!("{BASE}Root#top"), 0).await.unwrap();
    assert_eq!(report.pages.len(), 1);
    let id = DocumentId::for_locator(0, &format!("{BASE}Root"));
    assert_eq!(report.pages[0].outcome, PageOutcome::Saved { doc_id: id.clone() });
    let docs = crawler.store().docs.lock().unwrap();
    assert!(docs[&id].contains("Article Root"));
}

#[tokio::test]
async fn storage_failures_do_not_stop_traversal() {
    let crawler = Crawler::new(CrawlConfig::default(), site(), FullDisk);
    let report = crawler.crawl(&format!("{BASE}Root"), 2).await.unwrap();
    assert_eq!(report.pages.len(), 8);
    assert_eq!(report.saved(), 0);
    assert!(report.pages.iter().all(|p| matches!(p.outcome, PageOutcome::Failed { .. })));
}

#[tokio::test]
async fn fetch_failure_of_seed_is_not_fatal() {
    let fetcher = MapFetcher::new(&[]);
    let crawler = Crawler::new(CrawlConfig::default(), fetcher, MemoryStore::default());
    let report = crawler.crawl(&format!("{BASE}Missing"), 3).await.unwrap();
    assert_eq!(report.failed(), 1);
    assert_eq!(crawler_fetches(&crawler), vec!["Missing"]);
}

#[tokio::test]
async fn bad_seed_is_fatal() {
    let crawler = Crawler::new(CrawlConfig::default(), site(), MemoryStore::default());
    assert!(crawler.crawl("file:///etc/passwd", 1).await.is_err());
}

#[test]
fn frontier_is_insert_only() {
    let mut f = CrawlFrontier::new();
    assert!(f.claim("a"));
    assert!(!f.claim("a"));
    assert_eq!(f.len(), 1);
}

fn crawler_fetches(crawler: &Crawler<MapFetcher, MemoryStore>) -> Vec<String> {
    crawler.fetcher().fetched()
}
