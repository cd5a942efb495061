pub mod clean;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod frontier;
pub mod links;
pub mod store;

pub use config::CrawlConfig;
pub use crawl::{CrawlReport, Crawler, PageOutcome, PageRecord};
pub use error::{CrawlError, FetchError, StorageError};
pub use fetch::{Fetcher, HttpFetcher};
pub use frontier::CrawlFrontier;
pub use store::{DocumentStore, FsDocumentStore};
