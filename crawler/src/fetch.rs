use crate::error::FetchError;
use crate::CrawlConfig;
use reqwest::{header, Client, Url};
use std::future::Future;

/// Source of page bodies. The crawler only needs the HTML of a locator.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let resp = self.client.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }
        if let Some(ct) = resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
            if !ct.starts_with("text/html") {
                return Err(FetchError::NotHtml(ct.to_string()));
            }
        }
        Ok(resp.text().await?)
    }
}
