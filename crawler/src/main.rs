use anyhow::{Context, Result};
use clap::Parser;
use crawler::{CrawlConfig, Crawler, FsDocumentStore, HttpFetcher};
use search_core::persist::write_atomic;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Depth-first crawl of article pages into cleaned text files")]
struct Cli {
    /// Seed URL; crawled at depth 0
    #[arg(long)]
    seed: String,
    /// Deepest link level fetched (0 = seed only)
    #[arg(long, default_value_t = 2)]
    max_depth: usize,
    /// Directory receiving one text file per page
    #[arg(long, default_value = "./scraped_pages")]
    output: PathBuf,
    /// Links followed per page
    #[arg(long, default_value_t = crawler::config::DEFAULT_FAN_OUT)]
    fan_out: usize,
    /// Path prefix of the article namespace
    #[arg(long, default_value = "/wiki/")]
    article_prefix: String,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent header sent with every request
    #[arg(long, default_value = "boolsearch-crawler/0.1 (+https://example.com/bot)")]
    user_agent: String,
    /// Write the crawl report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let config = CrawlConfig {
        fan_out: args.fan_out,
        article_prefix: args.article_prefix,
        timeout: Duration::from_secs(args.timeout_secs),
        user_agent: args.user_agent,
    };
    let fetcher = HttpFetcher::new(&config).context("building HTTP client")?;
    let store = FsDocumentStore::open(&args.output)
        .map_err(crawler::CrawlError::Output)
        .with_context(|| format!("opening output directory {}", args.output.display()))?;

    let crawler = Crawler::new(config, fetcher, store);
    let report = crawler.crawl(&args.seed, args.max_depth).await?;

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        write_atomic(path, json.as_bytes()).with_context(|| format!("writing report {}", path.display()))?;
    }
    println!(
        "Done. saved={} failed={} skipped={} -> {}",
        report.saved(),
        report.failed(),
        report.skipped,
        args.output.display()
    );
    Ok(())
}
