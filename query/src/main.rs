use anyhow::{Context, Result};
use clap::Parser;
use search_core::QueryEngine;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "query")]
#[command(about = "Boolean AND/OR/NOT queries over an inverted index")]
struct Args {
    /// Index file produced by `indexer build`
    #[arg(long, default_value = "./inverted_index.txt")]
    index: PathBuf,
    /// Answer a single query and exit instead of prompting
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let engine = QueryEngine::load(&args.index)
        .with_context(|| format!("loading index {}", args.index.display()))?;

    let stdout = io::stdout();
    match args.query {
        Some(q) => {
            if let Err(e) = query::answer(&engine, &q, &mut stdout.lock())? {
                anyhow::bail!("query rejected: {e}");
            }
        }
        None => {
            let stats = query::run_session(&engine, io::stdin().lock(), stdout.lock())?;
            tracing::info!(answered = stats.answered, rejected = stats.rejected, "session ended");
        }
    }
    Ok(())
}
