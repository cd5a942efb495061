use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a boolean inverted index from crawled text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a directory of document files
    Build {
        /// Input path (directory or single file)
        #[arg(long, default_value = "./scraped_pages")]
        input: PathBuf,
        /// Output index file
        #[arg(long, default_value = "./inverted_index.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output } => {
            let summary = indexer::build_index(&input, &output)?;
            println!(
                "Inverted index written to {}. Total terms: {} ({} documents)",
                output.display(),
                summary.num_terms,
                summary.num_docs
            );
            Ok(())
        }
    }
}
