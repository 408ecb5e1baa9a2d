mod analyze;
mod entries;
mod extract;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tweetlens")]
#[command(about = "Extract numbered tweets from documents and analyze their sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify the texts of a CSV, XLSX, JSON, DOCX or PDF file
    Analyze {
        /// Input file
        path: PathBuf,
        /// Print the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Maximum number of texts to analyze (overrides TWEETLENS_MAX_TEXTS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },
    /// List the numbered entries of a DOCX or PDF file, optionally exporting them
    Extract {
        /// Input file
        path: PathBuf,
        /// Write entries to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write entries to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
        /// Save entries as the current extraction record at this path
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// List, edit or delete the entries of a saved extraction record
    Entries {
        /// Extraction record file
        #[arg(long, env = "TWEETLENS_STORE_PATH", default_value = tweetlens_extract::DEFAULT_STORE_PATH)]
        store: PathBuf,
        #[command(subcommand)]
        command: entries::EntriesCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = tweetlens_core::load_app_config()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Analyze { path, json, limit }) => {
            let limit = limit.map(|l| usize::try_from(l).unwrap_or(usize::MAX));
            analyze::run_analyze(&config, &path, json, limit).await?;
        }
        Some(Commands::Extract {
            path,
            csv,
            json,
            store,
        }) => {
            extract::run_extract(&path, csv.as_deref(), json.as_deref(), store.as_deref())?;
        }
        Some(Commands::Entries { store, command }) => {
            entries::run_entries(&store, command)?;
        }
        None => println!("no command given; run `tweetlens --help` for usage"),
    }

    Ok(())
}
