//! `entries` command: inspect and edit the saved extraction record.

use std::fmt::Write as _;
use std::path::Path;

use clap::Subcommand;
use tweetlens_extract::{ExtractionRecord, ExtractionStore};

/// Sub-commands available under `entries`.
#[derive(Debug, Subcommand)]
pub enum EntriesCommands {
    /// Print the saved entries
    List {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace the text of one entry
    Edit {
        /// Entry number
        id: u64,
        /// New text
        text: String,
    },
    /// Delete one entry, or every entry with --all
    Delete {
        /// Entry number
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<u64>,
        /// Delete every entry
        #[arg(long)]
        all: bool,
    },
}

/// Run one `entries` action against the record at `store_path`.
///
/// # Errors
///
/// Returns an error if the record cannot be read or written, or if an edit
/// or delete targets a missing record or entry.
pub(crate) fn run_entries(store_path: &Path, command: EntriesCommands) -> anyhow::Result<()> {
    let store = ExtractionStore::new(store_path);

    match command {
        EntriesCommands::List { json } => {
            let record = store.load()?;
            if json {
                let record = record.unwrap_or_default();
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", render_record(store.path(), record.as_ref()));
            }
        }
        EntriesCommands::Edit { id, text } => {
            let updated = store.update_entry(id, &text)?;
            println!("updated entry {}: {}", updated.id, updated.text);
        }
        EntriesCommands::Delete { all: true, .. } => {
            store.clear()?;
            println!("deleted all entries");
        }
        EntriesCommands::Delete { id: Some(id), .. } => {
            let remaining = store.delete_entry(id)?;
            println!("deleted entry {id}; {remaining} remaining");
        }
        EntriesCommands::Delete { id: None, .. } => {
            anyhow::bail!("an entry number or --all is required");
        }
    }

    Ok(())
}

fn render_record(path: &Path, record: Option<&ExtractionRecord>) -> String {
    let Some(record) = record else {
        return format!("no extraction record found at {}\n", path.display());
    };

    let mut out = String::new();
    let source = record.filename.as_deref().unwrap_or("unknown source");
    let _ = write!(out, "{} entries from {source}", record.total_items);
    if let Some(at) = record.extracted_at {
        let _ = write!(out, " (extracted {})", at.to_rfc3339());
    }
    out.push('\n');
    for item in &record.items {
        let _ = writeln!(out, "{}. {}", item.id, item.text);
    }
    out
}
