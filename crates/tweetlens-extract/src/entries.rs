//! Numbered-entry extraction.
//!
//! Scans text line by line for lines that start with `<digits>.` and
//! reassembles each entry's body from the lines that follow it. The scan is a
//! two-state accumulator: [`ScanState::Idle`] before the first numbered line,
//! [`ScanState::Accumulating`] while an entry is open. Every state change
//! that closes an entry goes through [`Scanner::flush`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::normalize_line_endings;

static ENTRY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\.\s*(.*)$").expect("valid entry regex"));

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\w\s.!?,;:'"\-@#$%\&*+=\[\]{}|\\<>/\~`]"#).expect("valid cleanup regex")
});

/// One reconstructed numbered item.
///
/// Ordinals are taken as written: duplicates and gaps are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "tweet_number")]
    pub ordinal: u64,
    #[serde(rename = "tweet_text")]
    pub body: String,
}

#[derive(Debug)]
struct PendingEntry {
    ordinal: u64,
    body: String,
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Idle,
    Accumulating(PendingEntry),
}

#[derive(Debug, Default)]
struct Scanner {
    state: ScanState,
    entries: Vec<Entry>,
}

impl Scanner {
    /// Consume one trimmed, non-blank line.
    fn feed(mut self, line: &str) -> Self {
        if let Some((ordinal, rest)) = parse_entry_start(line) {
            self.flush();
            self.state = ScanState::Accumulating(PendingEntry {
                ordinal,
                body: rest.to_string(),
            });
        } else if let ScanState::Accumulating(pending) = &mut self.state {
            pending.body.push(' ');
            pending.body.push_str(line);
        }
        // Lines before the first numbered line are dropped.
        self
    }

    /// Close the open entry, if any. Bodies that clean to nothing are discarded.
    fn flush(&mut self) {
        if let ScanState::Accumulating(pending) = std::mem::take(&mut self.state) {
            let body = clean_body(&pending.body);
            if body.is_empty() {
                tracing::debug!(ordinal = pending.ordinal, "dropping entry with empty body");
                return;
            }
            tracing::debug!(
                ordinal = pending.ordinal,
                preview = %preview(&body),
                "extracted entry"
            );
            self.entries.push(Entry {
                ordinal: pending.ordinal,
                body,
            });
        }
    }

    fn finish(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }
}

/// Match the start of a numbered entry, returning the ordinal and the rest of the line.
///
/// A digit run too large for `u64` is not an entry start.
fn parse_entry_start(line: &str) -> Option<(u64, &str)> {
    let caps = ENTRY_START.captures(line)?;
    let ordinal = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let rest = caps.get(2).map_or("", |m| m.as_str());
    Some((ordinal, rest))
}

/// Extract numbered entries from raw text, in source order.
///
/// Returns an empty `Vec` when no line starts with `<digits>.`; falling back
/// to a coarser split is up to the caller (see [`fallback_segments`]).
#[must_use]
pub fn extract_entries(text: &str) -> Vec<Entry> {
    let normalized = normalize_line_endings(text);
    let entries = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(Scanner::default(), Scanner::feed)
        .finish();

    tracing::info!(count = entries.len(), "numbered entry extraction finished");
    entries
}

/// One segment per non-blank line, trimmed. Used when [`extract_entries`] finds nothing.
#[must_use]
pub fn fallback_segments(text: &str) -> Vec<String> {
    normalize_line_endings(text)
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize an entry body.
///
/// Collapses whitespace, replaces characters outside the allowed set (word
/// characters, whitespace and common punctuation) with spaces, then collapses
/// and trims again. Idempotent.
#[must_use]
pub fn clean_body(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let replaced = DISALLOWED_CHARS.replace_all(&collapsed, " ");
    collapse_whitespace(&replaced)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn preview(body: &str) -> String {
    body.chars().take(50).collect()
}
