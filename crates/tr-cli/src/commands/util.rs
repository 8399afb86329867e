//! Shared utilities for CLI commands.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tr_core::{ExtractConfig, TextFragment, TimeEntry, extract_pages};

/// One line of a fragment dump.
#[derive(Debug, Deserialize)]
struct DumpedFragment {
    page: usize,
    x: f32,
    text: String,
}

/// Reads a fragment dump (JSON Lines) and groups it into pages.
///
/// Each line is `{"page": n, "x": f, "text": s}` as written by the PDF
/// decoder. Lines must be in decoder order, so page numbers never decrease.
pub fn parse_pages<R: BufRead>(reader: R) -> Result<Vec<Vec<TextFragment>>> {
    let mut pages: Vec<Vec<TextFragment>> = Vec::new();
    let mut current_page: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parsed: DumpedFragment = serde_json::from_str(trimmed)
            .with_context(|| format!("invalid JSON on line {}", idx + 1))?;

        match current_page {
            Some(page) if page == parsed.page => {}
            Some(page) if page > parsed.page => anyhow::bail!(
                "line {}: page {} appears after page {page}",
                idx + 1,
                parsed.page
            ),
            _ => {
                pages.push(Vec::new());
                current_page = Some(parsed.page);
            }
        }

        if let Some(fragments) = pages.last_mut() {
            fragments.push(TextFragment::new(parsed.x, parsed.text));
        }
    }

    Ok(pages)
}

/// Reads a fragment dump from disk and reassembles its entries.
pub fn load_entries(path: &Path, config: &ExtractConfig) -> Result<Vec<TimeEntry>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let pages = parse_pages(BufReader::new(file))
        .with_context(|| format!("failed to read fragments from {}", path.display()))?;

    let entries = extract_pages(config, &pages)
        .with_context(|| format!("failed to extract rows from {}", path.display()))?;
    tracing::info!(pages = pages.len(), entries = entries.len(), "report extracted");
    Ok(entries)
}
