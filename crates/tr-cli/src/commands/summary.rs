//! Summary command: hours per week and tag.

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tr_core::{Summary, summarize};

use crate::Config;
use crate::commands::util::load_entries;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Fragment dump of the report (JSON Lines).
    pub input: PathBuf,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &SummaryArgs, config: &Config) -> Result<()> {
    let entries = load_entries(&args.input, &config.extract)?;
    let summary = summarize(&entries);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write!(writer, "{}", format_summary(&summary))?;
    }
    Ok(())
}

fn tag_label(tag: &str) -> &str {
    if tag.is_empty() { "(untagged)" } else { tag }
}

/// Formats the three views as text, one section each.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    if summary.period_totals.is_empty() {
        writeln!(output, "No entries found.").unwrap();
        return output;
    }

    for entry in &summary.weekly_tags {
        writeln!(
            output,
            "S{} - {}: {:.2}h",
            entry.week,
            tag_label(&entry.tag),
            entry.hours
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    for total in &summary.weekly_totals {
        writeln!(output, "S{} - {:.2}h", total.week, total.hours).unwrap();
    }
    // Rows without a date have no week but still count per tag
    if summary.undated_hours > 0.0 {
        writeln!(output, "Undated - {:.2}h", summary.undated_hours).unwrap();
    }

    writeln!(output).unwrap();
    for total in &summary.period_totals {
        writeln!(output, "{} - {:.2}h", tag_label(&total.tag), total.hours).unwrap();
    }

    output
}
