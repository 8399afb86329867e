//! Rows command: one spreadsheet line per report entry.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tr_core::export::header;
use tr_core::export_rows;

use crate::Config;
use crate::commands::util::load_entries;

#[derive(Debug, Args)]
pub struct RowsArgs {
    /// Fragment dump of the report (JSON Lines).
    pub input: PathBuf,

    /// Output as JSON instead of tab-separated values.
    #[arg(long)]
    pub json: bool,

    /// Working hours per day for the workload column (overrides config).
    #[arg(long)]
    pub hours_per_day: Option<f64>,
}

pub fn run<W: Write>(writer: &mut W, args: &RowsArgs, config: &Config) -> Result<()> {
    let mut export = config.export.clone();
    if let Some(hours_per_day) = args.hours_per_day {
        export.hours_per_day = hours_per_day;
    }
    anyhow::ensure!(
        export.hours_per_day > 0.0,
        "hours per day must be positive, got {}",
        export.hours_per_day
    );

    let entries = load_entries(&args.input, &config.extract)?;
    let rows = export_rows(&entries, &export);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(writer, "{}", header(export.hours_per_day).join("\t"))?;
    for row in &rows {
        writeln!(writer, "{}", row.cells().join("\t"))?;
    }
    Ok(())
}
