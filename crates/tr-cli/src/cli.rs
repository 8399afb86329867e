//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::rows::RowsArgs;
use crate::commands::summary::SummaryArgs;

/// Toggl detailed report converter.
///
/// Rebuilds the rows of a Toggl "Detailed Report" PDF from its positioned
/// text and summarizes hours per week and tag.
#[derive(Debug, Parser)]
#[command(name = "treport", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print hours per week and tag, per week, and per tag.
    Summary(SummaryArgs),

    /// Print one spreadsheet row per report entry.
    Rows(RowsArgs),
}
