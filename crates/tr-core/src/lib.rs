//! Core logic for converting Toggl detailed reports.
//!
//! This crate contains:
//! - Column routing: mapping fragment x positions to report columns
//! - Row reassembly: turning a page's positioned text into [`TimeEntry`] rows
//! - Aggregation: hour totals per week and tag
//! - Export: positional rows for a spreadsheet writer
//!
//! Decoding the PDF into [`TextFragment`]s is left to the caller.

pub mod accumulator;
pub mod aggregate;
mod column;
mod entry;
mod error;
pub mod export;
mod fragment;
pub mod reassembly;

pub use accumulator::RowBuffer;
pub use aggregate::{PeriodTotal, Summary, WeeklyTagSummary, WeeklyTotal, summarize, week_of_year};
pub use column::{ColumnKind, ColumnLayout};
pub use entry::TimeEntry;
pub use error::{ExtractError, FieldError};
pub use export::{ExportConfig, ExportRow, export_rows};
pub use fragment::TextFragment;
pub use reassembly::{ExtractConfig, PageReassembler, Sentinels, extract_page, extract_pages};
