//! Parse failures raised while finalizing a row.

use thiserror::Error;

use crate::column::ColumnKind;

/// A column buffer could not be converted into its typed field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The duration cell is not an `HH:mm:ss` value.
    #[error("invalid duration: {raw:?}")]
    Duration { raw: String },

    /// The date line is not an `MM/dd/yyyy` value.
    #[error("invalid date: {raw:?}")]
    Date {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A start or end time is not a 12-hour `hh:mm AM/PM` value.
    #[error("invalid time: {raw:?}")]
    Time {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The time range did not split into exactly a start and an end.
    #[error("malformed time range: {raw:?}")]
    MalformedTimeColumn { raw: String },
}

/// A row failed to finalize.
///
/// Carries where the row sits in the document and what was buffered for the
/// failing column, so a broken export can be traced back to the PDF.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to read {column} column of row {row} on page {page} (buffered: {buffered:?})")]
pub struct ExtractError {
    /// 1-based page number.
    pub page: usize,
    /// 0-based row index within the page.
    pub row: usize,
    pub column: ColumnKind,
    pub buffered: Vec<String>,
    #[source]
    pub source: FieldError,
}
