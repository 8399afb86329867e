//! Per-row column buffers and the rules that turn them into fields.
//!
//! Fragments are buffered per column in arrival order. At a row boundary each
//! column is finalized into the pending [`TimeEntry`] through [`finalize`],
//! which holds the column-specific rules:
//!
//! - **Task**: `description… project [client]`. With three or more lines the
//!   last is the client and the one before it the project; otherwise the last
//!   line is the project.
//! - **Tag**: lines joined with a space.
//! - **Duration**: lines concatenated and read as `HH:mm:ss`.
//! - **Time**: `[start, "- end", date, …]`, only the first three are read.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::column::ColumnKind;
use crate::entry::TimeEntry;
use crate::error::{ExtractError, FieldError};

const DATE_FORMAT: &str = "%m/%d/%Y";
const TIME_FORMAT: &str = "%I:%M %p";

/// Fragments buffered for the row currently being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuffer {
    columns: [Vec<String>; 4],
}

impl RowBuffer {
    /// Appends a fragment's text to a column.
    pub fn push(&mut self, kind: ColumnKind, text: impl Into<String>) {
        self.columns[kind.index()].push(text.into());
    }

    /// Returns what has been buffered for a column.
    pub fn column(&self, kind: ColumnKind) -> &[String] {
        &self.columns[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Builds the entry for this row without clearing the buffers.
    ///
    /// `page` and `row` only feed the error context.
    pub fn finalize(
        &self,
        page: usize,
        row: usize,
        strict_time_column: bool,
    ) -> Result<TimeEntry, ExtractError> {
        let mut entry = TimeEntry::default();
        for kind in ColumnKind::ALL {
            let buffered = self.column(kind);
            finalize(kind, buffered, &mut entry, strict_time_column).map_err(|source| {
                ExtractError {
                    page,
                    row,
                    column: kind,
                    buffered: buffered.to_vec(),
                    source,
                }
            })?;
        }
        Ok(entry)
    }

    /// Clears every column.
    pub fn reset(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
    }
}

/// Writes the fields derived from one column's buffer into `entry`.
///
/// An empty buffer leaves `entry` untouched.
pub fn finalize(
    kind: ColumnKind,
    buffer: &[String],
    entry: &mut TimeEntry,
    strict_time_column: bool,
) -> Result<(), FieldError> {
    match kind {
        ColumnKind::Task => {
            finalize_task(buffer, entry);
            Ok(())
        }
        ColumnKind::Tag => {
            if !buffer.is_empty() {
                entry.tag = buffer.join(" ");
            }
            Ok(())
        }
        ColumnKind::Duration => finalize_duration(buffer, entry),
        ColumnKind::Time => finalize_time(buffer, entry, strict_time_column),
    }
}

fn finalize_task(buffer: &[String], entry: &mut TimeEntry) {
    match buffer {
        [] => {}
        [description @ .., project, client] if !description.is_empty() => {
            entry.description = description.join(" ");
            entry.project = Some(project.clone());
            entry.client = Some(client.clone());
        }
        [description @ .., project] => {
            entry.description = description.join(" ");
            entry.project = Some(project.clone());
        }
    }
}

fn finalize_duration(buffer: &[String], entry: &mut TimeEntry) -> Result<(), FieldError> {
    if buffer.is_empty() {
        return Ok(());
    }
    let raw = buffer.concat();
    entry.duration = parse_duration(&raw).ok_or(FieldError::Duration { raw })?;
    Ok(())
}

/// Parses `H:mm:ss` (or `H:mm`) into a duration. Hours are not capped at 24.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [hours, minutes, seconds] => (*hours, *minutes, *seconds),
        [hours, minutes] => (*hours, *minutes, "0"),
        _ => return None,
    };

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some(
        Duration::hours(i64::from(hours))
            + Duration::minutes(i64::from(minutes))
            + Duration::seconds(i64::from(seconds)),
    )
}

fn finalize_time(
    buffer: &[String],
    entry: &mut TimeEntry,
    strict_time_column: bool,
) -> Result<(), FieldError> {
    let [start_line, end_line, date_line, ..] = buffer else {
        return Ok(());
    };

    let range = format!("{start_line} {end_line}");
    let parts: Vec<&str> = range.split('-').collect();
    let [start, end] = parts.as_slice() else {
        if strict_time_column {
            return Err(FieldError::MalformedTimeColumn { raw: range });
        }
        tracing::debug!(range = %range, "time range has no single separator, leaving times unset");
        return Ok(());
    };

    let date = NaiveDate::parse_from_str(date_line.trim(), DATE_FORMAT).map_err(|source| {
        FieldError::Date {
            raw: date_line.clone(),
            source,
        }
    })?;

    entry.start_time = Some(parse_clock(start, date)?);
    entry.end_time = Some(parse_clock(end, date)?);
    Ok(())
}

fn parse_clock(raw: &str, date: NaiveDate) -> Result<NaiveDateTime, FieldError> {
    let raw = raw.trim();
    let time = NaiveTime::parse_from_str(raw, TIME_FORMAT).map_err(|source| FieldError::Time {
        raw: raw.to_string(),
        source,
    })?;
    Ok(date.and_time(time))
}
