//! Positional rows for the spreadsheet export.
//!
//! The spreadsheet writer lives outside this crate; it consumes
//! [`ExportRow::cells`] in column order under [`header`].

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::aggregate::week_of_year;
use crate::entry::TimeEntry;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Settings for the derived export columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Working hours in one day, for the workload column.
    pub hours_per_day: f64,
    /// First week of each reporting period, ascending.
    pub period_starts: Vec<u32>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            hours_per_day: 8.0,
            period_starts: vec![1, 5, 9, 14, 18, 22, 26, 29, 35, 39, 44, 48, 54],
        }
    }
}

impl ExportConfig {
    /// Reporting period a week falls in.
    ///
    /// That is the index of the first period start after `week`; weeks past
    /// every start map to the last index.
    pub fn period_of_week(&self, week: u32) -> usize {
        self.period_starts
            .iter()
            .position(|start| *start > week)
            .unwrap_or_else(|| self.period_starts.len().saturating_sub(1))
    }
}

/// One spreadsheet line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub project: String,
    pub description: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub week: Option<u32>,
    pub period: Option<usize>,
    pub month: Option<u32>,
    pub hours: f64,
    pub days: f64,
    /// Most specific tag first.
    pub tags: Vec<String>,
}

impl ExportRow {
    pub fn from_entry(entry: &TimeEntry, config: &ExportConfig) -> Self {
        let week = entry.start_time.map(|start| week_of_year(start.date()));
        let hours = round2(entry.hours());
        Self {
            project: entry.project.clone().unwrap_or_default(),
            description: entry.description.clone(),
            start: entry.start_time,
            end: entry.end_time,
            week,
            period: week.map(|week| config.period_of_week(week)),
            month: entry.start_time.map(|start| start.month()),
            hours,
            days: round2(hours / config.hours_per_day),
            tags: entry.tags().rev().map(str::to_string).collect(),
        }
    }

    /// Cell values in column order; tags spill into trailing cells.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.project.clone(),
            self.description.clone(),
            format_datetime(self.start),
            format_datetime(self.end),
            format_optional(self.week),
            format_optional(self.period),
            format_optional(self.month),
            self.hours.to_string(),
            self.days.to_string(),
        ];
        cells.extend(self.tags.iter().cloned());
        cells
    }
}

/// Column titles matching [`ExportRow::cells`].
pub fn header(hours_per_day: f64) -> Vec<String> {
    [
        "Project",
        "Description",
        "Start",
        "End",
        "Week",
        "Period",
        "Month",
        "Hours",
    ]
    .into_iter()
    .map(str::to_string)
    .chain([format!("Days (/{hours_per_day}h)"), "Tags".to_string()])
    .collect()
}

/// Builds one row per entry, in entry order.
pub fn export_rows(entries: &[TimeEntry], config: &ExportConfig) -> Vec<ExportRow> {
    entries
        .iter()
        .map(|entry| ExportRow::from_entry(entry, config))
        .collect()
}

/// Rounds to two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
