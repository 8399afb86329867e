//! Hour totals by week and tag.
//!
//! Weeks are numbered the way spreadsheet users of the report expect: weeks
//! start on Monday and week 1 is the (possibly partial) week containing
//! January 1st. The last days of December can therefore fall in week 53 or
//! 54 rather than rolling into the next ISO year.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::entry::TimeEntry;

/// Hours spent on one tag during one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTagSummary {
    pub week: u32,
    pub tag: String,
    pub hours: f64,
}

/// Hours spent during one week, all tags combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub week: u32,
    pub hours: f64,
}

/// Hours spent on one tag over the whole report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub tag: String,
    pub hours: f64,
}

/// The three aggregate views of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub weekly_tags: Vec<WeeklyTagSummary>,
    pub weekly_totals: Vec<WeeklyTotal>,
    pub period_totals: Vec<PeriodTotal>,
    /// Hours of entries with no start time, which have no week.
    pub undated_hours: f64,
}

/// Week number of `date`, Monday-first, week 1 containing January 1st.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_monday();
    // Days between the Monday that opens week 1 and January 1st.
    let jan1_offset = (weekday + 7 - ordinal0 % 7) % 7;
    (ordinal0 + jan1_offset) / 7 + 1
}

/// Sums values per key, keeping keys in first-seen order.
fn sum_by_key<K, I>(items: I) -> Vec<(K, f64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut totals: Vec<(K, f64)> = Vec::new();
    for (key, value) in items {
        if let Some(&i) = index.get(&key) {
            totals[i].1 += value;
        } else {
            index.insert(key.clone(), totals.len());
            totals.push((key, value));
        }
    }
    totals
}

/// Groups entries by (week of start time, tag) and sums their hours.
///
/// Ordered by week; groups within a week keep first-seen order. Entries with
/// no start time cannot be placed in a week and are left out; their hours
/// are reported by [`undated_hours`] and still count in [`period_totals`].
pub fn weekly_tag_summary(entries: &[TimeEntry]) -> Vec<WeeklyTagSummary> {
    let keyed = entries.iter().filter_map(|entry| {
        let Some(start) = entry.start_time else {
            tracing::warn!(
                project = ?entry.project,
                description = %entry.description,
                "entry has no start time, counting it as undated"
            );
            return None;
        };
        Some(((week_of_year(start.date()), entry.tag.clone()), entry.hours()))
    });

    let mut summaries: Vec<WeeklyTagSummary> = sum_by_key(keyed)
        .into_iter()
        .map(|((week, tag), hours)| WeeklyTagSummary { week, tag, hours })
        .collect();
    summaries.sort_by_key(|summary| summary.week);
    summaries
}

/// Sums weekly-tag groups per week.
pub fn weekly_totals(summaries: &[WeeklyTagSummary]) -> Vec<WeeklyTotal> {
    sum_by_key(summaries.iter().map(|s| (s.week, s.hours)))
        .into_iter()
        .map(|(week, hours)| WeeklyTotal { week, hours })
        .collect()
}

/// Sums entry hours per tag over the whole report, dated or not.
///
/// Tags keep first-seen order.
pub fn period_totals(entries: &[TimeEntry]) -> Vec<PeriodTotal> {
    sum_by_key(entries.iter().map(|e| (e.tag.clone(), e.hours())))
        .into_iter()
        .map(|(tag, hours)| PeriodTotal { tag, hours })
        .collect()
}

/// Total hours of entries that have no start time.
pub fn undated_hours(entries: &[TimeEntry]) -> f64 {
    entries
        .iter()
        .filter(|e| e.start_time.is_none())
        .map(TimeEntry::hours)
        .sum()
}

/// Computes all three views from scratch.
pub fn summarize(entries: &[TimeEntry]) -> Summary {
    let weekly_tags = weekly_tag_summary(entries);
    let weekly_totals = weekly_totals(&weekly_tags);
    let period_totals = period_totals(entries);
    Summary {
        weekly_tags,
        weekly_totals,
        period_totals,
        undated_hours: undated_hours(entries),
    }
}
