//! Column geometry of the detailed report.
//!
//! The report lays its table out at fixed horizontal offsets. Each text
//! fragment is routed to a logical column by its x position alone; anything
//! outside the configured ranges (including the gap between the tag and
//! duration columns, which holds the amount column) is dropped.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Logical table column a fragment can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Description, project and client lines.
    Task,
    Tag,
    Duration,
    /// Start/end clock times and the date.
    Time,
}

impl ColumnKind {
    /// All columns, in finalize order.
    pub const ALL: [Self; 4] = [Self::Task, Self::Tag, Self::Duration, Self::Time];

    /// Position of this column in per-column arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Task => 0,
            Self::Tag => 1,
            Self::Duration => 2,
            Self::Time => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Tag => "tag",
            Self::Duration => "duration",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open horizontal ranges (in points) for each routed column.
///
/// Ranges must not overlap. The defaults match the Toggl "Detailed Report"
/// PDF export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub task: Range<f32>,
    pub tag: Range<f32>,
    pub duration: Range<f32>,
    pub time: Range<f32>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            task: 30.0..221.0,
            tag: 221.0..328.0,
            // 328..411 is the amount column, intentionally unassigned
            duration: 411.0..500.0,
            time: 500.0..532.0,
        }
    }
}

impl ColumnLayout {
    /// Returns the range configured for `kind`.
    #[must_use]
    pub const fn range(&self, kind: ColumnKind) -> &Range<f32> {
        match kind {
            ColumnKind::Task => &self.task,
            ColumnKind::Tag => &self.tag,
            ColumnKind::Duration => &self.duration,
            ColumnKind::Time => &self.time,
        }
    }

    /// Maps a horizontal position to its column, or `None` if unassigned.
    #[must_use]
    pub fn classify(&self, x: f32) -> Option<ColumnKind> {
        ColumnKind::ALL
            .into_iter()
            .find(|kind| self.range(*kind).contains(&x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_routes_each_default_range() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.classify(35.0), Some(ColumnKind::Task));
        assert_eq!(layout.classify(250.0), Some(ColumnKind::Tag));
        assert_eq!(layout.classify(450.0), Some(ColumnKind::Duration));
        assert_eq!(layout.classify(510.0), Some(ColumnKind::Time));
    }

    #[test]
    fn classify_boundaries_are_half_open() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.classify(30.0), Some(ColumnKind::Task));
        assert_eq!(layout.classify(220.9), Some(ColumnKind::Task));
        assert_eq!(layout.classify(221.0), Some(ColumnKind::Tag));
        assert_eq!(layout.classify(411.0), Some(ColumnKind::Duration));
        assert_eq!(layout.classify(500.0), Some(ColumnKind::Time));
        assert_eq!(layout.classify(531.9), Some(ColumnKind::Time));
    }

    #[test]
    fn classify_drops_outside_and_gap() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.classify(29.9), None);
        assert_eq!(layout.classify(532.0), None);
        assert_eq!(layout.classify(328.0), None);
        assert_eq!(layout.classify(410.9), None);
        assert_eq!(layout.classify(-5.0), None);
    }

    #[test]
    fn layout_deserializes_partial_override() {
        let layout: ColumnLayout =
            serde_json::from_str(r#"{"time": {"start": 500.0, "end": 560.0}}"#).unwrap();
        assert_eq!(layout.classify(550.0), Some(ColumnKind::Time));
        assert_eq!(layout.task, ColumnLayout::default().task);
    }

    #[test]
    fn column_kind_index_matches_all_order() {
        for (i, kind) in ColumnKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(ColumnKind::Duration.to_string(), "duration");
    }
}
