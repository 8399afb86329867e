//! Finalized report rows.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the detailed report, built at a row boundary.
///
/// Fields whose column had no fragments keep their default: empty strings,
/// `None` for optional fields and for the start/end times, and a zero
/// duration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub description: String,
    pub client: Option<String>,
    pub project: Option<String>,
    /// Tag cell as printed; multiple tags stay comma-separated.
    pub tag: String,
    #[serde(with = "duration_secs")]
    pub duration: Duration,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl TimeEntry {
    /// Duration in fractional hours.
    #[allow(clippy::cast_precision_loss)]
    pub fn hours(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 3_600_000.0
    }

    /// Individual tags of the tag cell, trimmed, in printed order.
    pub fn tags(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.tag
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Serializes a duration as whole seconds.
mod duration_secs {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs).ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_converts_duration() {
        let entry = TimeEntry {
            duration: Duration::minutes(90),
            ..TimeEntry::default()
        };
        assert!((entry.hours() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn tags_split_on_commas() {
        let entry = TimeEntry {
            tag: "Client A, Billable,".to_string(),
            ..TimeEntry::default()
        };
        assert_eq!(entry.tags().collect::<Vec<_>>(), vec!["Client A", "Billable"]);
    }

    #[test]
    fn serde_stores_duration_as_seconds() {
        let entry = TimeEntry {
            project: Some("Website".to_string()),
            duration: Duration::seconds(5400),
            ..TimeEntry::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["duration"], 5400);

        let parsed: TimeEntry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, entry);
    }
}
