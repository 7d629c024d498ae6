// ABOUTME: Workout record as read from storage: an ISO-8601 date and a completion flag
// ABOUTME: Parses timestamps and plain dates into calendar dates for weekly bucketing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Naive timestamp layout accepted in addition to RFC 3339
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Plain calendar date layout
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single scheduled or logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// ISO-8601 date or timestamp
    pub date: String,
    /// Whether the workout was completed
    #[serde(default)]
    pub completed: bool,
}

impl WorkoutRecord {
    /// Create a record
    #[must_use]
    pub fn new(date: impl Into<String>, completed: bool) -> Self {
        Self {
            date: date.into(),
            completed,
        }
    }

    /// Calendar date of the workout
    ///
    /// Timestamps with an offset keep the calendar date of that offset.
    /// Returns `None` when the date cannot be parsed.
    #[must_use]
    pub fn workout_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive());
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT) {
            return Some(timestamp.date());
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_supported_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(
            WorkoutRecord::new("2024-03-09T18:30:00Z", true).workout_date(),
            expected
        );
        assert_eq!(
            WorkoutRecord::new("2024-03-09T23:30:00-05:00", true).workout_date(),
            expected
        );
        assert_eq!(
            WorkoutRecord::new("2024-03-09T07:15:00.250", true).workout_date(),
            expected
        );
        assert_eq!(WorkoutRecord::new("2024-03-09", false).workout_date(), expected);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(WorkoutRecord::new("last tuesday", true).workout_date(), None);
        assert_eq!(WorkoutRecord::new("", true).workout_date(), None);
    }
}
