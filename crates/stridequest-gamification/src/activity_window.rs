// ABOUTME: Derives weekly counts and streak input from raw workout records
// ABOUTME: Filters completed workouts into the current week and a trailing day window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::streak::{is_same_week, StreakCalculator};
use chrono::{Days, NaiveDate};
use std::cmp::Reverse;
use stridequest_core::WorkoutRecord;
use tracing::warn;

/// View of a workout history relative to a reference date
///
/// The reference date is explicit so evaluation stays deterministic; callers
/// normally pass today's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    as_of: NaiveDate,
    window_days: u32,
}

impl ActivityWindow {
    /// Window ending on `as_of` and reaching back `window_days` days
    #[must_use]
    pub const fn new(as_of: NaiveDate, window_days: u32) -> Self {
        Self {
            as_of,
            window_days,
        }
    }

    /// Reference date
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Dates of completed workouts, in input order
    ///
    /// Records whose date cannot be parsed are skipped.
    #[must_use]
    pub fn completed_dates(records: &[WorkoutRecord]) -> Vec<NaiveDate> {
        records
            .iter()
            .filter(|record| record.completed)
            .filter_map(|record| {
                let parsed = record.workout_date();
                if parsed.is_none() {
                    warn!(date = %record.date, "Skipping workout with unparseable date");
                }
                parsed
            })
            .collect()
    }

    /// Completed workouts in the Sunday-start week containing the reference date
    #[must_use]
    pub fn weekly_count(&self, records: &[WorkoutRecord]) -> u32 {
        let count = Self::completed_dates(records)
            .into_iter()
            .filter(|date| is_same_week(*date, self.as_of))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Completed workout dates inside the trailing window, most recent first
    #[must_use]
    pub fn streak_dates(&self, records: &[WorkoutRecord]) -> Vec<NaiveDate> {
        let window_start = self
            .as_of
            .checked_sub_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MIN);

        let mut dates: Vec<NaiveDate> = Self::completed_dates(records)
            .into_iter()
            .filter(|date| (window_start..=self.as_of).contains(date))
            .collect();
        dates.sort_by_key(|date| Reverse(*date));
        dates
    }

    /// Streak over the trailing window
    #[must_use]
    pub fn current_streak(&self, records: &[WorkoutRecord]) -> u32 {
        StreakCalculator::compute_streak(&self.streak_dates(records))
    }
}
