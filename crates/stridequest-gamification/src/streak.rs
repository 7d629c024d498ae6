// ABOUTME: Weekly-bucket streak over recent completed workouts
// ABOUTME: Counts leading dates that stay in the same Sunday-start week as the previous one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Streak calculation
//!
//! The streak is not a count of consecutive calendar days. Starting from the
//! most recent completed workout, each following date extends the streak while
//! it falls in the same Sunday-start week as the date counted before it; the
//! first date outside that week ends the walk.

use chrono::{Datelike, Days, NaiveDate};

/// First day (Sunday) of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Whether both dates fall in the same Sunday-start week
#[must_use]
pub fn is_same_week(first: NaiveDate, second: NaiveDate) -> bool {
    week_start(first) == week_start(second)
}

/// Derives the current streak from completed-workout dates
pub struct StreakCalculator;

impl StreakCalculator {
    /// Streak length for `completed_dates`, which must be sorted most recent first
    #[must_use]
    pub fn compute_streak(completed_dates: &[NaiveDate]) -> u32 {
        let mut streak = 0;
        let mut previous: Option<NaiveDate> = None;

        for &date in completed_dates {
            match previous {
                Some(prev) if !is_same_week(date, prev) => break,
                _ => {
                    streak += 1;
                    previous = Some(date);
                }
            }
        }

        streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-06-12 is a Wednesday
        assert_eq!(week_start(date(2024, 6, 12)), date(2024, 6, 9));
        assert_eq!(week_start(date(2024, 6, 9)), date(2024, 6, 9));
        assert_eq!(week_start(date(2024, 6, 15)), date(2024, 6, 9));
    }

    #[test]
    fn test_saturday_and_sunday_split_weeks() {
        assert!(!is_same_week(date(2024, 6, 15), date(2024, 6, 16)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(StreakCalculator::compute_streak(&[]), 0);
    }

    #[test]
    fn test_single_date() {
        assert_eq!(StreakCalculator::compute_streak(&[date(2024, 1, 1)]), 1);
    }
}
