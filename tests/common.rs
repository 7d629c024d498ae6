// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, date helpers, and workout/stats fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stridequest`

use chrono::{Days, NaiveDate};
use std::env;
use std::sync::Once;
use stridequest::scorecard::ScorecardInput;
use stridequest_core::constants::env_config;
use stridequest_core::{LifetimeStats, MonthlyAggregate, WorkoutRecord};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `days` days before `from`
pub fn days_before(from: NaiveDate, days: u64) -> NaiveDate {
    from.checked_sub_days(Days::new(days)).unwrap()
}

/// Completed workout on `day`
pub fn completed(day: NaiveDate) -> WorkoutRecord {
    WorkoutRecord::new(day.format("%Y-%m-%d").to_string(), true)
}

/// Lifetime stats document from kilometers and hours
pub fn lifetime(distance_km: f64, time_hours: f64, frequency: u32) -> LifetimeStats {
    LifetimeStats {
        total_distance: distance_km * 1000.0,
        total_time: time_hours * 60.0,
        frequency,
    }
}

/// Monthly aggregate from kilometers and hours
pub fn month(frequency: u32, distance_km: f64, time_hours: f64) -> MonthlyAggregate {
    MonthlyAggregate {
        frequency,
        total_distance: distance_km * 1000.0,
        total_time: time_hours * 60.0,
    }
}

/// A varied user for batch tests, deterministic in `seed`
pub fn sample_input(seed: u32, as_of: NaiveDate) -> ScorecardInput {
    let workouts = (0..seed % 12)
        .map(|offset| completed(days_before(as_of, u64::from(offset * 2))))
        .collect();
    ScorecardInput {
        lifetime: lifetime(
            f64::from(seed) * 7.5,
            f64::from(seed) * 1.25,
            seed * 3,
        ),
        workouts,
        current_month: (seed % 3 != 0).then(|| month(seed % 20, f64::from(seed), 4.0)),
        previous_month: (seed % 2 == 0).then(|| month(seed % 15, 12.0, 3.0)),
    }
}

/// Remove every scoring override from the process environment
pub fn clear_scoring_env() {
    for key in [
        env_config::POINTS_PER_KM,
        env_config::POINTS_PER_HOUR,
        env_config::POINTS_PER_WORKOUT,
        env_config::STREAK_WINDOW_DAYS,
        env_config::ACHIEVEMENTS_PATH,
    ] {
        env::remove_var(key);
    }
}
