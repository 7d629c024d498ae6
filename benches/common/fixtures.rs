// ABOUTME: Benchmark fixtures for generating realistic workout histories and lifetime totals
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for scorecard inputs.
//!
//! Everything is derived from an index so runs are reproducible.

use chrono::{Days, NaiveDate};
use stridequest::scorecard::ScorecardInput;
use stridequest_core::{LifetimeStats, MonthlyAggregate, WorkoutRecord};

/// Predefined population sizes for batch benchmarks
#[derive(Debug, Clone, Copy)]
pub enum UserBatchSize {
    /// Small population (10 users) - quick benchmarks
    Small,
    /// Medium population (1000 users) - nightly recompute
    Medium,
}

impl UserBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1000,
        }
    }
}

/// Reference date shared by every fixture
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default()
}

/// Workout history of `count` records going back from the reference date
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_workouts(count: usize) -> Vec<WorkoutRecord> {
    let as_of = reference_date();
    (0..count)
        .map(|index| {
            let day = as_of
                .checked_sub_days(Days::new((index * 2) as u64))
                .unwrap_or(as_of);
            WorkoutRecord::new(day.format("%Y-%m-%d").to_string(), index % 5 != 0)
        })
        .collect()
}

/// One user with a history of `workouts` records
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_input(index: usize, workouts: usize) -> ScorecardInput {
    let scale = (index % 97) as f64;
    ScorecardInput {
        lifetime: LifetimeStats {
            total_distance: 5000.0 + scale * 12_500.0,
            total_time: 30.0 + scale * 75.0,
            frequency: 1 + (index % 300) as u32,
        },
        workouts: generate_workouts(workouts),
        current_month: Some(MonthlyAggregate {
            frequency: (index % 25) as u32,
            total_distance: 40_000.0 + scale * 500.0,
            total_time: 240.0 + scale * 3.0,
        }),
        previous_month: (index % 4 != 0).then(|| MonthlyAggregate {
            frequency: (index % 18) as u32,
            total_distance: 35_000.0,
            total_time: 210.0,
        }),
    }
}

/// A population of users with 40-record histories
#[must_use]
pub fn generate_inputs(size: UserBatchSize) -> Vec<ScorecardInput> {
    (0..size.count())
        .map(|index| generate_input(index, 40))
        .collect()
}
