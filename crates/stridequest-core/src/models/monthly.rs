// ABOUTME: Monthly aggregate document rolled up by the persistence layer
// ABOUTME: Feeds the monthly frequency achievement and month-over-month comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{lenient_count, lenient_f64, non_negative_or_zero, Stats};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use serde::{Deserialize, Serialize};

/// Pre-aggregated totals for one calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    /// Completed workouts in the month
    #[serde(default, deserialize_with = "lenient_count")]
    pub frequency: u32,
    /// Distance in meters
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_distance: f64,
    /// Training time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_time: f64,
}

impl MonthlyAggregate {
    /// Convert meters/minutes into kilometers/hours
    ///
    /// Negative stored totals count as zero.
    #[must_use]
    pub fn to_stats(&self) -> Stats {
        Stats::new(
            non_negative_or_zero(self.total_distance) / METERS_PER_KM,
            non_negative_or_zero(self.total_time) / MINUTES_PER_HOUR,
            self.frequency,
        )
    }
}
