// ABOUTME: Normalized activity statistics and the lifetime aggregate stored per user
// ABOUTME: Converts stored meters/minutes into the kilometers/hours the scoring engine expects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{finite_or_zero, lenient_count, lenient_f64, non_negative_or_zero};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use serde::{Deserialize, Serialize};

/// Normalized statistics fed to the points and milestone calculators
///
/// `frequency` counts completed workouts in whatever window the caller is
/// scoring (weekly, monthly or lifetime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Distance in kilometers
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance_km: f64,
    /// Training time in hours
    #[serde(default, deserialize_with = "lenient_f64")]
    pub time_hours: f64,
    /// Completed workout count
    #[serde(default, deserialize_with = "lenient_count")]
    pub frequency: u32,
}

impl Stats {
    /// Build stats, replacing non-finite measurements with zero
    #[must_use]
    pub fn new(distance_km: f64, time_hours: f64, frequency: u32) -> Self {
        Self {
            distance_km: finite_or_zero(distance_km),
            time_hours: finite_or_zero(time_hours),
            frequency,
        }
    }
}

/// Lifetime totals as stored by the persistence layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeStats {
    /// Total distance in meters
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_distance: f64,
    /// Total training time in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_time: f64,
    /// Total completed workouts
    #[serde(default, deserialize_with = "lenient_count")]
    pub frequency: u32,
}

impl LifetimeStats {
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
