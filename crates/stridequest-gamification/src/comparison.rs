// ABOUTME: Month-over-month comparison of monthly aggregate documents
// ABOUTME: Reports frequency, distance and time with a percent change against the prior month
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use stridequest_core::constants::units::PERCENT;
use stridequest_core::MonthlyAggregate;

/// One metric compared across two months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    /// Value this month
    pub current: f64,
    /// Value last month
    pub previous: f64,
    /// Percent change; 100 when starting from zero, 0 when both are zero
    pub change_percent: f64,
}

impl MetricChange {
    /// Compare `current` against `previous`
    #[must_use]
    pub fn new(current: f64, previous: f64) -> Self {
        let change_percent = if previous.abs() < f64::EPSILON {
            if current > 0.0 {
                PERCENT
            } else {
                0.0
            }
        } else {
            (current - previous) / previous * PERCENT
        };
        Self {
            current,
            previous,
            change_percent,
        }
    }
}

/// Frequency, distance (km) and time (hours) compared across two months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthComparison {
    /// Completed workouts
    pub frequency: MetricChange,
    /// Distance in kilometers
    pub distance_km: MetricChange,
    /// Training time in hours
    pub time_hours: MetricChange,
}

impl MonthComparison {
    /// Compare two monthly aggregates
    #[must_use]
    pub fn compare(current: &MonthlyAggregate, previous: &MonthlyAggregate) -> Self {
        let now = current.to_stats();
        let before = previous.to_stats();
        Self {
            frequency: MetricChange::new(f64::from(now.frequency), f64::from(before.frequency)),
            distance_km: MetricChange::new(now.distance_km, before.distance_km),
            time_hours: MetricChange::new(now.time_hours, before.time_hours),
        }
    }
}
