// ABOUTME: Activity data models consumed by the scoring engine
// ABOUTME: Stats, lifetime and monthly aggregates, workout records, and lenient number decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity data models.
//!
//! Records arrive from the persistence layer as loosely typed documents. The
//! decoders in this module accept missing, `null`, string-encoded or
//! otherwise non-numeric values and normalize them to zero, so scoring never
//! has to deal with malformed numbers. Stored measurements are never negative:
//! a negative distance, time or count decodes as zero.

mod monthly;
mod stats;
mod workout;

pub use monthly::MonthlyAggregate;
pub use stats::{LifetimeStats, Stats};
pub use workout::WorkoutRecord;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Replace NaN and infinities with zero
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Replace NaN, infinities and negative values with zero
#[must_use]
pub fn non_negative_or_zero(value: f64) -> f64 {
    let value = finite_or_zero(value);
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

fn value_to_f64(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().map_or(0.0, non_negative_or_zero),
        Value::String(text) => text.trim().parse::<f64>().map_or(0.0, non_negative_or_zero),
        _ => 0.0,
    }
}

/// Decode a measurement, coercing anything non-numeric or negative to `0.0`
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a value at all.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value))
}

/// Decode a workout count, coercing anything non-numeric or negative to `0`
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a value at all.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = value_to_f64(&value);
    if count <= 0.0 {
        return Ok(0);
    }
    Ok(count.min(f64::from(u32::MAX)).floor() as u32)
}
