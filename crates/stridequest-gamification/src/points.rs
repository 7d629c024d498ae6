// ABOUTME: Base point calculation from distance, time, and workout count plus milestone bonus
// ABOUTME: Weighted linear sum with configurable weights; non-numeric inputs count as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Point calculation
//!
//! `base = distance_km * per_km + time_hours * per_hour + frequency * per_workout`
//! and the total adds the stacked milestone bonus for the same stats.

use crate::milestones::{BonusSummary, MilestoneBonusEvaluator};
use serde::{Deserialize, Serialize};
use stridequest_core::constants::scoring::{
    DEFAULT_POINTS_PER_HOUR, DEFAULT_POINTS_PER_KM, DEFAULT_POINTS_PER_WORKOUT,
};
use stridequest_core::{ConfigError, ConfigResult, Stats};

/// Points awarded per unit of each stat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointWeights {
    /// Points per kilometer
    pub per_km: f64,
    /// Points per hour of training
    pub per_hour: f64,
    /// Points per completed workout
    pub per_workout: f64,
}

impl Default for PointWeights {
    fn default() -> Self {
        Self {
            per_km: DEFAULT_POINTS_PER_KM,
            per_hour: DEFAULT_POINTS_PER_HOUR,
            per_workout: DEFAULT_POINTS_PER_WORKOUT,
        }
    }
}

impl PointWeights {
    /// Check every weight is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first unusable weight.
    pub fn validate(&self) -> ConfigResult<()> {
        let usable = |weight: f64| weight.is_finite() && weight >= 0.0;
        if !usable(self.per_km) {
            return Err(ConfigError::InvalidWeights("per_km must be finite and >= 0"));
        }
        if !usable(self.per_hour) {
            return Err(ConfigError::InvalidWeights(
                "per_hour must be finite and >= 0",
            ));
        }
        if !usable(self.per_workout) {
            return Err(ConfigError::InvalidWeights(
                "per_workout must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Base points, bonus and their sum for one set of stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// Weighted sum of the raw stats
    pub base_points: f64,
    /// Stacked milestone bonus
    pub bonus: BonusSummary,
    /// `base_points + bonus.bonus_points`
    pub total_points: f64,
}

/// Converts normalized stats into a point total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsCalculator {
    weights: PointWeights,
    milestones: MilestoneBonusEvaluator,
}

impl PointsCalculator {
    /// Create a calculator with explicit weights and milestone tables
    #[must_use]
    pub const fn new(weights: PointWeights, milestones: MilestoneBonusEvaluator) -> Self {
        Self {
            weights,
            milestones,
        }
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> &PointWeights {
        &self.weights
    }

    /// Milestone evaluator in use
    #[must_use]
    pub const fn milestones(&self) -> &MilestoneBonusEvaluator {
        &self.milestones
    }

    /// Weighted sum without milestone bonus
    #[must_use]
    pub fn base_points(&self, stats: &Stats) -> f64 {
        f64::from(stats.frequency).mul_add(
            self.weights.per_workout,
            stats
                .distance_km
                .mul_add(self.weights.per_km, stats.time_hours * self.weights.per_hour),
        )
    }

    /// Total points for the given raw stats
    ///
    /// NaN and infinite measurements are treated as zero.
    #[must_use]
    pub fn calculate_points(&self, distance_km: f64, time_hours: f64, frequency: u32) -> f64 {
        self.breakdown(&Stats::new(distance_km, time_hours, frequency))
            .total_points
    }

    /// Base points, bonus and total for `stats`
    #[must_use]
    pub fn breakdown(&self, stats: &Stats) -> PointsBreakdown {
        let stats = Stats::new(stats.distance_km, stats.time_hours, stats.frequency);
        let base_points = self.base_points(&stats);
        let bonus = self.milestones.calculate_bonus_points(&stats);
        let total_points = base_points + bonus.bonus_points;
        PointsBreakdown {
            base_points,
            bonus,
            total_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stats_score_zero() {
        let calculator = PointsCalculator::default();
        assert!(calculator.calculate_points(0.0, 0.0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_weights() {
        let calculator = PointsCalculator::default();
        let base = calculator.base_points(&Stats::new(2.0, 1.5, 3));
        assert!((base - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let weights = PointWeights {
            per_hour: -1.0,
            ..PointWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
