// ABOUTME: Gamification configuration: point weights, streak window, milestone tables, rank ladder
// ABOUTME: Built from defaults, overridden by environment variables, validated once at load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::activity_window::ActivityWindow;
use crate::milestones::{MilestoneBonusEvaluator, MilestoneBook};
use crate::points::{PointWeights, PointsCalculator};
use crate::ranks::{ProgressionLadder, RankResolver};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use stridequest_core::constants::env_config;
use stridequest_core::constants::scoring::DEFAULT_STREAK_WINDOW_DAYS;
use stridequest_core::{ConfigError, ConfigResult};
use tracing::debug;

/// Immutable tables and weights for one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationConfig {
    /// Points per unit of distance, time and workouts
    pub points: PointWeights,
    /// Days before the reference date considered for the streak
    pub streak_window_days: u32,
    /// Milestone bonus tables
    pub milestones: MilestoneBook,
    /// Rank ladder
    pub ladder: ProgressionLadder,
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            points: PointWeights::default(),
            streak_window_days: DEFAULT_STREAK_WINDOW_DAYS,
            milestones: MilestoneBook::standard(),
            ladder: ProgressionLadder::standard(),
        }
    }
}

impl GamificationConfig {
    /// Load defaults with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> ConfigResult<Self> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            per_km = config.points.per_km,
            per_hour = config.points.per_hour,
            per_workout = config.points.per_workout,
            streak_window_days = config.streak_window_days,
            "Gamification config loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` for unusable point weights and
    /// `ConfigError::ValueOutOfRange` for an empty streak window.
    pub fn validate(&self) -> ConfigResult<()> {
        self.points.validate()?;
        if self.streak_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "streak_window_days must be greater than 0",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> ConfigResult<()> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> ConfigResult<Self> {
        Self::apply_env_var(env_config::POINTS_PER_KM, &mut self.points.per_km)?;
        Self::apply_env_var(env_config::POINTS_PER_HOUR, &mut self.points.per_hour)?;
        Self::apply_env_var(
            env_config::POINTS_PER_WORKOUT,
            &mut self.points.per_workout,
        )?;
        Self::apply_env_var(
            env_config::STREAK_WINDOW_DAYS,
            &mut self.streak_window_days,
        )?;
        Ok(self)
    }

    /// Points calculator over these weights and milestone tables
    #[must_use]
    pub fn points_calculator(&self) -> PointsCalculator {
        PointsCalculator::new(
            self.points,
            MilestoneBonusEvaluator::new(self.milestones.clone()),
        )
    }

    /// Rank resolver over this ladder
    #[must_use]
    pub fn rank_resolver(&self) -> RankResolver {
        RankResolver::new(self.ladder.clone())
    }

    /// Activity window ending on `as_of`
    #[must_use]
    pub const fn activity_window(&self, as_of: NaiveDate) -> ActivityWindow {
        ActivityWindow::new(as_of, self.streak_window_days)
    }
}
