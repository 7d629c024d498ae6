// ABOUTME: Scorecard engine combining points, rank, streak, achievements and month comparison
// ABOUTME: Evaluates one user or a batch of users in parallel against shared immutable tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Per-user scorecard evaluation
//!
//! Lifetime stats drive points and rank. The workout history, relative to an
//! explicit reference date, drives the weekly count and the streak. The
//! current monthly aggregate feeds the monthly achievement and, together with
//! the previous one, the month comparison.

use crate::config::AppConfig;
use crate::logging::ScoringLogger;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use stridequest_core::{LifetimeStats, MonthlyAggregate, WorkoutRecord};
use stridequest_gamification::{
    AchievementCatalog, AchievementResult, AchievementSources, GamificationConfig, LevelInfo,
    MonthComparison, PointsBreakdown, PointsCalculator, RankResolver,
};

/// Everything the engine reads for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardInput {
    /// Lifetime totals in meters and minutes
    #[serde(default)]
    pub lifetime: LifetimeStats,
    /// Workout history in any order
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
    /// Aggregate for the month containing the reference date
    #[serde(default)]
    pub current_month: Option<MonthlyAggregate>,
    /// Aggregate for the month before
    #[serde(default)]
    pub previous_month: Option<MonthlyAggregate>,
}

/// Evaluated scorecard for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Base points, milestone bonus and total
    pub points: PointsBreakdown,
    /// Rank and level for the total
    pub level: LevelInfo,
    /// Achievements in display order
    pub achievements: Vec<AchievementResult>,
    /// Weekly-bucket streak
    pub streak: u32,
    /// Completed workouts in the current week
    pub weekly_count: u32,
    /// Present when a current monthly aggregate was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_comparison: Option<MonthComparison>,
}

/// Evaluates scorecards against one configuration and catalog
///
/// The engine holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct ScorecardEngine {
    config: GamificationConfig,
    calculator: PointsCalculator,
    resolver: RankResolver,
    catalog: AchievementCatalog,
}

impl Default for ScorecardEngine {
    fn default() -> Self {
        Self::new(GamificationConfig::default(), AchievementCatalog::standard())
    }
}

impl ScorecardEngine {
    /// Build an engine from gamification settings and an achievement catalog
    #[must_use]
    pub fn new(config: GamificationConfig, catalog: AchievementCatalog) -> Self {
        Self {
            calculator: config.points_calculator(),
            resolver: config.rank_resolver(),
            config,
            catalog,
        }
    }

    /// Build an engine from a loaded application configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.gamification.clone(), config.achievements.clone())
    }

    /// Gamification settings in use
    #[must_use]
    pub const fn config(&self) -> &GamificationConfig {
        &self.config
    }

    /// Achievement catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Points calculator in use
    #[must_use]
    pub const fn calculator(&self) -> &PointsCalculator {
        &self.calculator
    }

    /// Rank resolver in use
    #[must_use]
    pub const fn resolver(&self) -> &RankResolver {
        &self.resolver
    }

    /// Evaluate one user relative to `as_of`
    #[must_use]
    pub fn evaluate(&self, input: &ScorecardInput, as_of: NaiveDate) -> Scorecard {
        let lifetime = input.lifetime.to_stats();
        let points = self.calculator.breakdown(&lifetime);
        let level = self.resolver.get_current_rank(points.total_points);

        let window = self.config.activity_window(as_of);
        let weekly_count = window.weekly_count(&input.workouts);
        let streak = window.current_streak(&input.workouts);

        let sources = AchievementSources {
            weekly_count,
            monthly_frequency: input.current_month.map_or(0, |month| month.frequency),
            lifetime,
            streak,
        };
        let achievements = self.catalog.evaluate(&sources);

        let month_comparison = input.current_month.map(|current| {
            MonthComparison::compare(&current, &input.previous_month.unwrap_or_default())
        });

        ScoringLogger::log_scorecard(
            points.total_points,
            &level.rank,
            level.level,
            achievements.iter().filter(|a| a.is_completed).count(),
        );

        Scorecard {
            points,
            level,
            achievements,
            streak,
            weekly_count,
            month_comparison,
        }
    }

    /// Evaluate many users in parallel, preserving input order
    #[must_use]
    pub fn evaluate_batch(&self, inputs: &[ScorecardInput], as_of: NaiveDate) -> Vec<Scorecard> {
        let started = Instant::now();
        let scorecards: Vec<Scorecard> = inputs
            .par_iter()
            .map(|input| self.evaluate(input, as_of))
            .collect();
        ScoringLogger::log_batch(
            scorecards.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        scorecards
    }
}
