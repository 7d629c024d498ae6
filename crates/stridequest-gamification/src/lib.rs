// ABOUTME: Gamification scoring engine for workout activity
// ABOUTME: Points, stacked milestone bonuses, rank ladder, weekly streaks, and achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # StrideQuest Gamification
//!
//! Pure, synchronous evaluators over immutable configuration tables. Nothing
//! here performs I/O except loading an achievement catalog from disk, and
//! every evaluation is a deterministic function of its inputs and the
//! reference date it is given.
//!
//! ## Modules
//!
//! - **points**: weighted base points plus milestone bonus
//! - **milestones**: stacked threshold bonuses per stat category
//! - **ranks**: Iron to Diamond ladder and level resolution
//! - **streak**: Sunday-start weekly streak
//! - **activity_window**: weekly counts and streak input from workout records
//! - **achievements**: achievement evaluation and display ordering
//! - **catalog**: built-in and file-loaded achievement catalogs
//! - **comparison**: month-over-month changes
//! - **config**: weights, tables and environment overrides

/// Achievement definitions and evaluation
pub mod achievements;

/// Weekly counts and streak dates derived from workout records
pub mod activity_window;

/// Achievement catalogs
pub mod catalog;

/// Month-over-month comparison
pub mod comparison;

/// Gamification configuration
pub mod config;

/// Milestone bonus tables
pub mod milestones;

/// Point calculation
pub mod points;

/// Rank ladder and level resolution
pub mod ranks;

/// Weekly streak
pub mod streak;

pub use achievements::{
    AchievementDefinition, AchievementEvaluator, AchievementKind, AchievementProgress,
    AchievementResult, AchievementSources,
};
pub use activity_window::ActivityWindow;
pub use catalog::AchievementCatalog;
pub use comparison::{MetricChange, MonthComparison};
pub use config::GamificationConfig;
pub use milestones::{
    AchievedMilestone, BonusSummary, Milestone, MilestoneBonusEvaluator, MilestoneBook,
    MilestoneCategory, MilestoneTable,
};
pub use points::{PointWeights, PointsBreakdown, PointsCalculator};
pub use ranks::{Level, LevelInfo, ProgressionLadder, Rank, RankResolver};
pub use streak::StreakCalculator;
