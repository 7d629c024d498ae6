// ABOUTME: Achievement definitions, progress sources, and the sorted evaluation of a catalog
// ABOUTME: Dispatches on a closed set of achievement kinds; incomplete goals sort by progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Achievement evaluation
//!
//! Each definition reads its current value from one of five sources. Results
//! are ordered for display: incomplete achievements first by descending
//! progress percentage, completed achievements last in catalog order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use stridequest_core::constants::units::PERCENT;
use stridequest_core::Stats;
use tracing::debug;

/// Stat source an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    /// Completed workouts in the current week
    WeeklyFrequency,
    /// Frequency from the current monthly aggregate
    MonthlyFrequency,
    /// Lifetime distance in kilometers
    TotalDistance,
    /// Lifetime training time in hours
    TotalTime,
    /// Weekly-bucket streak
    Streak,
}

impl AchievementKind {
    /// Every kind
    pub const ALL: [Self; 5] = [
        Self::WeeklyFrequency,
        Self::MonthlyFrequency,
        Self::TotalDistance,
        Self::TotalTime,
        Self::Streak,
    ];

    /// Stable snake-case tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeeklyFrequency => "weekly_frequency",
            Self::MonthlyFrequency => "monthly_frequency",
            Self::TotalDistance => "total_distance",
            Self::TotalTime => "total_time",
            Self::Streak => "streak",
        }
    }
}

impl fmt::Display for AchievementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AchievementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown achievement type '{s}'"))
    }
}

/// A named goal from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    /// Stat source
    #[serde(rename = "type")]
    pub kind: AchievementKind,
    /// Value the source must reach
    pub requirement: f64,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Icon identifier
    pub icon: String,
}

impl AchievementDefinition {
    /// Create a definition
    #[must_use]
    pub fn new(
        kind: AchievementKind,
        requirement: f64,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            requirement,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// Current value against the requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    /// Value read from the source
    pub current: f64,
    /// Requirement
    pub total: f64,
}

impl AchievementProgress {
    /// Progress as a percentage
    ///
    /// A zero requirement counts as 100% once anything has been recorded.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total.abs() < f64::EPSILON {
            return if self.current > 0.0 { PERCENT } else { 0.0 };
        }
        self.current / self.total * PERCENT
    }
}

/// Evaluated achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementResult {
    /// Catalog definition
    #[serde(flatten)]
    pub definition: AchievementDefinition,
    /// `progress.current >= requirement`
    pub is_completed: bool,
    /// Current value and requirement
    pub progress: AchievementProgress,
}

/// Values every achievement kind reads from
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSources {
    /// Completed workouts this week
    pub weekly_count: u32,
    /// Frequency of the current monthly aggregate
    pub monthly_frequency: u32,
    /// Lifetime stats in kilometers and hours
    pub lifetime: Stats,
    /// Current streak
    pub streak: u32,
}

impl AchievementSources {
    /// Current value for `kind`
    #[must_use]
    pub fn current_for(&self, kind: AchievementKind) -> f64 {
        match kind {
            AchievementKind::WeeklyFrequency => f64::from(self.weekly_count),
            AchievementKind::MonthlyFrequency => f64::from(self.monthly_frequency),
            AchievementKind::TotalDistance => self.lifetime.distance_km,
            AchievementKind::TotalTime => self.lifetime.time_hours,
            AchievementKind::Streak => f64::from(self.streak),
        }
    }
}

/// Evaluates achievement definitions against a user's sources
pub struct AchievementEvaluator;

impl AchievementEvaluator {
    /// Evaluate one definition
    #[must_use]
    pub fn evaluate(
        definition: &AchievementDefinition,
        sources: &AchievementSources,
    ) -> AchievementResult {
        let current = sources.current_for(definition.kind);
        AchievementResult {
            definition: definition.clone(),
            is_completed: current >= definition.requirement,
            progress: AchievementProgress {
                current,
                total: definition.requirement,
            },
        }
    }

    /// Evaluate and order every definition
    #[must_use]
    pub fn evaluate_achievements(
        definitions: &[AchievementDefinition],
        sources: &AchievementSources,
    ) -> Vec<AchievementResult> {
        let mut results: Vec<AchievementResult> = definitions
            .iter()
            .map(|definition| Self::evaluate(definition, sources))
            .collect();

        // stable: completed entries keep catalog order
        results.sort_by(display_order);

        debug!(
            total = results.len(),
            completed = results.iter().filter(|result| result.is_completed).count(),
            "Achievements evaluated"
        );
        results
    }
}

fn display_order(a: &AchievementResult, b: &AchievementResult) -> Ordering {
    match (a.is_completed, b.is_completed) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => b
            .progress
            .percentage()
            .total_cmp(&a.progress.percentage()),
    }
}
