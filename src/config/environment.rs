// ABOUTME: Environment configuration for the scoring engine and command-line tool
// ABOUTME: Loads gamification tables, weight overrides, and an optional achievement catalog file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use stridequest_core::constants::env_config;
use stridequest_core::ConfigResult;
use stridequest_gamification::{AchievementCatalog, GamificationConfig};
use tracing::info;

/// Complete runtime configuration, validated at load
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Weights, streak window, milestone tables and ladder
    pub gamification: GamificationConfig,
    /// File the achievement catalog was read from, `None` for the built-in catalog
    pub achievements_path: Option<PathBuf>,
    /// Achievement catalog
    pub achievements: AchievementCatalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gamification: GamificationConfig::default(),
            achievements_path: None,
            achievements: AchievementCatalog::standard(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a weight override is invalid or the catalog file
    /// named by the environment cannot be read or validated
    pub fn from_env() -> ConfigResult<Self> {
        info!("Loading configuration from environment variables");
        let path = env_path(env_config::ACHIEVEMENTS_PATH);
        Self::load(path.as_deref())
    }

    /// Load gamification settings from the environment and the catalog from
    /// `achievements_path`, or the built-in catalog when `None`
    ///
    /// # Errors
    ///
    /// Returns an error if a weight override is invalid or the catalog file
    /// cannot be read or validated
    pub fn load(achievements_path: Option<&Path>) -> ConfigResult<Self> {
        let gamification = GamificationConfig::load()?;
        let achievements = match achievements_path {
            Some(path) => AchievementCatalog::from_path(path)?,
            None => AchievementCatalog::standard(),
        };

        let config = Self {
            gamification,
            achievements_path: achievements_path.map(Path::to_path_buf),
            achievements,
        };
        info!("{}", config.summary());
        Ok(config)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let weights = &self.gamification.points;
        format!(
            "StrideQuest Configuration:\n\
             - Points per km: {}\n\
             - Points per hour: {}\n\
             - Points per workout: {}\n\
             - Streak window: {} days\n\
             - Ranks: {}\n\
             - Achievements: {} ({})",
            weights.per_km,
            weights.per_hour,
            weights.per_workout,
            self.gamification.streak_window_days,
            self.gamification.ladder.ranks().len(),
            self.achievements.len(),
            self.achievements_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
        )
    }
}

/// Non-empty environment variable as a path
fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
