// ABOUTME: Achievement catalog: built-in definitions and validated loading from JSON
// ABOUTME: Malformed entries are rejected once at load time, never during evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::achievements::{
    AchievementDefinition, AchievementEvaluator, AchievementKind, AchievementResult,
    AchievementSources,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use stridequest_core::{ConfigError, ConfigResult};
use tracing::info;

/// Catalog entry as written in a JSON file, before validation
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    requirement: Option<Value>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

impl CatalogEntry {
    fn into_definition(self, index: usize) -> ConfigResult<AchievementDefinition> {
        let invalid = |reason: String| ConfigError::InvalidAchievement { index, reason };

        let kind = self
            .kind
            .ok_or_else(|| invalid("missing type".into()))?
            .parse::<AchievementKind>()
            .map_err(invalid)?;

        let requirement = match self.requirement {
            None | Some(Value::Null) => return Err(invalid("missing requirement".into())),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| invalid(format!("requirement {value} is not a number")))?,
        };

        Ok(AchievementDefinition {
            kind,
            requirement,
            title: self.title,
            description: self.description,
            icon: self.icon,
        })
    }
}

/// Ordered set of achievement definitions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AchievementCatalog {
    definitions: Vec<AchievementDefinition>,
}

impl AchievementCatalog {
    /// Build a catalog, checking every requirement is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAchievement` for the first unusable entry.
    pub fn new(definitions: Vec<AchievementDefinition>) -> ConfigResult<Self> {
        for (index, definition) in definitions.iter().enumerate() {
            if !definition.requirement.is_finite() || definition.requirement < 0.0 {
                return Err(ConfigError::InvalidAchievement {
                    index,
                    reason: format!("requirement {} is not usable", definition.requirement),
                });
            }
        }
        Ok(Self { definitions })
    }

    /// Built-in catalog
    #[must_use]
    pub fn standard() -> Self {
        use AchievementKind::{MonthlyFrequency, Streak, TotalDistance, TotalTime, WeeklyFrequency};

        let entries: [(AchievementKind, f64, &str, &str, &str); 12] = [
            (
                WeeklyFrequency,
                3.0,
                "Three a Week",
                "Complete 3 workouts in a single week",
                "calendar-check",
            ),
            (
                WeeklyFrequency,
                5.0,
                "Weekday Warrior",
                "Complete 5 workouts in a single week",
                "calendar-star",
            ),
            (
                MonthlyFrequency,
                12.0,
                "Monthly Regular",
                "Complete 12 workouts in a month",
                "calendar-month",
            ),
            (
                MonthlyFrequency,
                20.0,
                "Month of Motion",
                "Complete 20 workouts in a month",
                "calendar-heart",
            ),
            (
                TotalDistance,
                42.195,
                "Marathon Distance",
                "Cover 42.195 km in total",
                "route",
            ),
            (
                TotalDistance,
                100.0,
                "Century",
                "Cover 100 km in total",
                "map",
            ),
            (
                TotalDistance,
                500.0,
                "Road Warrior",
                "Cover 500 km in total",
                "globe",
            ),
            (
                TotalTime,
                10.0,
                "Ten Hours In",
                "Train for 10 hours in total",
                "clock",
            ),
            (
                TotalTime,
                50.0,
                "Fifty Hours Strong",
                "Train for 50 hours in total",
                "hourglass",
            ),
            (
                TotalTime,
                100.0,
                "Centurion",
                "Train for 100 hours in total",
                "timer",
            ),
            (
                Streak,
                3.0,
                "Hat Trick",
                "Log 3 workouts in a row within the same week",
                "flame",
            ),
            (
                Streak,
                7.0,
                "Unstoppable",
                "Log 7 workouts in a row within the same week",
                "zap",
            ),
        ];

        Self {
            definitions: entries
                .into_iter()
                .map(|(kind, requirement, title, description, icon)| {
                    AchievementDefinition::new(kind, requirement, title, description, icon)
                })
                .collect(),
        }
    }

    /// Parse and validate a JSON array of definitions
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and
    /// `ConfigError::InvalidAchievement` for entries with a missing or unknown
    /// `type`, or a missing, non-numeric, negative or non-finite `requirement`.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        let definitions = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.into_definition(index))
            .collect::<ConfigResult<Vec<_>>>()?;
        Self::new(definitions)
    }

    /// Read and validate a catalog file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            achievements = catalog.len(),
            "Achievement catalog loaded"
        );
        Ok(catalog)
    }

    /// Definitions in catalog order
    #[must_use]
    pub fn definitions(&self) -> &[AchievementDefinition] {
        &self.definitions
    }

    /// Number of definitions
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog has no definitions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Evaluate the whole catalog against `sources`
    #[must_use]
    pub fn evaluate(&self, sources: &AchievementSources) -> Vec<AchievementResult> {
        AchievementEvaluator::evaluate_achievements(&self.definitions, sources)
    }
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_standard_catalog_covers_every_kind() {
        let catalog = AchievementCatalog::standard();
        for kind in AchievementKind::ALL {
            assert!(catalog.definitions().iter().any(|d| d.kind == kind));
        }
        assert!(AchievementCatalog::new(catalog.definitions().to_vec()).is_ok());
    }

    #[test]
    fn test_missing_type_reports_index() {
        let json = r#"[
            {"type": "streak", "requirement": 2, "title": "ok"},
            {"requirement": 4, "title": "no type"}
        ]"#;
        let err = AchievementCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAchievement { index: 1, .. }
        ));
    }

    #[test]
    fn test_missing_or_null_requirement_rejected() {
        for json in [
            r#"[{"type": "total_time"}]"#,
            r#"[{"type": "total_time", "requirement": null}]"#,
            r#"[{"type": "total_time", "requirement": "ten"}]"#,
            r#"[{"type": "total_time", "requirement": -1}]"#,
        ] {
            assert!(matches!(
                AchievementCatalog::from_json_str(json),
                Err(ConfigError::InvalidAchievement { index: 0, .. })
            ));
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err =
            AchievementCatalog::from_json_str(r#"[{"type": "yearly", "requirement": 1}]"#)
                .unwrap_err();
        assert!(err.to_string().contains("yearly"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"type": "weekly_frequency", "requirement": 2, "title": "Twice", "description": "", "icon": "x"}}]"#
        )
        .unwrap();

        let catalog = AchievementCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.definitions()[0].title, "Twice");
    }
}
