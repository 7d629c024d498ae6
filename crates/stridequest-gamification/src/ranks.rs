// ABOUTME: Rank ladder (Iron to Diamond) with ten 40-point levels per rank
// ABOUTME: Resolves a cumulative point total into rank, level, and progress to the next level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rank and level resolution
//!
//! A ladder is an ordered list of ranks, each split into contiguous level
//! buckets starting at zero. Resolution walks the ranks, subtracting each
//! rank's span from the running remainder until the remainder fits inside a
//! rank. Totals beyond the last rank resolve to a terminal state that echoes
//! the raw total rather than the remainder.

use serde::{Deserialize, Serialize};
use stridequest_core::constants::scoring::{LEVELS_PER_RANK, POINTS_PER_LEVEL};
use stridequest_core::{ConfigError, ConfigResult};

/// One point bucket inside a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// 1-based level number within the rank
    pub id: u32,
    /// First in-rank point value of the bucket
    pub min_points: u32,
    /// Last in-rank point value of the bucket
    pub max_points: u32,
}

impl Level {
    /// Fractional totals belong to the bucket of their integer part
    fn contains(&self, points: f64) -> bool {
        f64::from(self.min_points) <= points && points < f64::from(self.max_points) + 1.0
    }
}

/// A named tier of the ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Display name
    pub name: String,
    /// Icon identifier
    pub icon: String,
    /// Display color
    pub color: String,
    /// Contiguous level buckets
    pub levels: Vec<Level>,
}

impl Rank {
    /// Rank with `level_count` equal buckets of `points_per_level` points
    #[must_use]
    pub fn with_uniform_levels(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        level_count: u32,
        points_per_level: u32,
    ) -> Self {
        let levels = (1..=level_count)
            .map(|id| Level {
                id,
                min_points: (id - 1).saturating_mul(points_per_level),
                max_points: id.saturating_mul(points_per_level).saturating_sub(1),
            })
            .collect();
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            levels,
        }
    }

    /// Points covered by the rank
    #[must_use]
    pub fn span(&self) -> u32 {
        self.levels.last().map_or(0, |level| level.max_points.saturating_add(1))
    }
}

/// Ordered ranks tiling the non-negative point line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rank>", into = "Vec<Rank>")]
pub struct ProgressionLadder {
    ranks: Vec<Rank>,
}

impl ProgressionLadder {
    /// Build a validated ladder
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidLadder` when there are no ranks, a rank has
    /// no levels, level ids are not numbered from 1, or buckets leave gaps or
    /// overlap.
    pub fn new(ranks: Vec<Rank>) -> ConfigResult<Self> {
        if ranks.is_empty() {
            return Err(ConfigError::InvalidLadder("ladder has no ranks".into()));
        }

        for rank in &ranks {
            if rank.levels.is_empty() {
                return Err(ConfigError::InvalidLadder(format!(
                    "rank {} has no levels",
                    rank.name
                )));
            }

            let mut next_min = 0_u32;
            for (expected_id, level) in (1_u32..).zip(&rank.levels) {
                if level.id != expected_id {
                    return Err(ConfigError::InvalidLadder(format!(
                        "rank {} level {} should be numbered {expected_id}",
                        rank.name, level.id
                    )));
                }
                if level.min_points != next_min || level.max_points < level.min_points {
                    return Err(ConfigError::InvalidLadder(format!(
                        "rank {} level {} does not continue from {next_min}",
                        rank.name, level.id
                    )));
                }
                next_min = level.max_points.saturating_add(1);
            }
        }

        Ok(Self { ranks })
    }

    /// Iron, Bronze, Silver, Gold and Diamond, ten 40-point levels each
    #[must_use]
    pub fn standard() -> Self {
        let tiers = [
            ("Iron", "shield", "#6B6B6B"),
            ("Bronze", "medal", "#CD7F32"),
            ("Silver", "award", "#C0C0C0"),
            ("Gold", "trophy", "#FFD700"),
            ("Diamond", "gem", "#7DF9FF"),
        ];
        Self {
            ranks: tiers
                .into_iter()
                .map(|(name, icon, color)| {
                    Rank::with_uniform_levels(name, icon, color, LEVELS_PER_RANK, POINTS_PER_LEVEL)
                })
                .collect(),
        }
    }

    /// Ranks in ascending order
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Points covered by all ranks together
    #[must_use]
    pub fn total_span(&self) -> u64 {
        self.ranks.iter().map(|rank| u64::from(rank.span())).sum()
    }

    /// Position of the rank named `name`
    #[must_use]
    pub fn rank_index(&self, name: &str) -> Option<usize> {
        self.ranks.iter().position(|rank| rank.name == name)
    }
}

impl Default for ProgressionLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Rank>> for ProgressionLadder {
    type Error = ConfigError;

    fn try_from(ranks: Vec<Rank>) -> Result<Self, Self::Error> {
        Self::new(ranks)
    }
}

impl From<ProgressionLadder> for Vec<Rank> {
    fn from(ladder: ProgressionLadder) -> Self {
        ladder.ranks
    }
}

/// Position of a point total on the ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    /// Rank name
    pub rank: String,
    /// Level id within the rank
    pub level: u32,
    /// Rank icon
    pub icon: String,
    /// Rank color
    pub color: String,
    /// In-rank points, or the raw total in the terminal state
    pub current_points: f64,
    /// Points still needed to reach the next level, 0 in the terminal state
    pub points_to_next_level: f64,
    /// In-rank point value where the next level starts, `None` in the terminal state
    pub next_level_points: Option<u32>,
    /// Points covered by the rank
    pub total_points_in_rank: u32,
}

impl LevelInfo {
    fn within(rank: &Rank, level: &Level, remaining: f64) -> Self {
        Self {
            rank: rank.name.clone(),
            level: level.id,
            icon: rank.icon.clone(),
            color: rank.color.clone(),
            current_points: remaining,
            points_to_next_level: f64::from(level.max_points) - remaining + 1.0,
            next_level_points: Some(level.max_points.saturating_add(1)),
            total_points_in_rank: rank.span(),
        }
    }

    fn terminal(rank: &Rank, total_points: f64) -> Self {
        Self {
            rank: rank.name.clone(),
            level: rank.levels.last().map_or(0, |level| level.id),
            icon: rank.icon.clone(),
            color: rank.color.clone(),
            current_points: total_points,
            points_to_next_level: 0.0,
            next_level_points: None,
            total_points_in_rank: rank.span(),
        }
    }

    /// Whether the total is past the top of the ladder
    #[must_use]
    pub const fn is_max_level(&self) -> bool {
        self.next_level_points.is_none()
    }
}

/// Maps point totals onto a progression ladder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankResolver {
    ladder: ProgressionLadder,
}

impl RankResolver {
    /// Create a resolver over `ladder`
    #[must_use]
    pub const fn new(ladder: ProgressionLadder) -> Self {
        Self { ladder }
    }

    /// Ladder in use
    #[must_use]
    pub const fn ladder(&self) -> &ProgressionLadder {
        &self.ladder
    }

    /// Resolve `total_points` to a rank and level
    ///
    /// Callers must pass a non-negative finite total. Anything else resolves
    /// to the terminal state.
    #[must_use]
    pub fn get_current_rank(&self, total_points: f64) -> LevelInfo {
        let mut remaining = total_points;

        for rank in self.ladder.ranks() {
            let span = f64::from(rank.span());
            if remaining < span {
                if let Some(level) = rank.levels.iter().find(|level| level.contains(remaining)) {
                    return LevelInfo::within(rank, level, remaining);
                }
                break;
            }
            remaining -= span;
        }

        self.ladder.ranks().last().map_or_else(
            || LevelInfo {
                rank: String::new(),
                level: 0,
                icon: String::new(),
                color: String::new(),
                current_points: total_points,
                points_to_next_level: 0.0,
                next_level_points: None,
                total_points_in_rank: 0,
            },
            |top| LevelInfo::terminal(top, total_points),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ladder_spans() {
        let ladder = ProgressionLadder::standard();
        assert_eq!(ladder.ranks().len(), 5);
        assert!(ladder.ranks().iter().all(|rank| rank.span() == 400));
        assert_eq!(ladder.total_span(), 2000);
        assert_eq!(ladder.ranks()[0].levels[9].max_points, 399);
    }

    #[test]
    fn test_level_boundaries() {
        let resolver = RankResolver::default();
        let info = resolver.get_current_rank(39.0);
        assert_eq!(info.level, 1);
        assert!((info.points_to_next_level - 1.0).abs() < f64::EPSILON);
        assert_eq!(info.next_level_points, Some(40));
        assert_eq!(resolver.get_current_rank(40.0).level, 2);
    }

    #[test]
    fn test_fractional_total_uses_integer_bucket() {
        let info = RankResolver::default().get_current_rank(79.5);
        assert_eq!(info.level, 2);
        assert!((info.points_to_next_level - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_gapped_ladder() {
        let mut rank = Rank::with_uniform_levels("Solo", "x", "#000", 3, 10);
        rank.levels[2].min_points = 25;
        assert!(matches!(
            ProgressionLadder::new(vec![rank]),
            Err(ConfigError::InvalidLadder(_))
        ));
        assert!(ProgressionLadder::new(Vec::new()).is_err());
    }

    #[test]
    fn test_custom_ladder_resolution() {
        let ladder = ProgressionLadder::new(vec![
            Rank::with_uniform_levels("Rookie", "r", "#111", 2, 50),
            Rank::with_uniform_levels("Pro", "p", "#222", 2, 50),
        ])
        .unwrap();
        let resolver = RankResolver::new(ladder);

        let info = resolver.get_current_rank(150.0);
        assert_eq!(info.rank, "Pro");
        assert_eq!(info.level, 2);
        assert!((info.current_points - 50.0).abs() < f64::EPSILON);

        let top = resolver.get_current_rank(200.0);
        assert!(top.is_max_level());
        assert_eq!(top.level, 2);
        assert!((top.current_points - 200.0).abs() < f64::EPSILON);
    }
}
