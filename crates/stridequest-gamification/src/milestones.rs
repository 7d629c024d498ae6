// ABOUTME: Milestone tables per stat category and the stacking bonus evaluator
// ABOUTME: Every threshold at or below the stat value contributes its bonus, not just the highest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Milestone bonus evaluation
//!
//! Milestones are fixed thresholds over a single stat category. A user who has
//! covered 100 km collects the 10, 25, 50 and 100 km bonuses together: tables
//! are scanned entry by entry and membership is independent. Downstream point
//! totals depend on this stacking, so it must not be collapsed into a
//! "highest tier only" lookup.

use serde::{Deserialize, Serialize};
use stridequest_core::{ConfigError, ConfigResult, Stats};
use tracing::debug;

/// Stat category a milestone table is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneCategory {
    /// Completed workout count
    Frequency,
    /// Training time in hours
    Time,
    /// Distance in kilometers
    Distance,
}

impl MilestoneCategory {
    /// All categories in evaluation order
    pub const ALL: [Self; 3] = [Self::Frequency, Self::Time, Self::Distance];

    /// Stable upper-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frequency => "FREQUENCY",
            Self::Time => "TIME",
            Self::Distance => "DISTANCE",
        }
    }

    /// Value of this category in `stats`
    #[must_use]
    pub fn stat_value(self, stats: &Stats) -> f64 {
        match self {
            Self::Frequency => f64::from(stats.frequency),
            Self::Time => stats.time_hours,
            Self::Distance => stats.distance_km,
        }
    }
}

/// A single bonus threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Stat value required to reach the milestone
    pub amount: f64,
    /// Bonus points granted once reached
    pub bonus: f64,
    /// Display text
    pub description: String,
}

impl Milestone {
    /// Create a milestone
    #[must_use]
    pub fn new(amount: f64, bonus: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            bonus,
            description: description.into(),
        }
    }
}

/// A milestone reached by the evaluated stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievedMilestone {
    /// Category of the table the milestone belongs to
    pub category: MilestoneCategory,
    /// Threshold that was reached
    pub amount: f64,
    /// Bonus granted
    pub bonus: f64,
    /// Display text
    pub description: String,
}

/// Sum of all reached milestone bonuses and the milestones themselves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusSummary {
    /// Total bonus points
    pub bonus_points: f64,
    /// Every milestone reached, grouped by table in evaluation order
    pub milestones: Vec<AchievedMilestone>,
}

/// Ascending milestone thresholds for one category
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneTable {
    category: MilestoneCategory,
    milestones: Vec<Milestone>,
}

impl MilestoneTable {
    /// Build a validated table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMilestoneTable` when an amount or bonus is
    /// negative or non-finite, or when amounts are not strictly ascending.
    pub fn new(category: MilestoneCategory, milestones: Vec<Milestone>) -> ConfigResult<Self> {
        let invalid = |reason: String| ConfigError::InvalidMilestoneTable {
            category: category.as_str(),
            reason,
        };

        let mut previous: Option<f64> = None;
        for milestone in &milestones {
            if !milestone.amount.is_finite() || milestone.amount < 0.0 {
                return Err(invalid(format!("amount {} is not usable", milestone.amount)));
            }
            if !milestone.bonus.is_finite() || milestone.bonus < 0.0 {
                return Err(invalid(format!("bonus {} is not usable", milestone.bonus)));
            }
            if previous.is_some_and(|amount| milestone.amount <= amount) {
                return Err(invalid(format!(
                    "amount {} is not above the previous threshold",
                    milestone.amount
                )));
            }
            previous = Some(milestone.amount);
        }

        Ok(Self {
            category,
            milestones,
        })
    }

    /// Category of this table
    #[must_use]
    pub const fn category(&self) -> MilestoneCategory {
        self.category
    }

    /// Thresholds in ascending order
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Every milestone whose amount is at or below `value`
    pub fn reached(&self, value: f64) -> impl Iterator<Item = &Milestone> + '_ {
        self.milestones
            .iter()
            .filter(move |milestone| value >= milestone.amount)
    }

    fn from_entries(category: MilestoneCategory, entries: &[(f64, f64, &str)]) -> Self {
        Self {
            category,
            milestones: entries
                .iter()
                .map(|&(amount, bonus, description)| Milestone::new(amount, bonus, description))
                .collect(),
        }
    }
}

/// Serialized form of a milestone book, validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MilestoneBookDocument {
    frequency: Vec<Milestone>,
    time: Vec<Milestone>,
    distance: Vec<Milestone>,
}

/// The three milestone tables evaluated together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MilestoneBookDocument", into = "MilestoneBookDocument")]
pub struct MilestoneBook {
    frequency: MilestoneTable,
    time: MilestoneTable,
    distance: MilestoneTable,
}

impl MilestoneBook {
    /// Build a book from validated tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMilestoneTable` if a table is passed for
    /// the wrong category.
    pub fn new(
        frequency: MilestoneTable,
        time: MilestoneTable,
        distance: MilestoneTable,
    ) -> ConfigResult<Self> {
        let expected = [
            (&frequency, MilestoneCategory::Frequency),
            (&time, MilestoneCategory::Time),
            (&distance, MilestoneCategory::Distance),
        ];
        for (table, category) in expected {
            if table.category() != category {
                return Err(ConfigError::InvalidMilestoneTable {
                    category: category.as_str(),
                    reason: format!("received a {} table", table.category().as_str()),
                });
            }
        }
        Ok(Self {
            frequency,
            time,
            distance,
        })
    }

    /// Default tables used in production
    #[must_use]
    pub fn standard() -> Self {
        Self {
            frequency: MilestoneTable::from_entries(
                MilestoneCategory::Frequency,
                &[
                    (1.0, 2.0, "First workout completed"),
                    (5.0, 5.0, "5 workouts completed"),
                    (10.0, 10.0, "10 workouts completed"),
                    (25.0, 20.0, "25 workouts completed"),
                    (50.0, 40.0, "50 workouts completed"),
                    (100.0, 75.0, "100 workouts completed"),
                    (250.0, 150.0, "250 workouts completed"),
                ],
            ),
            time: MilestoneTable::from_entries(
                MilestoneCategory::Time,
                &[
                    (5.0, 5.0, "5 hours of training"),
                    (10.0, 10.0, "10 hours of training"),
                    (25.0, 20.0, "25 hours of training"),
                    (50.0, 40.0, "50 hours of training"),
                    (100.0, 75.0, "100 hours of training"),
                    (250.0, 150.0, "250 hours of training"),
                ],
            ),
            distance: MilestoneTable::from_entries(
                MilestoneCategory::Distance,
                &[
                    (10.0, 5.0, "10 km covered"),
                    (25.0, 10.0, "25 km covered"),
                    (50.0, 20.0, "50 km covered"),
                    (100.0, 40.0, "100 km covered"),
                    (250.0, 75.0, "250 km covered"),
                    (500.0, 150.0, "500 km covered"),
                    (1000.0, 300.0, "1000 km covered"),
                ],
            ),
        }
    }

    /// Table for `category`
    #[must_use]
    pub const fn table(&self, category: MilestoneCategory) -> &MilestoneTable {
        match category {
            MilestoneCategory::Frequency => &self.frequency,
            MilestoneCategory::Time => &self.time,
            MilestoneCategory::Distance => &self.distance,
        }
    }

    /// Tables in evaluation order
    pub fn tables(&self) -> impl Iterator<Item = &MilestoneTable> {
        MilestoneCategory::ALL
            .into_iter()
            .map(move |category| self.table(category))
    }
}

impl Default for MilestoneBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<MilestoneBookDocument> for MilestoneBook {
    type Error = ConfigError;

    fn try_from(document: MilestoneBookDocument) -> Result<Self, Self::Error> {
        Self::new(
            MilestoneTable::new(MilestoneCategory::Frequency, document.frequency)?,
            MilestoneTable::new(MilestoneCategory::Time, document.time)?,
            MilestoneTable::new(MilestoneCategory::Distance, document.distance)?,
        )
    }
}

impl From<MilestoneBook> for MilestoneBookDocument {
    fn from(book: MilestoneBook) -> Self {
        Self {
            frequency: book.frequency.milestones,
            time: book.time.milestones,
            distance: book.distance.milestones,
        }
    }
}

/// Sums bonus points for every milestone threshold reached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneBonusEvaluator {
    book: MilestoneBook,
}

impl MilestoneBonusEvaluator {
    /// Create an evaluator over `book`
    #[must_use]
    pub const fn new(book: MilestoneBook) -> Self {
        Self { book }
    }

    /// Milestone tables in use
    #[must_use]
    pub const fn book(&self) -> &MilestoneBook {
        &self.book
    }

    /// Evaluate every entry of every table against `stats`
    #[must_use]
    pub fn calculate_bonus_points(&self, stats: &Stats) -> BonusSummary {
        let mut summary = BonusSummary::default();

        for table in self.book.tables() {
            let value = table.category().stat_value(stats);
            for milestone in table.reached(value) {
                summary.bonus_points += milestone.bonus;
                summary.milestones.push(AchievedMilestone {
                    category: table.category(),
                    amount: milestone.amount,
                    bonus: milestone.bonus,
                    description: milestone.description.clone(),
                });
            }
        }

        debug!(
            bonus_points = summary.bonus_points,
            achieved = summary.milestones.len(),
            "Milestone bonus evaluated"
        );
        summary
    }
}
