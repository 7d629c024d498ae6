// ABOUTME: Configuration error types for scoring tables, ladders, and achievement catalogs
// ABOUTME: Defines error variants raised once at configuration load, never during evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.
//!
//! Evaluation functions never fail: missing numeric inputs are normalized to
//! zero. The only errors in the system describe configuration that cannot be
//! used, and they are surfaced when the configuration is loaded.

use std::io;
use thiserror::Error;

/// Result alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Point weights are unusable (negative or non-finite)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Achievement catalog entry rejected during load
    #[error("Invalid achievement at index {index}: {reason}")]
    InvalidAchievement {
        /// Position of the entry in the catalog
        index: usize,
        /// Why the entry was rejected
        reason: String,
    },

    /// Milestone table is not strictly ascending or has unusable values
    #[error("Invalid milestone table {category}: {reason}")]
    InvalidMilestoneTable {
        /// Category name of the offending table
        category: &'static str,
        /// Why the table was rejected
        reason: String,
    },

    /// Progression ladder does not tile the point line
    #[error("Invalid progression ladder: {0}")]
    InvalidLadder(String),

    /// Catalog or configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog or configuration file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
