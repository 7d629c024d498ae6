// ABOUTME: Main library entry point for the StrideQuest gamification engine
// ABOUTME: Wires configuration, logging, and per-user scorecard evaluation together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # StrideQuest
//!
//! Turns raw workout activity into points, ranks, streaks and achievements.
//!
//! ## Architecture
//!
//! - **`stridequest-core`**: configuration errors, activity models, unit constants
//! - **`stridequest-gamification`**: the scoring evaluators and their tables
//! - **Config**: environment overrides and achievement catalog loading
//! - **Logging**: structured `tracing` output
//! - **Scorecard**: one-call evaluation of a user, or a parallel batch
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use stridequest::config::AppConfig;
//! use stridequest::scorecard::{ScorecardEngine, ScorecardInput};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let engine = ScorecardEngine::from_config(&config);
//!     let as_of = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default();
//!     let card = engine.evaluate(&ScorecardInput::default(), as_of);
//!     println!("{} level {}", card.level.rank, card.level.level);
//!     Ok(())
//! }
//! ```

/// Runtime configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Scorecard evaluation
pub mod scorecard;
