// ABOUTME: Configuration module for runtime settings of the scoring engine
// ABOUTME: Re-exports the environment loader and the gamification tables it produces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for StrideQuest
//!
//! - **Environment**: weight overrides and the achievement catalog path
//! - **Gamification**: point weights, streak window, milestone tables and rank ladder

/// Environment configuration
pub mod environment;

pub use environment::AppConfig;
pub use stridequest_gamification::GamificationConfig;
