// ABOUTME: Core types and constants for the StrideQuest gamification engine
// ABOUTME: Foundation crate with configuration errors, activity models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # StrideQuest Core
//!
//! Foundation crate providing the shared types consumed by the scoring engine.
//! Records in this crate are produced by the persistence layer and are only
//! read here; nothing in the crate performs I/O apart from catalog loading
//! errors it describes.
//!
//! ## Modules
//!
//! - **errors**: `ConfigError`, the single error type raised at configuration load
//! - **constants**: unit conversion factors and service names
//! - **models**: stats, monthly aggregates and workout records

/// Configuration error taxonomy
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Activity data models consumed by the scoring engine
pub mod models;

pub use errors::{ConfigError, ConfigResult};
pub use models::{LifetimeStats, MonthlyAggregate, Stats, WorkoutRecord};
