// ABOUTME: Application constants for the StrideQuest engine organized by domain
// ABOUTME: Unit conversion factors, service names, and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants.

/// Unit conversion constants
pub mod units;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library / CLI service name
    pub const STRIDEQUEST: &str = "stridequest";
    /// CLI binary name
    pub const STRIDEQUEST_CLI: &str = "stridequest-cli";
}

/// Environment variable names recognized by the configuration loaders
pub mod env_config {
    /// Points awarded per kilometer
    pub const POINTS_PER_KM: &str = "STRIDEQUEST_POINTS_PER_KM";
    /// Points awarded per hour of training
    pub const POINTS_PER_HOUR: &str = "STRIDEQUEST_POINTS_PER_HOUR";
    /// Points awarded per completed workout
    pub const POINTS_PER_WORKOUT: &str = "STRIDEQUEST_POINTS_PER_WORKOUT";
    /// Trailing window, in days, considered for the streak
    pub const STREAK_WINDOW_DAYS: &str = "STRIDEQUEST_STREAK_WINDOW_DAYS";
    /// Path of a JSON achievement catalog replacing the built-in one
    pub const ACHIEVEMENTS_PATH: &str = "STRIDEQUEST_ACHIEVEMENTS_PATH";
}

/// Scoring defaults
pub mod scoring {
    /// Default points per kilometer
    pub const DEFAULT_POINTS_PER_KM: f64 = 3.0;
    /// Default points per hour
    pub const DEFAULT_POINTS_PER_HOUR: f64 = 2.0;
    /// Default points per completed workout
    pub const DEFAULT_POINTS_PER_WORKOUT: f64 = 1.0;
    /// Default trailing streak window in days
    pub const DEFAULT_STREAK_WINDOW_DAYS: u32 = 30;
    /// Levels in each rank of the standard ladder
    pub const LEVELS_PER_RANK: u32 = 10;
    /// Points spanned by one level of the standard ladder
    pub const POINTS_PER_LEVEL: u32 = 40;
}
