// ABOUTME: Rank command for stridequest-cli
// ABOUTME: Resolves a point total against the configured ladder and prints the level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use stridequest_gamification::GamificationConfig;

/// Reject totals outside the ladder's domain
fn checked_points(points: f64) -> Result<f64> {
    if !points.is_finite() || points < 0.0 {
        bail!("Point total must be a finite, non-negative number, got {points}");
    }
    Ok(points)
}

/// Print rank and level for `points`
pub fn run(points: f64) -> Result<()> {
    let points = checked_points(points)?;
    let config = GamificationConfig::load()?;
    let info = config.rank_resolver().get_current_rank(points);

    println!("Rank:  {} ({})", info.rank, info.icon);
    println!("Level: {}", info.level);
    if let Some(next) = info.next_level_points {
        println!(
            "Progress: {} / {} in rank, {} to next level (at {next})",
            info.current_points, info.total_points_in_rank, info.points_to_next_level
        );
    } else {
        println!("Progress: top of the ladder with {} points", info.current_points);
    }
    Ok(())
}
