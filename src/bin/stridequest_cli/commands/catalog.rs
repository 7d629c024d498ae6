// ABOUTME: Catalog commands for stridequest-cli
// ABOUTME: Lists the achievement catalog in use and validates catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use std::path::Path;
use stridequest::config::AppConfig;
use stridequest_gamification::AchievementCatalog;
use tracing::info;

/// Print every definition of the catalog at `path`, or the configured one
pub fn list(path: Option<&Path>) -> Result<()> {
    let catalog = match path {
        Some(path) => AchievementCatalog::from_path(path)?,
        None => AppConfig::from_env()?.achievements,
    };

    println!("{:<18} {:>10}  {:<22} Description", "Type", "Requirement", "Title");
    println!("{}", "=".repeat(80));
    for definition in catalog.definitions() {
        println!(
            "{:<18} {:>10}  {:<22} {}",
            definition.kind, definition.requirement, definition.title, definition.description
        );
    }
    println!("\n{} achievements", catalog.len());
    Ok(())
}

/// Load `path` and report whether it is a usable catalog
pub fn validate(path: &Path) -> Result<()> {
    let catalog = AchievementCatalog::from_path(path)?;
    info!(path = %path.display(), "Catalog validated");
    println!(
        "Catalog OK: {} achievements in {}",
        catalog.len(),
        path.display()
    );
    Ok(())
}
