// ABOUTME: Score command for stridequest-cli
// ABOUTME: Reads scorecard inputs from JSON and prints the evaluated scorecards as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use stridequest::config::AppConfig;
use stridequest::scorecard::{ScorecardEngine, ScorecardInput};
use tracing::info;

/// A file holds either one user or a list of users
#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Batch(Vec<ScorecardInput>),
    Single(Box<ScorecardInput>),
}

/// Evaluate the inputs in `input` and print the result
pub fn run(input: &Path, as_of: Option<NaiveDate>, compact: bool) -> Result<()> {
    let config = AppConfig::from_env()?;
    let engine = ScorecardEngine::from_config(&config);
    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());

    let contents = fs::read_to_string(input)
        .map_err(|e| anyhow!("Failed to read {}: {e}", input.display()))?;
    let document: InputDocument = serde_json::from_str(&contents)
        .map_err(|e| anyhow!("Invalid scorecard input in {}: {e}", input.display()))?;

    let output = match document {
        InputDocument::Single(single) => {
            info!(input = %input.display(), %as_of, "Scoring single user");
            serde_json::to_value(engine.evaluate(&single, as_of))?
        }
        InputDocument::Batch(batch) => {
            info!(input = %input.display(), %as_of, users = batch.len(), "Scoring batch");
            serde_json::to_value(engine.evaluate_batch(&batch, as_of))?
        }
    };

    let rendered = if compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");
    Ok(())
}
