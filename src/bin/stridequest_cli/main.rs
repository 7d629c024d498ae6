// ABOUTME: StrideQuest CLI - command-line front end for the gamification engine
// ABOUTME: Scores JSON input files, resolves point totals, and inspects achievement catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score one user (object) or many users (array) from a JSON file
//! stridequest-cli score --input users.json --as-of 2024-06-12
//!
//! # Resolve a point total to a rank and level
//! stridequest-cli rank --points 1234.5
//!
//! # Show the built-in achievement catalog, or one loaded from a file
//! stridequest-cli catalog list
//! stridequest-cli catalog list --path achievements.json
//!
//! # Check a catalog file without scoring anything
//! stridequest-cli catalog validate --path achievements.json
//! ```

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stridequest::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "stridequest-cli",
    about = "StrideQuest gamification CLI",
    long_about = "Evaluate points, ranks, streaks and achievements from workout data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate scorecards from a JSON input file
    Score {
        /// Input file holding one scorecard input object or an array of them
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference date for weekly counts and streaks (defaults to today, UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Print compact JSON instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },

    /// Resolve a point total to a rank and level
    Rank {
        /// Cumulative point total
        #[arg(long, short = 'p')]
        points: f64,
    },

    /// Achievement catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// Print the catalog in evaluation order
    List {
        /// Catalog file (defaults to the configured or built-in catalog)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Load and validate a catalog file
    Validate {
        /// Catalog file to check
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("StrideQuest CLI");

    match cli.command {
        Command::Score {
            input,
            as_of,
            compact,
        } => commands::score::run(&input, as_of, compact)?,
        Command::Rank { points } => commands::rank::run(points)?,
        Command::Catalog { action } => match action {
            CatalogCommand::List { path } => commands::catalog::list(path.as_deref())?,
            CatalogCommand::Validate { path } => commands::catalog::validate(&path)?,
        },
    }

    Ok(())
}
