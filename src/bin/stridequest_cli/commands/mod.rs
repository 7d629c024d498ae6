// ABOUTME: Re-exports command modules for stridequest-cli
// ABOUTME: Provides the score, rank and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod rank;
pub mod score;
