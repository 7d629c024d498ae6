// ABOUTME: Criterion benchmarks for the gamification scoring engine
// ABOUTME: Measures points, rank resolution, streaks, achievements, and batch scorecards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the scoring engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{
    generate_input, generate_inputs, generate_workouts, reference_date, UserBatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stridequest::scorecard::ScorecardEngine;
use stridequest_core::Stats;
use stridequest_gamification::{
    AchievementCatalog, AchievementSources, ActivityWindow, PointsCalculator, RankResolver,
};

/// Benchmark point calculation including stacked milestones
fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("points");
    let calculator = PointsCalculator::default();

    group.bench_function("calculate_points", |b| {
        b.iter(|| {
            calculator.calculate_points(black_box(742.5), black_box(88.0), black_box(131))
        });
    });

    group.bench_function("breakdown", |b| {
        let stats = Stats::new(742.5, 88.0, 131);
        b.iter(|| calculator.breakdown(black_box(&stats)));
    });

    group.finish();
}

/// Benchmark rank resolution across the ladder and in the terminal state
fn bench_rank_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_resolution");
    let resolver = RankResolver::default();

    for points in [15.0, 1_234.0, 5_000.0] {
        group.bench_with_input(
            BenchmarkId::new("get_current_rank", points),
            &points,
            |b, &points| {
                b.iter(|| resolver.get_current_rank(black_box(points)));
            },
        );
    }

    group.finish();
}

/// Benchmark streak and weekly count over histories of increasing length
#[allow(clippy::cast_possible_truncation)]
fn bench_activity_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_window");
    let window = ActivityWindow::new(reference_date(), 30);

    for count in [10_usize, 100, 1000] {
        let workouts = generate_workouts(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("current_streak", count),
            &workouts,
            |b, workouts| {
                b.iter(|| window.current_streak(black_box(workouts)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("weekly_count", count),
            &workouts,
            |b, workouts| {
                b.iter(|| window.weekly_count(black_box(workouts)));
            },
        );
    }

    group.finish();
}

/// Benchmark evaluating and sorting the standard catalog
fn bench_achievements(c: &mut Criterion) {
    let catalog = AchievementCatalog::standard();
    let sources = AchievementSources {
        weekly_count: 2,
        monthly_frequency: 9,
        lifetime: Stats::new(87.0, 14.5, 23),
        streak: 2,
    };

    c.bench_function("achievements/evaluate_standard_catalog", |b| {
        b.iter(|| catalog.evaluate(black_box(&sources)));
    });
}

/// Benchmark full scorecards, single and batched
#[allow(clippy::cast_possible_truncation)]
fn bench_scorecards(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorecard");
    let engine = ScorecardEngine::default();
    let as_of = reference_date();

    group.bench_function("evaluate_single", |b| {
        let input = generate_input(42, 40);
        b.iter(|| engine.evaluate(black_box(&input), as_of));
    });

    for size in [UserBatchSize::Small, UserBatchSize::Medium] {
        let inputs = generate_inputs(size);
        group.throughput(Throughput::Elements(inputs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("evaluate_batch", inputs.len()),
            &inputs,
            |b, inputs| {
                b.iter(|| engine.evaluate_batch(black_box(inputs), as_of));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_points,
    bench_rank_resolution,
    bench_activity_window,
    bench_achievements,
    bench_scorecards,
);
criterion_main!(benches);
