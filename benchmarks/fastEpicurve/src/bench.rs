//! Epidemic curve analysis benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Series length (one wave over 90 to 720 days)
//! - Smoothing window width
//! - Multi-region batches (sequential vs parallel)
//! - Pathological cases (no outbreak, corrections, flat plateau)
//!
//! For serial execution across regions, use `FASTEPICURVE_MODE=serial cargo bench`.
//! For parallel execution across regions, use `FASTEPICURVE_MODE=parallel cargo bench`.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastEpicurve::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTEPICURVE_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn region(index: usize) -> Region {
    Region::new(format!("R{index}"), format!("Region {index}"), 10_000_000)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate one logistic wave of daily cases and lagged deaths with
/// multiplicative Gaussian noise.
fn generate_wave(days: usize, peak_cases: f64, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(1.0, 0.15).unwrap();

    let peak = days as f64 * 0.4;
    let width = days as f64 / 12.0;
    let bell = |t: f64| {
        let e = (-(t - peak) / width).exp();
        4.0 * peak_cases * e / ((1.0 + e) * (1.0 + e))
    };

    let cases: Vec<i64> = (0..days)
        .map(|i| (bell(i as f64) * noise.sample(&mut rng)).max(0.0).round() as i64)
        .collect();
    let deaths: Vec<i64> = (0..days)
        .map(|i| (0.02 * bell(i as f64 - 7.0) * noise.sample(&mut rng)).max(0.0).round() as i64)
        .collect();
    (cases, deaths)
}

/// Generate a wave whose reports bunch onto one weekday, with occasional
/// negative corrections.
fn generate_weekly_reporting(days: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut cases, mut deaths) = generate_wave(days, 2_000.0, seed);

    for week in cases.chunks_mut(7).chain(deaths.chunks_mut(7)) {
        let total: i64 = week.iter().sum();
        week.iter_mut().for_each(|d| *d = 0);
        if let Some(last) = week.last_mut() {
            *last = total;
        }
    }
    for _ in 0..days / 30 {
        let idx = rng.random_range(1..days);
        cases[idx] -= cases[idx - 1] / 2;
    }
    (cases, deaths)
}

fn build_batch(regions: usize, days: usize) -> Vec<RegionSeries<f64>> {
    (0..regions)
        .map(|r| {
            let (cases, deaths) = generate_wave(days, 1_000.0 + 50.0 * r as f64, r as u64);
            RegionSeries::from_counts(region(r), first_date(), &cases, &deaths).unwrap()
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_series_length(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("series_length_{}", mode_name));
    group.sample_size(50);

    for days in [90, 180, 360, 720] {
        group.throughput(Throughput::Elements(days as u64));
        let (cases, deaths) = generate_wave(days, 5_000.0, 42);

        group.bench_with_input(BenchmarkId::new("single_region", days), &days, |b, _| {
            b.iter(|| {
                ParallelEpicurve::<f64>::new()
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .analyse_counts(region(0), first_date(), black_box(&cases), black_box(&deaths))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_smoothing_window(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("smoothing_window_{}", mode_name));
    group.sample_size(100);

    let (cases, deaths) = generate_wave(360, 5_000.0, 42);

    for window in [1, 3, 7, 9, 15, 21] {
        group.bench_with_input(BenchmarkId::new("window", window), &window, |b, &window| {
            b.iter(|| {
                ParallelEpicurve::<f64>::new()
                    .smoothing_window(window)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .analyse_counts(region(0), first_date(), black_box(&cases), black_box(&deaths))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_regions(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("regions_{}", mode_name));
    group.sample_size(20);

    for regions in [10, 50, 200] {
        group.throughput(Throughput::Elements(regions as u64));
        let batch = build_batch(regions, 300);
        let model = ParallelEpicurve::<f64>::new()
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("batch", regions), &regions, |b, _| {
            b.iter(|| model.analyse_all(black_box(batch.clone())))
        });
    }
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(100);

    let days = 240;
    let model = ParallelEpicurve::<f64>::new()
        .parallel(use_parallel)
        .build()
        .unwrap();

    // Outbreak never starts
    let quiet = vec![1i64; days];
    group.bench_function("no_outbreak", |b| {
        b.iter(|| {
            model
                .analyse_counts(region(0), first_date(), black_box(&quiet), black_box(&quiet))
                .unwrap()
        })
    });

    // Weekly reporting with corrections
    let (cases, deaths) = generate_weekly_reporting(days, 7);
    group.bench_function("weekly_reporting", |b| {
        b.iter(|| {
            model
                .analyse_counts(region(0), first_date(), black_box(&cases), black_box(&deaths))
                .unwrap()
        })
    });

    // Flat plateau
    let plateau = vec![500i64; days];
    let plateau_deaths = vec![10i64; days];
    group.bench_function("plateau", |b| {
        b.iter(|| {
            model
                .analyse_counts(
                    region(0),
                    first_date(),
                    black_box(&plateau),
                    black_box(&plateau_deaths),
                )
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_series_length,
    bench_smoothing_window,
    bench_regions,
    bench_pathological,
);

criterion_main!(benches);
