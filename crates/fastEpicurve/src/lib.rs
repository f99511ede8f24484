//! # Fast epicurve (Parallel Epidemic Curve Analysis)
//!
//! Extends [`epicurve`] with multi-region batch analysis on all CPU cores
//! (via `rayon`) and count inputs from slices, vectors or `ndarray` arrays.
//! Every region is analysed independently by the same immutable analyser, so
//! parallel results are identical to sequential ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fastEpicurve::prelude::*;
//! use ndarray::Array1;
//!
//! let first = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
//! let cases = Array1::from_iter((0..80).map(|i: i64| {
//!     let x = (i as f64 - 40.0) / 8.0;
//!     (800.0 * (-x * x).exp()).round() as i64
//! }));
//! let deaths = cases.mapv(|c| c / 40);
//!
//! let model = ParallelEpicurve::<f64>::new()
//!     .smoothing_window(7)
//!     .parallel(true)
//!     .build()?;
//!
//! let batch = vec![
//!     RegionSeries::from_counts(Region::new("AA", "Alpha", 2_000_000), first, &cases, &deaths)?,
//!     RegionSeries::from_counts(Region::new("BB", "Beta", 9_000_000), first, &cases, &deaths)?,
//! ];
//!
//! for result in model.analyse_all(batch) {
//!     let region_model = result?;
//!     println!("{}: end {}", region_model.region.code, region_model.milestones.end.date);
//! }
//! # Result::<(), EpicurveError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel batch analysis with `rayon`. Without it,
//!   batches are analysed sequentially.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel orchestration.
mod engine;

// High-level fluent API for multi-region analysis.
mod api;

// Input data handling.
mod input;

// Standard fastEpicurve prelude.
pub mod prelude {
    pub use crate::api::{
        BatchResults, Calibrated, CountInput, CurveFit, DailyRecord, Diagnostics, EpicurveConfig,
        EpicurveError, FitWarning, Forecast, ForecastRow, Metric, Milestone, Milestones,
        ModelCurve, Outcome, ParallelEpicurve, ParallelEpicurveBuilder, Region, RegionModel,
        RegionSeries, RescaleAnchor,
        RescaleAnchor::{EndOrLatest, LatestDay},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
