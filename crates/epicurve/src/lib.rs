//! # epicurve — Epidemic curve fitting and projection for Rust
//!
//! Smooths daily case and death counts for a region, detects the milestones
//! of an outbreak (start, day zero, peaks, provisional end), fits a
//! two-parameter logistic-derivative ("bell") model to the smoothed cases and
//! deaths, and projects the fitted curves forward.
//!
//! ## What is modelled?
//!
//! Daily new counts are modelled by the derivative of a logistic curve,
//!
//! ```text
//! A(t) = L · e^(−rt) / (1 + e^(−rt))²
//! ```
//!
//! on a normalised clock where `t = −1` falls on the outbreak start and
//! `t = +1` on the provisional end. The post-peak half of the clock is slowed
//! by a dilation factor because declines are typically slower than rises.
//! The cumulative (sigmoid) curve is the running sum of the rescaled bell.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use epicurve::prelude::*;
//!
//! // Build a synthetic 80-day outbreak peaking on day 40
//! let first = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
//! let records = DailyRecord::<f64>::series_from_counts((0..80).map(|i| {
//!     let x = (i as f64 - 40.0) / 8.0;
//!     let cases = (1000.0 * (-x * x).exp()).round() as i64;
//!     (first + Duration::days(i), cases, cases / 50)
//! }));
//!
//! // Build the analyser
//! let model = Epicurve::new()
//!     .smoothing_window(9)
//!     .growth_days(38)
//!     .lag_days(6)
//!     .build()?;
//!
//! // Analyse one region
//! let region = Region::new("XX", "Exampleland", 5_000_000);
//! let result = model.analyse(region, records)?;
//!
//! println!("{}", result);
//! for row in result.forecast(7).rows() {
//!     println!("{} {:.0} {:.0}", row.date, row.cases, row.cases_to_date);
//! }
//! # Result::<(), EpicurveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `analyse` returns a `Result<RegionModel<T>, EpicurveError>`.
//!
//! - **`Ok(RegionModel<T>)`**: Milestones, fits, curves and diagnostics.
//! - **`Err(EpicurveError)`**: Malformed input (empty or unsorted series,
//!   totals that disagree with daily counts, an invalid population).
//!
//! Sparse data is never an error: an outbreak that has not reached 50 cases
//! falls back to configured defaults, a region without 50 deaths has no deaths
//! model, and a fit that does not settle is reported through
//! [`RegionModel::warnings`](crate::prelude::RegionModel) and the `log` facade.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! epicurve = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - smoothing, milestones and curve fitting.
mod algorithms;

// Layer 4: Evaluation - projection and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

// Standard epicurve prelude.
pub mod prelude {
    pub use crate::api::{
        Calibrated, CurveFit, DailyRecord, Diagnostics, Epicurve, EpicurveBuilder, EpicurveConfig,
        EpicurveError, FitWarning, Forecast, ForecastRow, InfectionPoint, Metric, Milestone,
        Milestones, ModelCurve, Outcome, Region, RegionModel, RescaleAnchor,
        RescaleAnchor::EndOrLatest, RescaleAnchor::LatestDay, SmoothingSummary, Timeline,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
