//! Parallel execution engine for multi-region analysis.
//!
//! ## Purpose
//!
//! This module fans a batch of regions out over CPU cores. Every region is
//! analysed independently by the same immutable analyser, so no state is
//! shared between tasks and results come back in input order.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Isolation**: A failing region yields an `Err` in its slot without
//!   affecting the others.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not parallelise within a single region's fit.
//! * This module does not validate input data (handled by `epicurve`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::debug;
use num_traits::Float;

// Export dependencies from epicurve crate
use epicurve::internals::api::Epicurve;
use epicurve::internals::engine::output::RegionModel;
use epicurve::internals::primitives::errors::EpicurveError;

// Internal dependencies
use crate::input::RegionSeries;

/// Per-region analysis results, in input order.
pub type BatchResults<T> = Vec<Result<RegionModel<T>, EpicurveError>>;

/// Analyse every region of a batch in parallel.
#[cfg(feature = "cpu")]
pub fn analyse_parallel<T>(model: &Epicurve<T>, batch: Vec<RegionSeries<T>>) -> BatchResults<T>
where
    T: Float + Send + Sync,
{
    debug!("analysing {} regions on {} threads", batch.len(), rayon::current_num_threads());
    batch
        .into_par_iter()
        .map(|series| model.analyse(series.region, series.records))
        .collect()
}

/// Analyse every region of a batch on the calling thread.
pub fn analyse_sequential<T: Float>(model: &Epicurve<T>, batch: Vec<RegionSeries<T>>) -> BatchResults<T> {
    debug!("analysing {} regions sequentially", batch.len());
    batch
        .into_iter()
        .map(|series| model.analyse(series.region, series.records))
        .collect()
}
