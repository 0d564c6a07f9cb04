//! Curve Sampler
//!
//! Drives one method, or all four, across `[min(x), max(x)]` split into
//! `n_steps` equal steps and records the error of every series against
//! Lagrange.
//!
//! Queries are the `k / n_steps` blends of `min` and `max` for
//! `k = 0..=n_steps`, with the last query pinned to `max` so rounding never
//! drops the right endpoint.
//! A zero-width range yields exactly one query at `min`.


use serde::Serialize;

use crate::interpolation::algorithms::{Algorithm, Selection};
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_N_STEPS};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::interpolant::Interpolant;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Curve sampler configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`] (`x_eval` unused)
/// - `selection` : method(s) to sample
/// - `n_steps`   : number of equal steps over the x-range
///
/// # Defaults
/// - `selection` is Lagrange, `n_steps` is [`DEFAULT_N_STEPS`].
#[derive(Debug, Clone, Copy)]
pub struct SamplerCfg<'a> {
    common: CommonCfg<'a>,
    selection: Selection,
    n_steps: usize,
}
impl<'a> SamplerCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            selection: Selection::default(),
            n_steps: DEFAULT_N_STEPS,
        }
    }

    pub fn set_selection(mut self, v: impl Into<Selection>) -> Self {
        self.selection = v.into();
        self
    }

    pub fn set_n_steps(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v == 0 {
            return Err(InterpolationError::InvalidSteps { got: v });
        }
        self.n_steps = v;
        Ok(self)
    }

    pub fn selection(&self) -> Selection { self.selection }
    pub fn n_steps(&self) -> usize { self.n_steps }
}
impl Default for SamplerCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(@samples SamplerCfg<'a>);


/// One method's values over the sampled queries.
///
/// `errors[k] = values[k] - lagrange(queries[k])`.
#[derive(Debug, Clone, Serialize)]
pub struct CurveSeries {
    pub algorithm: Algorithm,
    pub values: Vec<f64>,
    pub errors: Vec<f64>,
}


/// Dense polyline for one or more methods.
#[derive(Debug, Clone, Serialize)]
pub struct SampledCurve {
    pub selection: Selection,
    pub queries: Vec<f64>,
    pub series: Vec<CurveSeries>,
}

impl SampledCurve {
    pub fn len(&self) -> usize { self.queries.len() }
    pub fn is_empty(&self) -> bool { self.queries.is_empty() }

    pub fn series(&self, algorithm: Algorithm) -> Option<&CurveSeries> {
        self.series.iter().find(|s| s.algorithm == algorithm)
    }

    /// `(query, value)` pairs of one series, ready for plotting.
    pub fn points(&self, algorithm: Algorithm) -> Option<Vec<(f64, f64)>> {
        self.series(algorithm).map(|s| {
            self.queries.iter().copied().zip(s.values.iter().copied()).collect()
        })
    }
}


/// Query points over `[min, max]` in `n_steps` equal steps.
///
/// Each query blends the endpoints as `min * (1 - f) + max * f`, `f = k / n_steps`,
/// so a span wider than `f64::MAX` still yields finite queries.
pub fn query_points(min: f64, max: f64, n_steps: usize) -> Vec<f64> {
    if max <= min || n_steps == 0 {
        return vec![min];
    }

    let n = n_steps as f64;
    let mut queries: Vec<f64> = (0..n_steps)
        .map(|k| {
            let f = k as f64 / n;
            min * (1.0 - f) + max * f
        })
        .collect();
    queries.push(max);
    queries
}


/// Samples `selection` over the x-range of `sample`.
///
/// # Errors
/// - [`InterpolationError::InvalidSteps`] if `n_steps == 0`.
/// - Any construction or evaluation error of the sampled methods or of
///   the Lagrange reference. No partial curve is returned.
/// - [`InterpolationError::DuplicateX`] for every selection, Bezier-only
///   included, since the Lagrange error baseline needs distinct x-values.
pub fn sample_selection(
    selection: Selection,
    sample: SampleSet,
    n_steps: usize,
) -> Result<SampledCurve, InterpolationError> {
    if n_steps == 0 {
        return Err(InterpolationError::InvalidSteps { got: n_steps });
    }

    let queries = query_points(sample.x_min(), sample.x_max(), n_steps);
    tracing::debug!(%selection, n_queries = queries.len(), "sampling curve");

    let reference = Lagrange::new(sample)?.eval_many(&queries)?;

    let mut series = Vec::with_capacity(selection.algorithms().len());
    for &algorithm in selection.algorithms() {
        let values = match algorithm {
            Algorithm::Lagrange => reference.clone(),
            _ => {
                let interpolant = Interpolant::new(algorithm, sample)?;
                tracing::trace!(algorithm = %interpolant.algorithm(), "evaluating series");
                interpolant.eval_many(&queries)?
            }
        };
        let errors = values.iter().zip(&reference).map(|(v, r)| v - r).collect();
        series.push(CurveSeries { algorithm, values, errors });
    }

    Ok(SampledCurve { selection, queries, series })
}


/// Samples the configured selection.
///
/// # Returns
/// [`SampledCurve`] with `n_steps + 1` queries, or one query when
/// `min(x) == max(x)`.
pub fn sample(cfg: SamplerCfg) -> Result<SampledCurve, InterpolationError> {
    let samples = cfg.common.sample()?;
    sample_selection(cfg.selection, samples, cfg.n_steps)
}
