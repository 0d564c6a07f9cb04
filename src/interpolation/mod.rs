//! Polynomial and Bezier interpolation over discrete `(x, y)` samples.
//!
//! Free functions here are the slice-level entry points; each method
//! module also exposes a builder cfg and an `interpolate` runner.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod sample;
pub mod traits;
pub use algorithms::{Algorithm, Selection};
pub use errors::InterpolationError;
pub use sample::SampleSet;
pub use traits::Interpolator;

pub mod differences;
pub mod lagrange;
pub mod newton;
pub mod forward;
pub mod bezier;
pub mod interpolant;
pub use interpolant::Interpolant;

pub mod sampler;
pub mod formula;
pub mod session;
pub mod data;
pub use sampler::SampledCurve;
pub use session::Session;


/// Evaluates `algorithm` through `(x, y)` at `query`.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
/// - numeric degeneracy, see [`InterpolationError::is_numeric_degeneracy`]
pub fn evaluate(algorithm: Algorithm, x: &[f64], y: &[f64], query: f64) -> Result<f64, InterpolationError> {
    let sample = SampleSet::new(x, y)?;
    Interpolant::new(algorithm, sample)?.eval(query)
}

/// Samples `selection` over `[min(x), max(x)]` in `n_steps` steps.
pub fn sample_curve(
    selection: impl Into<Selection>,
    x: &[f64],
    y: &[f64],
    n_steps: usize,
) -> Result<SampledCurve, InterpolationError> {
    let sample = SampleSet::new(x, y)?;
    sampler::sample_selection(selection.into(), sample, n_steps)
}

/// Renders the formula text of `selection` over `(x, y)`.
pub fn render_formula(
    selection: impl Into<Selection>,
    x: &[f64],
    y: &[f64],
) -> Result<String, InterpolationError> {
    let sample = SampleSet::new(x, y)?;
    formula::render(selection.into(), &sample)
}

/// Full `n × n` divided-difference table of `(x, y)`.
pub fn divided_difference_table(x: &[f64], y: &[f64]) -> Result<Vec<Vec<f64>>, InterpolationError> {
    let sample = SampleSet::new(x, y)?;
    differences::divided_difference_table(&sample)
}
