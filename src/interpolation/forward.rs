//! Newton Forward-Difference Interpolation
//!
//! Implements [Newton's forward-difference formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula)
//! for equally spaced x-values:
//!
//! ```text
//! u    = (x - x0) / h
//! P(x) = y0 + Σ_{i=1}^{n-1} u(u-1)...(u-i+1) · Δ^i y0 / i!
//! ```
//!
//! When the spacing is not uniform within `spacing_tol` the formula is
//! undefined and the interpolant delegates entirely to
//! [`NewtonDivided`], producing identical output.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::differences::{forward_differences, uniform_step};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::NewtonDivided;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::{finite_or_err, Interpolator};


/// Newton forward interpolation configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `spacing_tol` : absolute tolerance of the equal-spacing check
///
/// # Construction
/// - Use [`ForwardCfg::new`] then setters.
///
/// # Defaults
/// - `spacing_tol` is [`DEFAULT_SPACING_TOL`].
#[derive(Debug, Clone, Copy)]
pub struct ForwardCfg<'a> {
    common: CommonCfg<'a>,
    spacing_tol: f64,
}
impl<'a> ForwardCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), spacing_tol: DEFAULT_SPACING_TOL }
    }

    pub fn set_spacing_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidSpacingTol { got: v });
        }
        self.spacing_tol = v;
        Ok(self)
    }

    pub fn spacing_tol(&self) -> f64 { self.spacing_tol }
}
impl Default for ForwardCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(ForwardCfg<'a>);


/// Which formula a [`NewtonForward`] interpolant evaluates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ForwardStrategy {
    /// x-values equally spaced; forward differences are used.
    ForwardDifference,
    /// Spacing not uniform; delegated to divided differences.
    DividedFallback,
}


#[derive(Debug, Clone)]
enum Kind<'a> {
    Forward { x0: f64, h: f64, deltas: Vec<f64> },
    Fallback(NewtonDivided<'a>),
}


/// Newton forward-difference interpolant with divided-difference fallback.
#[derive(Debug, Clone)]
pub struct NewtonForward<'a> {
    kind: Kind<'a>,
}

impl<'a> NewtonForward<'a> {
    /// Same as [`NewtonForward::with_tolerance`] at [`DEFAULT_SPACING_TOL`].
    pub fn new(sample: SampleSet<'a>) -> Result<Self, InterpolationError> {
        Self::with_tolerance(sample, DEFAULT_SPACING_TOL)
    }

    /// # Errors
    /// - [`InterpolationError::DuplicateX`] if two x-values coincide.
    pub fn with_tolerance(sample: SampleSet<'a>, spacing_tol: f64) -> Result<Self, InterpolationError> {
        sample.ensure_distinct_x()?;

        let x = sample.x();
        let kind = match uniform_step(x, spacing_tol) {
            Some(h) => {
                tracing::debug!(h, n = sample.len(), "newton forward: equally spaced");
                Kind::Forward { x0: x[0], h, deltas: forward_differences(sample.y()) }
            }
            None => {
                tracing::debug!(
                    n = sample.len(),
                    spacing_tol,
                    "newton forward: spacing not uniform, using divided differences"
                );
                Kind::Fallback(NewtonDivided::new(sample)?)
            }
        };

        Ok(Self { kind })
    }

    pub fn strategy(&self) -> ForwardStrategy {
        match self.kind {
            Kind::Forward { .. } => ForwardStrategy::ForwardDifference,
            Kind::Fallback(_)    => ForwardStrategy::DividedFallback,
        }
    }
}

impl Interpolator for NewtonForward<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let (x0, h, deltas) = match &self.kind {
            Kind::Fallback(divided) => return divided.eval(xq),
            Kind::Forward { x0, h, deltas } => (*x0, *h, deltas),
        };

        let mut result = deltas[0];
        if deltas.len() > 1 {
            let u = (xq - x0) / h;
            let mut u_term = 1.0;
            let mut fact = 1.0;
            for (i, &delta) in deltas.iter().enumerate().skip(1) {
                u_term *= u - (i - 1) as f64;
                fact *= i as f64;
                result += u_term * delta / fact;
            }
        }

        finite_or_err(xq, result)
    }
}


/// Performs Newton forward-difference interpolation.
///
/// # Behavior
/// - Checks `|(x[i] - x[i-1]) - h| < spacing_tol` for every `i`, `h = x[1] - x[0]`.
/// - Equally spaced: evaluates the forward-difference formula.
/// - Otherwise: evaluates Newton divided differences and sets `fallback`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton forward"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `fallback`       : whether divided differences were used
///
/// # Errors
/// - [`InterpolationError::DuplicateX`] if two x-values coincide.
/// - [`InterpolationError::NonFiniteResult`] if a value overflows.
pub fn interpolate(cfg: ForwardCfg) -> Result<InterpolationReport, InterpolationError> {
    let sample = cfg.common.sample()?;
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::NewtonForward,
        sample.len(),
        evals.len(),
    );

    let interpolant = NewtonForward::with_tolerance(sample, cfg.spacing_tol)?;
    report.fallback  = interpolant.strategy() == ForwardStrategy::DividedFallback;
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
