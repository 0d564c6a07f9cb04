//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation as a weighted sum of
//! [Lagrange basis polynomials](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! Lagrange is the reference method: every error series produced by the
//! curve sampler is measured against it.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::{finite_or_err, Interpolator};


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then setters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Lagrange interpolant over a sample set with pairwise-distinct x.
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    sample: SampleSet<'a>,
}

impl<'a> Lagrange<'a> {
    /// # Errors
    /// - [`InterpolationError::DuplicateX`] if two x-values coincide.
    pub fn new(sample: SampleSet<'a>) -> Result<Self, InterpolationError> {
        sample.ensure_distinct_x()?;
        Ok(Self { sample })
    }

    /// Value of basis polynomial `l_i` at `xq`.
    #[inline]
    pub fn basis(&self, i: usize, xq: f64) -> f64 {
        let x = self.sample.x();
        let xi = x[i];
        x.iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0, |acc, (_, &xj)| acc * (xq - xj) / (xi - xj))
    }
}

impl Interpolator for Lagrange<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let x = self.sample.x();
        let y = self.sample.y();

        let mut result = 0.0;
        for (i, &yi) in y.iter().enumerate() {
            let mut term = yi;
            for (j, &xj) in x.iter().enumerate() {
                if j != i {
                    term *= (xq - xj) / (x[i] - xj);
                }
            }
            result += term;
        }

        finite_or_err(xq, result)
    }
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Behavior
/// For each evaluation point `xq` in `cfg.common.x_eval()`:
///
/// ```text
/// P(xq) = Σ_i y[i] · Π_{j≠i} (xq - x[j]) / (x[i] - x[j])
/// ```
///
/// Evaluation points outside the sample range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated y-values
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
///   if the samples are incomplete.
/// - [`InterpolationError::DuplicateX`] if two x-values coincide.
/// - [`InterpolationError::NonFiniteResult`] if a value overflows.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let sample = cfg.common.sample()?;
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        sample.len(),
        evals.len(),
    );

    let interpolant = Lagrange::new(sample)?;
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
