//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the first row of the divided-difference table and are
//! evaluated at query points using Horner's scheme.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::differences::divided_difference_table;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::{finite_or_err, Interpolator};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Newton divided-difference interpolant.
///
/// Holds the coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
#[derive(Debug, Clone)]
pub struct NewtonDivided<'a> {
    x: &'a [f64],
    coeffs: Vec<f64>,
}

impl<'a> NewtonDivided<'a> {
    /// # Errors
    /// - [`InterpolationError::DuplicateX`] if two x-values coincide.
    pub fn new(sample: SampleSet<'a>) -> Result<Self, InterpolationError> {
        let table = divided_difference_table(&sample)?;

        // only row 0 is meaningful; the rest is scratch
        let coeffs = table.into_iter().next().unwrap_or_default();

        Ok(Self { x: sample.x(), coeffs })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }
}

impl Interpolator for NewtonDivided<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let n = self.coeffs.len();

        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (xq - self.x[j]) * p;
        }

        finite_or_err(xq, p)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner's nested form:
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton divided"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::DuplicateX`] if two x-values coincide.
/// - [`InterpolationError::NonFiniteResult`] if a value overflows.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let sample = cfg.common.sample()?;
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::NewtonDivided,
        sample.len(),
        evals.len(),
    );

    let interpolant = NewtonDivided::new(sample)?;
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
