//! Bezier / De Casteljau Interpolation
//!
//! Treats the samples as the control points of a single Bezier curve and
//! evaluates it with [De Casteljau's algorithm](https://en.wikipedia.org/wiki/De_Casteljau%27s_algorithm).
//!
//! Control point `i` sits at `(i / (n-1), y[i])`: the x-component is a
//! positional index, not the sample's x-value. A query `x` is mapped to
//!
//! ```text
//! t = (x - min(x)) / (max(x) - min(x))
//! ```
//!
//! so the curve passes through `y[0]` and `y[n-1]` at the ends of the
//! range but only approximates the interior samples.


use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::{finite_or_err, Interpolator};


#[derive(Debug, Clone, Copy, Default)]
pub struct BezierCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> BezierCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BezierCfg<'a>);


/// Point in parameter space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    #[inline]
    fn lerp(self, other: ControlPoint, t: f64) -> ControlPoint {
        ControlPoint {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }
}


/// Control points `(i / (n-1), y[i])`. A single sample maps to `(0, y[0])`.
pub fn control_points(y: &[f64]) -> Vec<ControlPoint> {
    let n = y.len();
    let denom = n.saturating_sub(1).max(1) as f64;
    y.iter()
        .enumerate()
        .map(|(i, &yi)| ControlPoint { x: i as f64 / denom, y: yi })
        .collect()
}


/// Runs the De Casteljau reduction at parameter `t`.
///
/// `n - 1` levels; level `l` blends the `n - l + 1` surviving points
/// pairwise into `n - l` new ones on a fresh buffer.
pub fn de_casteljau(points: &[ControlPoint], t: f64) -> Option<ControlPoint> {
    let mut level = points.to_vec();
    while level.len() > 1 {
        level = level.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
    }
    level.first().copied()
}


#[derive(Debug, Clone)]
pub struct Bezier {
    points: Vec<ControlPoint>,
    x_min: f64,
    x_span: f64,
}

impl Bezier {
    /// # Errors
    /// - [`InterpolationError::DegenerateRange`] if there are at least two
    ///   samples and every x-value is equal.
    pub fn new(sample: SampleSet) -> Result<Self, InterpolationError> {
        let x_min  = sample.x_min();
        let x_span = sample.x_max() - x_min;

        if sample.len() >= 2 && x_span == 0.0 {
            tracing::warn!(x = x_min, "bezier: zero-width x-range");
            return Err(InterpolationError::DegenerateRange { x: x_min });
        }

        Ok(Self { points: control_points(sample.y()), x_min, x_span })
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Normalized curve parameter for query `xq`.
    #[inline]
    pub fn parameter(&self, xq: f64) -> f64 {
        (xq - self.x_min) / self.x_span
    }
}

impl Interpolator for Bezier {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        // degenerate
        if self.points.len() < 2 {
            return Ok(self.points[0].y);
        }

        let t = self.parameter(xq);
        let yq = de_casteljau(&self.points, t).map_or(f64::NAN, |p| p.y);

        finite_or_err(xq, yq)
    }
}


/// Performs Bezier interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"bezier"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : curve y-values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::DegenerateRange`] if all x-values coincide.
pub fn interpolate(cfg: BezierCfg) -> Result<InterpolationReport, InterpolationError> {
    let sample = cfg.common.sample()?;
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Bezier,
        sample.len(),
        evals.len(),
    );

    let interpolant = Bezier::new(sample)?;
    report.evaluated = interpolant.eval_many(evals)?;

    Ok(report)
}
