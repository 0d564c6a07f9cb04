use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}


/// Rejects non-finite outputs so division-by-zero never leaks as `NaN`/`inf`.
#[inline]
pub(crate) fn finite_or_err(xq: f64, yq: f64) -> Result<f64, InterpolationError> {
    if yq.is_finite() {
        Ok(yq)
    } else {
        tracing::warn!(x = xq, y = yq, "non-finite interpolated value");
        Err(InterpolationError::NonFiniteResult { x: xq })
    }
}
