//! Validated `(x, y)` sample pairs shared by every method.
//!
//! A [`SampleSet`] borrows the caller's slices for the duration of one
//! evaluation request. Construction guarantees `len(x) == len(y) >= 1`;
//! pairwise-distinct x is checked separately by the methods that divide
//! by `x_i - x_j`.

use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone)]
pub struct SampleSet<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> SampleSet<'a> {
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `x` or `y` is empty.
    /// - [`InterpolationError::UnequalLength`] if the lengths differ.
    /// - [`InterpolationError::NonFiniteVec`] if any value is `NaN` or infinite.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    pub fn x_min(&self) -> f64 {
        self.x.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn x_max(&self) -> f64 {
        self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn y_min(&self) -> f64 {
        self.y.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn y_max(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterates the `(x_i, y_i)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (x, y) = (self.x, self.y);
        x.iter().copied().zip(y.iter().copied())
    }

    /// Fails with [`InterpolationError::DuplicateX`] on the first pair of
    /// equal x-values. O(n²), matching the cost of the methods that need it.
    pub fn ensure_distinct_x(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        for i in 0..x.len() {
            for j in i + 1..x.len() {
                if x[i] == x[j] {
                    tracing::warn!(i, j, x = x[i], "repeated x-value in sample set");
                    return Err(InterpolationError::DuplicateX { i, j, x: x[i] });
                }
            }
        }
        Ok(())
    }
}
