//! Interpolation error types.
//!
//! ┌ input errors        : empty / unequal / non-finite samples
//! ├ numeric degeneracy  : repeated x, zero-width range, non-finite result
//! ├ configuration       : invalid tolerance or step count
//! └ data helpers        : unknown method tag, unparsable value


use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values at indices {i} and {j}: x = {x}")]
    DuplicateX { i: usize, j: usize, x: f64 },

    #[error("degenerate x-range: min and max are both {x}")]
    DegenerateRange { x: f64 },

    #[error("non-finite interpolated value at x = {x}")]
    NonFiniteResult { x: f64 },

    #[error("invalid spacing_tol {got} must be finite and > 0")]
    InvalidSpacingTol { got: f64 },

    #[error("invalid n_steps {got} must be >= 1")]
    InvalidSteps { got: usize },

    #[error("unknown interpolation method `{tag}`")]
    UnknownMethod { tag: String },

    #[error("could not parse `{token}` as a number")]
    Parse { token: String },
}

impl InterpolationError {
    /// True for the errors that stem from a division by zero in the
    /// underlying formulas rather than from malformed input.
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(
            self,
            InterpolationError::DuplicateX { .. }
                | InterpolationError::DegenerateRange { .. }
                | InterpolationError::NonFiniteResult { .. }
        )
    }
}
