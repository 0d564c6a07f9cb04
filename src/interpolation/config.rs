//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] holding the sample slices and the requested
//! evaluation points. Shared by all interpolation algorithms and the
//! curve sampler.
//!
//! [`CommonCfg`] — universal fields
//! - `x`      : x values provided
//! - `y`      : y values provided
//! - `x_eval` : x values to evaluate
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.
//!
//! Also defines the shared defaults [`DEFAULT_SPACING_TOL`] (uniform
//! spacing check of newton forward differences) and [`DEFAULT_N_STEPS`]
//! (curve sampler resolution).


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample::SampleSet;

/// Absolute tolerance on `(x[i] - x[i-1]) - h` for equal spacing.
pub const DEFAULT_SPACING_TOL: f64 = 1e-10;

/// Number of equal steps the sampler divides `[min x, max x]` into.
pub const DEFAULT_N_STEPS: usize = 100;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
        }
    }

    /// Builds the validated [`SampleSet`] from `x` and `y`.
    pub fn sample(&self) -> Result<SampleSet<'a>, InterpolationError> {
        SampleSet::new(self.x, self.y)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Generates the sample setters of a cfg struct holding `common: CommonCfg`.
///
/// - `impl_common_cfg!(Cfg<'a>)`          : `set_x`, `set_y`, `set_x_eval`
/// - `impl_common_cfg!(@samples Cfg<'a>)` : `set_x`, `set_y`
macro_rules! impl_common_cfg {
    (@samples $cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }
        }
    };
    ($cfg:ty) => {
        $crate::interpolation::config::impl_common_cfg!(@samples $cfg);

        impl<'a> $cfg {
            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
