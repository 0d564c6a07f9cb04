//! Difference tables shared by the Newton methods and the formula renderer.
//!
//! Every builder allocates fresh buffers per call; nothing is cached
//! between calls.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample::SampleSet;


/// Builds the full `n × n` divided-difference table.
///
/// ```text
/// table[i][0] = y[i]
/// table[i][j] = (table[i+1][j-1] - table[i][j-1]) / (x[i+j] - x[i]),  i < n - j
/// ```
///
/// Cells below the anti-diagonal stay `0.0`. Row `0` holds the Newton
/// coefficients `f[x0], f[x0,x1], ..., f[x0..x_{n-1}]`.
///
/// # Errors
/// - [`InterpolationError::DuplicateX`] if two x-values coincide.
pub fn divided_difference_table(sample: &SampleSet) -> Result<Vec<Vec<f64>>, InterpolationError> {
    sample.ensure_distinct_x()?;

    let x = sample.x();
    let y = sample.y();
    let n = sample.len();

    let mut table = vec![vec![0.0; n]; n];
    for (row, &yi) in table.iter_mut().zip(y) {
        row[0] = yi;
    }

    for j in 1..n {
        for i in 0..n - j {
            table[i][j] = (table[i + 1][j - 1] - table[i][j - 1]) / (x[i + j] - x[i]);
        }
    }

    tracing::trace!(n, "built divided-difference table");
    Ok(table)
}


/// Leading forward differences `[y0, Δy0, Δ²y0, ..., Δ^{n-1}y0]`.
///
/// Differences a scratch copy of `y` in place `n - 1` times; after pass
/// `i` only the first `n - i` entries are live and entry `0` is `Δ^i y0`.
pub fn forward_differences(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut scratch = y.to_vec();
    let mut leading = Vec::with_capacity(n);

    if let Some(&y0) = y.first() {
        leading.push(y0);
    }
    for i in 1..n {
        for j in 0..n - i {
            scratch[j] = scratch[j + 1] - scratch[j];
        }
        leading.push(scratch[0]);
    }

    leading
}


/// Returns the common step `h = x[1] - x[0]` if every consecutive spacing
/// is within `tol` of it, `None` otherwise.
///
/// A single point is trivially uniform with `h = 0.0`.
pub fn uniform_step(x: &[f64], tol: f64) -> Option<f64> {
    if x.len() < 2 {
        return Some(0.0);
    }
    let h = x[1] - x[0];
    x.windows(2)
        .all(|w| ((w[1] - w[0]) - h).abs() < tol)
        .then_some(h)
}


/// `n!` as `f64`; `1` for `n <= 1`.
pub fn factorial(n: u32) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    f64::from(n) * factorial(n - 1)
}
