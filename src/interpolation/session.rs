//! Presentation-side memory of the last evaluated selection.
//!
//! The formula view shows whichever method(s) were plotted most recently.
//! [`Session`] carries that choice explicitly instead of a global; only
//! [`Session::plot`] and [`Session::plot_all`] update it, and only when
//! sampling succeeds.


use crate::interpolation::algorithms::{Algorithm, Selection};
use crate::interpolation::config::DEFAULT_N_STEPS;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::formula;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::sampler::{sample_selection, SampledCurve};


#[derive(Debug, Clone, Copy)]
pub struct Session {
    last: Selection,
    n_steps: usize,
}

impl Session {
    pub fn new() -> Self {
        Self { last: Selection::default(), n_steps: DEFAULT_N_STEPS }
    }

    pub fn with_n_steps(mut self, n_steps: usize) -> Result<Self, InterpolationError> {
        if n_steps == 0 {
            return Err(InterpolationError::InvalidSteps { got: n_steps });
        }
        self.n_steps = n_steps;
        Ok(self)
    }

    pub fn last(&self) -> Selection { self.last }

    /// Samples one method and remembers it.
    pub fn plot(
        &mut self,
        algorithm: Algorithm,
        x: &[f64],
        y: &[f64],
    ) -> Result<SampledCurve, InterpolationError> {
        self.run(Selection::Single(algorithm), x, y)
    }

    /// Samples all four methods and remembers [`Selection::All`].
    pub fn plot_all(&mut self, x: &[f64], y: &[f64]) -> Result<SampledCurve, InterpolationError> {
        self.run(Selection::All, x, y)
    }

    fn run(
        &mut self,
        selection: Selection,
        x: &[f64],
        y: &[f64],
    ) -> Result<SampledCurve, InterpolationError> {
        let sample = SampleSet::new(x, y)?;
        let curve = sample_selection(selection, sample, self.n_steps)?;
        self.last = selection;
        Ok(curve)
    }

    /// Formula of the last plotted selection over `(x, y)`.
    pub fn formula(&self, x: &[f64], y: &[f64]) -> Result<String, InterpolationError> {
        let sample = SampleSet::new(x, y)?;
        formula::render(self.last, &sample)
    }

    /// Heading for graph exports, e.g. `"Newton Forward Interpolation Graphs"`.
    pub fn title(&self) -> String {
        format!("{} Interpolation Graphs", self.last.display_name())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
