//! Closed dispatch over the four methods.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bezier::Bezier;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::forward::NewtonForward;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::newton::NewtonDivided;
use crate::interpolation::sample::SampleSet;
use crate::interpolation::traits::Interpolator;


/// A prepared interpolant for any [`Algorithm`].
#[derive(Debug, Clone)]
pub enum Interpolant<'a> {
    Lagrange(Lagrange<'a>),
    NewtonDivided(NewtonDivided<'a>),
    NewtonForward(NewtonForward<'a>),
    Bezier(Bezier),
}

impl<'a> Interpolant<'a> {
    pub fn new(algorithm: Algorithm, sample: SampleSet<'a>) -> Result<Self, InterpolationError> {
        Ok(match algorithm {
            Algorithm::Lagrange      => Interpolant::Lagrange(Lagrange::new(sample)?),
            Algorithm::NewtonDivided => Interpolant::NewtonDivided(NewtonDivided::new(sample)?),
            Algorithm::NewtonForward => Interpolant::NewtonForward(NewtonForward::new(sample)?),
            Algorithm::Bezier        => Interpolant::Bezier(Bezier::new(sample)?),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Interpolant::Lagrange(_)      => Algorithm::Lagrange,
            Interpolant::NewtonDivided(_) => Algorithm::NewtonDivided,
            Interpolant::NewtonForward(_) => Algorithm::NewtonForward,
            Interpolant::Bezier(_)        => Algorithm::Bezier,
        }
    }
}

impl Interpolator for Interpolant<'_> {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        match self {
            Interpolant::Lagrange(i)      => i.eval(x),
            Interpolant::NewtonDivided(i) => i.eval(x),
            Interpolant::NewtonForward(i) => i.eval(x),
            Interpolant::Bezier(i)        => i.eval(x),
        }
    }
}
