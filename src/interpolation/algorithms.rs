//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and [`Selection`], which is either one algorithm or all four at once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interpolation::errors::InterpolationError;


/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]      lagrange basis polynomials
/// - [`Algorithm::NewtonDivided`] newton divided differences
/// - [`Algorithm::NewtonForward`] newton forward differences
/// - [`Algorithm::Bezier`]        de casteljau over positional control points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Lagrange,
    NewtonDivided,
    NewtonForward,
    Bezier,
}

impl Algorithm {
    /// All four methods, in the order they are sampled and rendered.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Lagrange,
        Algorithm::NewtonDivided,
        Algorithm::NewtonForward,
        Algorithm::Bezier,
    ];

    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "lagrange",
            Algorithm::NewtonDivided => "newton divided",
            Algorithm::NewtonForward => "newton forward",
            Algorithm::Bezier        => "bezier",
        }
    }

    /// Short selector tag, e.g. `"divided"`.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "lagrange",
            Algorithm::NewtonDivided => "divided",
            Algorithm::NewtonForward => "forward",
            Algorithm::Bezier        => "bezier",
        }
    }

    /// Title used by chart and report consumers.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "Lagrange",
            Algorithm::NewtonDivided => "Newton Divided",
            Algorithm::NewtonForward => "Newton Forward",
            Algorithm::Bezier        => "Bezier",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lagrange"                                  => Ok(Algorithm::Lagrange),
            "divided" | "newton_divided" | "newton-divided" => Ok(Algorithm::NewtonDivided),
            "forward" | "newton_forward" | "newton-forward" => Ok(Algorithm::NewtonForward),
            "bezier"                                    => Ok(Algorithm::Bezier),
            _ => Err(InterpolationError::UnknownMethod { tag: s.to_string() }),
        }
    }
}


/// Which method(s) an evaluation entry point ran.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Single(Algorithm),
    All,
}

impl Selection {
    /// Methods covered by this selection, in sampling order.
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Selection::Single(Algorithm::Lagrange)      => &Algorithm::ALL[0..1],
            Selection::Single(Algorithm::NewtonDivided) => &Algorithm::ALL[1..2],
            Selection::Single(Algorithm::NewtonForward) => &Algorithm::ALL[2..3],
            Selection::Single(Algorithm::Bezier)        => &Algorithm::ALL[3..4],
            Selection::All                              => &Algorithm::ALL,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Selection::Single(algorithm) => algorithm.display_name(),
            Selection::All               => "All Methods",
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(Algorithm::Lagrange)
    }
}

impl From<Algorithm> for Selection {
    fn from(algorithm: Algorithm) -> Self {
        Selection::Single(algorithm)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(algorithm) => write!(f, "{algorithm}"),
            Selection::All               => f.write_str("all"),
        }
    }
}

impl FromStr for Selection {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse::<Algorithm>().map(Selection::Single)
    }
}
