//! Text helpers for the input and export collaborators.
//!
//! - [`parse_values`]  : `"1, 2.5, 3"` → `[1.0, 2.5, 3.0]`
//! - [`parse_csv`]     : header line plus `x,y` rows → `(x, y)`
//! - [`to_csv`]        : `X,Y` header plus one row per sample
//! - [`data_table`]    : indexed rows for tabular display
//! - [`SampleSummary`] : point count and x/y ranges for report headers


use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::formula::fmt_num;
use crate::interpolation::sample::SampleSet;


fn parse_token(token: &str) -> Result<f64, InterpolationError> {
    let trimmed = token.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InterpolationError::Parse { token: trimmed.to_string() })
}


/// Parses a comma-separated list of numbers. Blank input gives an empty list.
pub fn parse_values(text: &str) -> Result<Vec<f64>, InterpolationError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(parse_token).collect()
}


/// Parses CSV text whose first line is a header and whose remaining
/// non-blank lines are `x,y`. Extra columns are ignored.
pub fn parse_csv(text: &str) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for line in text.lines().skip(1).filter(|l| !l.trim().is_empty()) {
        let mut fields = line.split(',');
        x.push(parse_token(fields.next().unwrap_or(""))?);
        y.push(parse_token(fields.next().unwrap_or(""))?);
    }

    tracing::debug!(rows = x.len(), "parsed csv samples");
    Ok((x, y))
}


pub fn to_csv(sample: &SampleSet) -> String {
    let mut csv = String::from("X,Y\n");
    for (xi, yi) in sample.pairs() {
        csv.push_str(&format!("{},{}\n", fmt_num(xi), fmt_num(yi)));
    }
    csv
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataRow {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

pub fn data_table(sample: &SampleSet) -> Vec<DataRow> {
    sample
        .pairs()
        .enumerate()
        .map(|(index, (x, y))| DataRow { index, x, y })
        .collect()
}


#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    pub n_points: usize,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl SampleSummary {
    pub fn of(sample: &SampleSet) -> Self {
        Self {
            n_points: sample.len(),
            x_range: (sample.x_min(), sample.x_max()),
            y_range: (sample.y_min(), sample.y_max()),
        }
    }
}
