//! Formula Renderer
//!
//! Renders a human-readable expression for each method:
//!
//! ```text
//! === LAGRANGE FORMULA ===
//! P(x) = 1((x - 1)/(0 - 1))((x - 2)/(0 - 2)) + 2((x - 0)/(1 - 0))((x - 2)/(1 - 2)) + ...
//! ```
//!
//! Newton Divided reuses [`divided_difference_table`]; Newton Forward
//! differences `y` on its own and does not re-check equal spacing, so
//! it always prints the forward form even where evaluation would have
//! fallen back. Bezier is descriptive text, not a closed form.


use crate::interpolation::algorithms::{Algorithm, Selection};
use crate::interpolation::bezier::control_points;
use crate::interpolation::differences::{divided_difference_table, factorial, forward_differences};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::sample::SampleSet;


/// Formats like the chart front end: integral values without a fraction,
/// no negative zero, and exponent form (`1e+21`, `2.5e-9`) when the
/// magnitude is at least `1e21` or below `1e-6`.
pub(crate) fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let magnitude = v.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return v.to_string();
    }

    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}


pub fn section_title(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Lagrange      => "LAGRANGE FORMULA",
        Algorithm::NewtonDivided => "NEWTON DIVIDED DIFFERENCES",
        Algorithm::NewtonForward => "NEWTON FORWARD DIFFERENCES",
        Algorithm::Bezier        => "BEZIER INTERPOLATION",
    }
}


/// Formula body of one method, without its heading.
pub fn render_body(algorithm: Algorithm, sample: &SampleSet) -> Result<String, InterpolationError> {
    match algorithm {
        Algorithm::Lagrange      => Ok(lagrange(sample)),
        Algorithm::NewtonDivided => newton_divided(sample),
        Algorithm::NewtonForward => Ok(newton_forward(sample)),
        Algorithm::Bezier        => Ok(bezier(sample)),
    }
}


/// Renders `selection`.
///
/// A single method is headed `=== TITLE ===`; [`Selection::All`] is headed
/// `=== ALL INTERPOLATION FORMULAS ===` with one `--- TITLE ---` section per
/// method separated by blank lines.
///
/// # Errors
/// - [`InterpolationError::DuplicateX`] when Newton Divided is rendered over
///   repeated x-values.
pub fn render(selection: Selection, sample: &SampleSet) -> Result<String, InterpolationError> {
    match selection {
        Selection::Single(algorithm) => Ok(format!(
            "=== {} ===\n{}",
            section_title(algorithm),
            render_body(algorithm, sample)?,
        )),
        Selection::All => {
            let sections = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    render_body(algorithm, sample)
                        .map(|body| format!("--- {} ---\n{}", section_title(algorithm), body))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("=== ALL INTERPOLATION FORMULAS ===\n\n{}", sections.join("\n\n")))
        }
    }
}


fn lagrange(sample: &SampleSet) -> String {
    let x = sample.x();
    let terms: Vec<String> = sample
        .y()
        .iter()
        .enumerate()
        .map(|(i, &yi)| {
            let mut term = fmt_num(yi);
            for (j, &xj) in x.iter().enumerate() {
                if j != i {
                    term.push_str(&format!(
                        "((x - {})/({} - {}))",
                        fmt_num(xj),
                        fmt_num(x[i]),
                        fmt_num(xj),
                    ));
                }
            }
            term
        })
        .collect();

    format!("P(x) = {}", terms.join(" + "))
}


fn newton_divided(sample: &SampleSet) -> Result<String, InterpolationError> {
    let x = sample.x();
    let table = divided_difference_table(sample)?;
    let coeffs = &table[0];

    let mut out = format!("P(x) = {}", fmt_num(coeffs[0]));
    for (i, &c) in coeffs.iter().enumerate().skip(1) {
        out.push_str(&format!(" + {}", fmt_num(c)));
        for &xk in &x[..i] {
            out.push_str(&format!("(x - {})", fmt_num(xk)));
        }
    }
    Ok(out)
}


fn newton_forward(sample: &SampleSet) -> String {
    let x = sample.x();
    let deltas = forward_differences(sample.y());

    let mut out = String::new();
    if x.len() >= 2 {
        let h = x[1] - x[0];
        out.push_str(&format!("h = {}\n", fmt_num(h)));
        out.push_str(&format!("u = (x - x₀)/h = (x - {})/{}\n", fmt_num(x[0]), fmt_num(h)));
    }

    out.push_str(&format!("P(x) = {}", fmt_num(deltas[0])));
    for (i, &delta) in deltas.iter().enumerate().skip(1) {
        out.push_str(&format!(" + ({}/{})", fmt_num(delta), fmt_num(factorial(i as u32))));
        for k in 0..i {
            out.push_str(&format!("(u - {k})"));
        }
    }
    out
}


fn bezier(sample: &SampleSet) -> String {
    let points: Vec<String> = control_points(sample.y())
        .iter()
        .enumerate()
        .map(|(i, p)| format!("P{}({}, {})", i, fmt_num(p.x), fmt_num(p.y)))
        .collect();

    let mut out = String::from("Using De Casteljau's algorithm:\n");
    out.push_str("t = (x - x_min) / (x_max - x_min)\n");
    out.push_str(&format!("Control Points: {}", points.join(", ")));
    out.push_str("\n\nBezier curve is calculated using recursive linear interpolation:\n");
    out.push_str("B(t) = (1-t)ⁿ⁻¹P₀ + (n-1)(1-t)ⁿ⁻²tP₁ + ... + tⁿ⁻¹Pₙ₋₁\n");
    out.push_str(&format!("where n = {} (number of control points)", sample.len()));
    out
}
