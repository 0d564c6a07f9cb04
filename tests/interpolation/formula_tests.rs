use casteljau::interpolation::formula::{render, section_title};
use casteljau::interpolation::differences::factorial;
use casteljau::interpolation::errors::InterpolationError;
use casteljau::interpolation::{Algorithm, SampleSet, Selection};

type TestResult = Result<(), InterpolationError>;

const X: [f64; 3] = [0.0, 1.0, 2.0];
const Y: [f64; 3] = [1.0, 2.0, 5.0];

fn sample() -> SampleSet<'static> {
    SampleSet::new(&X, &Y).unwrap()
}

#[test]
fn lagrange_formula() -> TestResult {
    let text = render(Selection::Single(Algorithm::Lagrange), &sample())?;
    assert_eq!(
        text,
        "=== LAGRANGE FORMULA ===\n\
         P(x) = 1((x - 1)/(0 - 1))((x - 2)/(0 - 2)) \
         + 2((x - 0)/(1 - 0))((x - 2)/(1 - 2)) \
         + 5((x - 0)/(2 - 0))((x - 1)/(2 - 1))"
    );
    Ok(())
}

#[test]
fn newton_divided_formula() -> TestResult {
    let text = render(Selection::Single(Algorithm::NewtonDivided), &sample())?;
    assert_eq!(
        text,
        "=== NEWTON DIVIDED DIFFERENCES ===\nP(x) = 1 + 1(x - 0) + 1(x - 0)(x - 1)"
    );
    Ok(())
}

#[test]
fn newton_forward_formula() -> TestResult {
    let text = render(Selection::Single(Algorithm::NewtonForward), &sample())?;
    assert_eq!(
        text,
        "=== NEWTON FORWARD DIFFERENCES ===\n\
         h = 1\n\
         u = (x - x₀)/h = (x - 0)/1\n\
         P(x) = 1 + (1/1)(u - 0) + (2/2)(u - 0)(u - 1)"
    );
    Ok(())
}

#[test]
fn newton_forward_formula_ignores_spacing() -> TestResult {
    let x = [0.0, 1.0, 3.0];
    let text = render(Selection::Single(Algorithm::NewtonForward), &SampleSet::new(&x, &Y)?)?;
    assert!(text.contains("h = 1\n"));
    assert!(text.ends_with("P(x) = 1 + (1/1)(u - 0) + (2/2)(u - 0)(u - 1)"));
    Ok(())
}

#[test]
fn bezier_formula() -> TestResult {
    let text = render(Selection::Single(Algorithm::Bezier), &sample())?;
    assert_eq!(
        text,
        "=== BEZIER INTERPOLATION ===\n\
         Using De Casteljau's algorithm:\n\
         t = (x - x_min) / (x_max - x_min)\n\
         Control Points: P0(0, 1), P1(0.5, 2), P2(1, 5)\n\
         \n\
         Bezier curve is calculated using recursive linear interpolation:\n\
         B(t) = (1-t)ⁿ⁻¹P₀ + (n-1)(1-t)ⁿ⁻²tP₁ + ... + tⁿ⁻¹Pₙ₋₁\n\
         where n = 3 (number of control points)"
    );
    Ok(())
}

#[test]
fn all_formulas_in_order() -> TestResult {
    let text = render(Selection::All, &sample())?;
    assert!(text.starts_with("=== ALL INTERPOLATION FORMULAS ===\n\n--- LAGRANGE FORMULA ---\nP(x) = "));

    let positions: Vec<usize> = Algorithm::ALL
        .iter()
        .map(|&a| text.find(&format!("\n\n--- {} ---\n", section_title(a))).unwrap_or(0))
        .collect();
    assert!(positions[1] > 0);
    assert!(positions.windows(2).skip(1).all(|w| w[0] < w[1]));
    assert!(text.contains("--- NEWTON DIVIDED DIFFERENCES ---\nP(x) = 1 + 1(x - 0) + 1(x - 0)(x - 1)"));
    Ok(())
}

#[test]
fn fractional_coefficients() -> TestResult {
    let x = [0.0, 3.0];
    let y = [0.0, 1.0];
    let text = render(Selection::Single(Algorithm::NewtonDivided), &SampleSet::new(&x, &y)?)?;
    assert_eq!(text, "=== NEWTON DIVIDED DIFFERENCES ===\nP(x) = 0 + 0.3333333333333333(x - 0)");
    Ok(())
}

#[test]
fn single_point_formulas() -> TestResult {
    let sample = SampleSet::new(&[5.0], &[7.0])?;
    assert_eq!(
        render(Selection::Single(Algorithm::Lagrange), &sample)?,
        "=== LAGRANGE FORMULA ===\nP(x) = 7"
    );
    assert_eq!(
        render(Selection::Single(Algorithm::NewtonForward), &sample)?,
        "=== NEWTON FORWARD DIFFERENCES ===\nP(x) = 7"
    );
    assert!(render(Selection::Single(Algorithm::Bezier), &sample)?.contains("Control Points: P0(0, 7)\n"));
    Ok(())
}

#[test]
fn divided_formula_rejects_repeated_x() {
    let x = [1.0, 1.0, 2.0];
    let err = render(Selection::All, &SampleSet::new(&x, &Y).unwrap()).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { i: 0, j: 1, .. }));
}

#[test]
fn factorial_values() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(1), 1.0);
    assert_eq!(factorial(5), 120.0);
    assert_eq!(factorial(10), 3_628_800.0);
}

#[test]
fn exponent_form_outside_plain_range() -> TestResult {
    let x = [0.0, 1e-7];
    let y = [1e21, 2.0];
    assert_eq!(
        render(Selection::Single(Algorithm::Lagrange), &SampleSet::new(&x, &y)?)?,
        "=== LAGRANGE FORMULA ===\n\
         P(x) = 1e+21((x - 1e-7)/(0 - 1e-7)) + 2((x - 0)/(1e-7 - 0))"
    );

    let x = [0.0, 1.0];
    let y = [0.0, -2.5e-9];
    assert_eq!(
        render(Selection::Single(Algorithm::NewtonDivided), &SampleSet::new(&x, &y)?)?,
        "=== NEWTON DIVIDED DIFFERENCES ===\nP(x) = 0 + -2.5e-9(x - 0)"
    );
    Ok(())
}

#[test]
fn plain_form_at_range_edges() -> TestResult {
    let x = [1e-6, 1e20];
    let y = [123456789.5, 0.5];
    let text = render(Selection::Single(Algorithm::Lagrange), &SampleSet::new(&x, &y)?)?;
    assert_eq!(
        text,
        "=== LAGRANGE FORMULA ===\n\
         P(x) = 123456789.5((x - 100000000000000000000)/(0.000001 - 100000000000000000000)) \
         + 0.5((x - 0.000001)/(100000000000000000000 - 0.000001))"
    );
    Ok(())
}
