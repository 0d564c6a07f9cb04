use casteljau::interpolation::bezier::{
    control_points, de_casteljau, interpolate, Bezier, BezierCfg, ControlPoint,
};
use casteljau::interpolation::errors::InterpolationError;
use casteljau::interpolation::{Interpolator, SampleSet};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn midpoint_diverges_from_polynomial() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 5.0, 10.0];

    let cfg = BezierCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[1.5])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "bezier");
    // (1 + 3*2 + 3*5 + 10) / 8
    assert_eq!(rep.evaluated[0], 4.0);
    assert!((rep.evaluated[0] - 3.25).abs() > 0.5);
    Ok(())
}

#[test]
fn endpoints_are_exact() -> TestResult {
    let x = [0.0, 1.0, 3.0, 6.0, 10.0];
    let y = [0.0, 2.0, 3.0, 3.0, 8.0];
    let bezier = Bezier::new(SampleSet::new(&x, &y)?)?;

    assert_eq!(bezier.eval(0.0)?, 0.0);
    assert_eq!(bezier.eval(10.0)?, 8.0);

    let points = bezier.control_points();
    assert_eq!(points.len(), 5);
    assert_eq!(points[2], ControlPoint { x: 0.5, y: 3.0 });
    Ok(())
}

#[test]
fn interior_nodes_are_approximated() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 5.0, 10.0];
    let bezier = Bezier::new(SampleSet::new(&x, &y)?)?;

    // t = 1/3: (8 + 24 + 30 + 10) / 27
    let at_one = bezier.eval(1.0)?;
    assert!(approx_eq(at_one, 72.0 / 27.0), "got {at_one}");
    assert!((at_one - y[1]).abs() > 0.5);
    Ok(())
}

#[test]
fn control_points_are_positional() {
    let points = control_points(&[4.0, 5.0, 6.0, 7.0]);
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    assert_eq!(xs, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    assert_eq!(ys, vec![4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn follows_sample_order_not_x_order() -> TestResult {
    // first sample sits at the right end of the range
    let x = [2.0, 0.0];
    let y = [1.0, 5.0];
    let bezier = Bezier::new(SampleSet::new(&x, &y)?)?;

    assert_eq!(bezier.parameter(0.0), 0.0);
    assert_eq!(bezier.eval(0.0)?, 1.0);
    assert_eq!(bezier.eval(2.0)?, 5.0);
    Ok(())
}

#[test]
fn de_casteljau_reduces_both_coordinates() {
    let points = [
        ControlPoint { x: 0.0, y: 0.0 },
        ControlPoint { x: 0.5, y: 2.0 },
        ControlPoint { x: 1.0, y: 0.0 },
    ];
    let p = de_casteljau(&points, 0.5).unwrap();
    assert_eq!(p, ControlPoint { x: 0.5, y: 1.0 });
    assert!(de_casteljau(&[], 0.5).is_none());
}

#[test]
fn single_point_is_constant() -> TestResult {
    let bezier = Bezier::new(SampleSet::new(&[5.0], &[7.0])?)?;
    assert_eq!(bezier.eval_many(&[-100.0, 5.0, 1e3])?, vec![7.0, 7.0, 7.0]);
    Ok(())
}

#[test]
fn zero_width_range_is_degenerate() {
    let x = [2.0, 2.0];
    let y = [1.0, 3.0];
    let err = Bezier::new(SampleSet::new(&x, &y).unwrap()).unwrap_err();
    assert!(matches!(err, InterpolationError::DegenerateRange { x } if x == 2.0));
    assert!(err.is_numeric_degeneracy());
}
