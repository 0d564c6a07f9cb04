use casteljau::interpolation::data::{
    data_table, parse_csv, parse_values, to_csv, DataRow, SampleSummary,
};
use casteljau::interpolation::errors::InterpolationError;
use casteljau::interpolation::SampleSet;

type TestResult = Result<(), InterpolationError>;

#[test]
fn parses_comma_separated_values() -> TestResult {
    assert_eq!(parse_values("1, 2.5,-3 ,4e1")?, vec![1.0, 2.5, -3.0, 40.0]);
    assert!(parse_values("   ")?.is_empty());
    Ok(())
}

#[test]
fn rejects_bad_tokens() {
    let err = parse_values("1, abc, 3").unwrap_err();
    assert!(matches!(err, InterpolationError::Parse { ref token } if token == "abc"));

    let err = parse_values("1,,3").unwrap_err();
    assert!(matches!(err, InterpolationError::Parse { ref token } if token.is_empty()));

    let err = parse_values("1, inf").unwrap_err();
    assert!(matches!(err, InterpolationError::Parse { .. }));
}

#[test]
fn parses_csv_with_header() -> TestResult {
    let (x, y) = parse_csv("X,Y\n0,1\n1, 2\n\n2,5,ignored\n")?;
    assert_eq!(x, vec![0.0, 1.0, 2.0]);
    assert_eq!(y, vec![1.0, 2.0, 5.0]);

    let (x, y) = parse_csv("X,Y\n")?;
    assert!(x.is_empty() && y.is_empty());
    Ok(())
}

#[test]
fn csv_row_without_y() {
    let err = parse_csv("X,Y\n1\n").unwrap_err();
    assert!(matches!(err, InterpolationError::Parse { ref token } if token.is_empty()));
}

#[test]
fn exports_csv() -> TestResult {
    let x = [0.0, 1.5, -2.0];
    let y = [1.0, 2.0, 0.25];
    let csv = to_csv(&SampleSet::new(&x, &y)?);
    assert_eq!(csv, "X,Y\n0,1\n1.5,2\n-2,0.25\n");

    let (px, py) = parse_csv(&csv)?;
    assert_eq!(px, x.to_vec());
    assert_eq!(py, y.to_vec());
    Ok(())
}

#[test]
fn indexed_rows() -> TestResult {
    let x = [3.0, 4.0];
    let y = [9.0, 16.0];
    let rows = data_table(&SampleSet::new(&x, &y)?);
    assert_eq!(
        rows,
        vec![
            DataRow { index: 0, x: 3.0, y: 9.0 },
            DataRow { index: 1, x: 4.0, y: 16.0 },
        ]
    );

    let json = serde_json::to_string(&rows[1]).unwrap();
    assert_eq!(json, r#"{"index":1,"x":4.0,"y":16.0}"#);
    Ok(())
}

#[test]
fn summary_ranges() -> TestResult {
    let x = [2.0, -1.0, 5.0];
    let y = [0.5, 3.0, -4.0];
    let summary = SampleSummary::of(&SampleSet::new(&x, &y)?);
    assert_eq!(summary.n_points, 3);
    assert_eq!(summary.x_range, (-1.0, 5.0));
    assert_eq!(summary.y_range, (-4.0, 3.0));
    Ok(())
}
