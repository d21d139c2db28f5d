//! Tests for `grid` module

use super::bbox::BoundingBox;
use super::center::CenterPoint;
use super::error::Error;
use super::grid::*;
use super::scale::ScaleFactor;

fn scale_1d(min: f64, max: f64, max_grid: u32) -> ScaleFactor {
    let global = BoundingBox::from_ranges(&[(min, max)]).unwrap();
    ScaleFactor::build(&global, 1, max_grid).unwrap()
}

#[test]
fn test_project_endpoints() {
    // Arrange
    let sf = scale_1d(0.0, 100.0, 1000);

    // Act
    let low = project(&CenterPoint::new(vec![0.0]), &sf).expect("project");
    let high = project(&CenterPoint::new(vec![100.0]), &sf).expect("project");

    // Assert
    assert_eq!(low.as_slice(), &[0]);
    assert_eq!(high.as_slice(), &[1000]);
}

#[test]
fn test_project_truncates_instead_of_rounding() {
    // 0.99 * 10 = 9.9 -> 9
    let sf = scale_1d(0.0, 100.0, 1000);
    let p = project(&CenterPoint::new(vec![0.99]), &sf).expect("project");
    assert_eq!(p.as_slice(), &[9]);
}

#[test]
fn test_project_zero_range_collapses_to_zero() {
    // Arrange
    let global = BoundingBox::from_ranges(&[(5.0, 5.0), (0.0, 10.0)]).unwrap();
    let sf = ScaleFactor::build(&global, 2, 100).unwrap();

    for value in [-1.0e9, 0.0, 5.0, 42.0, 1.0e12] {
        // Act
        let p = project(&CenterPoint::new(vec![value, 10.0]), &sf).expect("project");

        // Assert
        assert_eq!(p.as_slice()[0], 0, "value {value} must collapse");
        assert_eq!(p.as_slice()[1], 100);
    }
}

#[test]
fn test_project_out_of_range_clamps() {
    let sf = scale_1d(0.0, 10.0, 100);
    let below = project(&CenterPoint::new(vec![-5.0]), &sf).unwrap();
    let above = project(&CenterPoint::new(vec![1.0e300]), &sf).unwrap();
    assert_eq!(below.as_slice(), &[0]);
    assert_eq!(above.as_slice(), &[u32::MAX]);
}

#[test]
fn test_project_default_grid_full_range() {
    let sf = scale_1d(-1.0, 1.0, u32::MAX);
    let p = project(&CenterPoint::new(vec![1.0]), &sf).unwrap();
    assert_eq!(p.as_slice(), &[u32::MAX]);
}

#[test]
fn test_project_rejects_dim_mismatch() {
    let sf = scale_1d(0.0, 1.0, 10);
    let result = project(&CenterPoint::new(vec![0.5, 0.5]), &sf);
    assert_eq!(
        result,
        Err(Error::DimensionMismatch {
            expected: 1,
            actual: 2
        })
    );
}
