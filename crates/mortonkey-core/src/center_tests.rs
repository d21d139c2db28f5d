//! Tests for `center` module

use super::bbox::BoundingBox;
use super::center::*;

#[test]
fn test_center_of_ranges() {
    // Arrange
    let bbox = BoundingBox::from_ranges(&[(0.0, 10.0), (-4.0, 2.0), (7.0, 7.0)]).unwrap();

    // Act
    let c = center(&bbox).expect("center");

    // Assert
    assert_eq!(c.dim(), 3);
    assert_eq!(c.as_slice(), &[5.0, -1.0, 7.0]);
}

#[test]
fn test_center_of_inverted_box_is_not_rejected() {
    // Inverted boxes still produce a deterministic center.
    let bbox = BoundingBox::from_ranges(&[(10.0, 0.0)]).unwrap();
    let c = center(&bbox).expect("center");
    assert_eq!(c.as_slice(), &[5.0]);
}

#[test]
fn test_center_avoids_overflow_on_large_bounds() {
    // min + (max - min) / 2 stays finite where (min + max) / 2 would not.
    let bbox = BoundingBox::from_ranges(&[(f64::MAX / 2.0, f64::MAX)]).unwrap();
    let c = center(&bbox).expect("center");
    assert!(c.as_slice()[0].is_finite());
}
