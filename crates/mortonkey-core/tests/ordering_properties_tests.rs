//! Property-based tests for the ordering produced by `compare`.
//!
//! A comparator driving a B-tree or a merge must be a strict weak order:
//! deterministic, antisymmetric and transitive over every key it accepts.

use std::cmp::Ordering;

use mortonkey_core::{compare, encode_key, BoundingBox, ScaleFactor, DEFAULT_MAX_GRID};
use proptest::prelude::*;

const EXTENT: f64 = 1000.0;

fn scale_factor(dim: u16, max_grid: u32) -> ScaleFactor {
    let global = BoundingBox::from_ranges(&vec![(-EXTENT, EXTENT); usize::from(dim)]).unwrap();
    ScaleFactor::build(&global, dim, max_grid).unwrap()
}

/// A valid key inside the global box: each range is `(lo, hi)` with `lo <= hi`.
fn key_strategy(dim: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec((-EXTENT..EXTENT, -EXTENT..EXTENT), dim).prop_map(|pairs| {
        let ranges: Vec<(f64, f64)> = pairs
            .into_iter()
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        encode_key(&BoundingBox::from_ranges(&ranges).unwrap()).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: repeated comparisons return the same result
    #[test]
    fn prop_deterministic(a in key_strategy(3), b in key_strategy(3)) {
        let sf = scale_factor(3, DEFAULT_MAX_GRID);
        let first = compare(&a, &b, &sf).unwrap();
        for _ in 0..3 {
            prop_assert_eq!(compare(&a, &b, &sf).unwrap(), first);
        }
    }

    /// Property: compare(a, b) == compare(b, a).reverse()
    #[test]
    fn prop_antisymmetric(a in key_strategy(2), b in key_strategy(2)) {
        let sf = scale_factor(2, DEFAULT_MAX_GRID);
        let ab = compare(&a, &b, &sf).unwrap();
        let ba = compare(&b, &a, &sf).unwrap();
        prop_assert_eq!(ab, ba.reverse());
    }

    /// Property: every key equals itself
    #[test]
    fn prop_reflexive(a in key_strategy(4)) {
        let sf = scale_factor(4, DEFAULT_MAX_GRID);
        prop_assert_eq!(compare(&a, &a, &sf).unwrap(), Ordering::Equal);
    }

    /// Property: a < b and b < c imply a < c
    #[test]
    fn prop_transitive(
        a in key_strategy(2),
        b in key_strategy(2),
        c in key_strategy(2),
    ) {
        // A coarse grid makes equal codes common enough to exercise ties.
        let sf = scale_factor(2, 16);
        let ab = compare(&a, &b, &sf).unwrap();
        let bc = compare(&b, &c, &sf).unwrap();
        let ac = compare(&a, &c, &sf).unwrap();
        if ab == bc {
            prop_assert_eq!(ac, ab);
        } else if ab == Ordering::Equal {
            prop_assert_eq!(ac, bc);
        } else if bc == Ordering::Equal {
            prop_assert_eq!(ac, ab);
        }
    }

    /// Property: in one dimension the order follows the box centers
    #[test]
    fn prop_one_dim_monotonic(a in key_strategy(1), b in key_strategy(1)) {
        let sf = scale_factor(1, DEFAULT_MAX_GRID);
        let center = |key: &[u8]| {
            let bbox = mortonkey_core::decode_key(key).unwrap();
            bbox.min(0) + (bbox.max(0) - bbox.min(0)) / 2.0
        };
        let (ca, cb) = (center(&a), center(&b));
        let ord = compare(&a, &b, &sf).unwrap();
        if ca < cb {
            prop_assert_ne!(ord, Ordering::Greater);
        } else if ca > cb {
            prop_assert_ne!(ord, Ordering::Less);
        } else {
            prop_assert_eq!(ord, Ordering::Equal);
        }
    }

    /// Property: a degenerate global dimension never affects the order
    #[test]
    fn prop_zero_range_collapse(
        x in -EXTENT..EXTENT,
        y1 in -1.0e6f64..1.0e6,
        y2 in -1.0e6f64..1.0e6,
    ) {
        let global = BoundingBox::from_ranges(&[(-EXTENT, EXTENT), (7.0, 7.0)]).unwrap();
        let sf = ScaleFactor::build(&global, 2, DEFAULT_MAX_GRID).unwrap();
        let a = encode_key(&BoundingBox::from_ranges(&[(x, x), (y1, y1)]).unwrap()).unwrap();
        let b = encode_key(&BoundingBox::from_ranges(&[(x, x), (y2, y2)]).unwrap()).unwrap();
        prop_assert_eq!(compare(&a, &b, &sf).unwrap(), Ordering::Equal);
    }
}

#[test]
fn test_errors_are_symmetric() {
    // Arrange
    let sf = scale_factor(2, DEFAULT_MAX_GRID);
    let good = encode_key(&BoundingBox::from_ranges(&[(0.0, 1.0), (0.0, 1.0)]).unwrap()).unwrap();
    let wrong_dim = encode_key(&BoundingBox::from_ranges(&[(0.0, 1.0)]).unwrap()).unwrap();

    // Act
    let ab = compare(&good, &wrong_dim, &sf);
    let ba = compare(&wrong_dim, &good, &sf);

    // Assert
    let ab = ab.unwrap_err();
    let ba = ba.unwrap_err();
    assert!(ab.is_precondition_violation());
    assert_eq!(ab, ba);
}
