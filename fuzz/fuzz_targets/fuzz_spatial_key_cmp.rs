//! Fuzz target for the spatial key comparator.
//!
//! Keys come straight from the storage layer, so arbitrary bytes must never
//! panic: malformed input has to surface as an error.
//! When both keys encode, the comparison must be antisymmetric.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mortonkey_core::{BoundingBox, ScaleFactor, SpatialKeyComparator};

#[derive(Arbitrary, Debug)]
struct Input {
    dim: u8,
    max_grid: u32,
    validate: bool,
    global: Vec<f64>,
    key_a: Vec<u8>,
    key_b: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let dim = u16::from(input.dim % 8).max(1);
    let mut coords = input.global;
    coords.resize(usize::from(dim) * 2, 0.0);

    let Ok(global) = BoundingBox::new(coords) else {
        return;
    };
    let Ok(sf) = ScaleFactor::build(&global, dim, input.max_grid) else {
        return;
    };
    let cmp = SpatialKeyComparator::new(&sf).validate_boxes(input.validate);

    let ab = cmp.compare(&input.key_a, &input.key_b);
    let ba = cmp.compare(&input.key_b, &input.key_a);
    if let (Ok(ab), Ok(ba)) = (ab, ba) {
        assert_eq!(ab, ba.reverse());
    }
});
