//! Population fixtures.

use crate::prelude::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Creates a population of `size` objective vectors drawn uniformly from the unit cube.
pub fn create_random_population(size: usize, dimension: usize, seed: u64) -> Vec<ObjectiveVector> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..size).map(|_| (0..dimension).map(|_| rng.gen_range(0.0..1.0)).collect()).collect()
}

/// Asserts that two objective vectors are equal within the given tolerance.
pub fn assert_objectives_eq(actual: &[Float], expected: &[Float], tolerance: Float) {
    assert_eq!(actual.len(), expected.len(), "objective dimensions differ");

    actual.iter().zip(expected.iter()).for_each(|(actual_value, expected_value)| {
        assert!(
            (actual_value - expected_value).abs() < tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    });
}
