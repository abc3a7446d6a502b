use super::*;
use crate::helpers::assert_objectives_eq;

#[test]
fn can_anchor_ideal_point_and_extremes() {
    let candidates = vec![vec![1., 0.], vec![0., 1.], vec![0.5, 0.5], vec![0., 0.]];
    let nondominated = vec![vec![1., 0.], vec![0., 1.]];

    let normalized = normalize(&candidates, &nondominated).unwrap();

    // the extreme points map onto the unit axes, the ideal point onto the origin
    assert_objectives_eq(&normalized[0], &[1., 0.], 1e-6);
    assert_objectives_eq(&normalized[1], &[0., 1.], 1e-6);
    assert_objectives_eq(&normalized[2], &[0.5, 0.5], 1e-6);
    assert_objectives_eq(&normalized[3], &[0., 0.], 1e-6);
}

#[test]
fn can_compute_hyperplane_intercepts_in_three_dimensions() {
    // extreme points (2,0,0), (0,3,0), (0,0,4) span the plane with intercepts 2, 3, 4
    let candidates = vec![vec![2., 0., 0.], vec![0., 3., 0.], vec![0., 0., 4.], vec![1., 1., 1.]];
    let nondominated = candidates[0..3].to_vec();

    let normalized = normalize(&candidates, &nondominated).unwrap();

    for axis in 0..3 {
        assert!((normalized[axis][axis] - 1.).abs() < 1e-6);
    }
    assert_objectives_eq(&normalized[3], &[0.5, 1. / 3., 0.25], 1e-6);
}

#[test]
fn can_translate_by_ideal_point() {
    let candidates = vec![vec![3., 2.], vec![2., 3.], vec![2.5, 2.5]];
    let nondominated = vec![vec![3., 2.], vec![2., 3.]];

    let normalized = normalize(&candidates, &nondominated).unwrap();

    assert_objectives_eq(&normalized[0], &[1., 0.], 1e-6);
    assert_objectives_eq(&normalized[1], &[0., 1.], 1e-6);
    assert_objectives_eq(&normalized[2], &[0.5, 0.5], 1e-6);
}

#[test]
fn can_use_custom_penalty() {
    let candidates = vec![vec![1., 0.], vec![0., 1.]];
    let nondominated = candidates.clone();

    let normalized = Normalizer::new(1e3).unwrap().normalize(&candidates, &nondominated).unwrap();

    assert_objectives_eq(&normalized[0], &[1., 0.], 1e-6);
    assert_objectives_eq(&normalized[1], &[0., 1.], 1e-6);
}

#[test]
fn can_fall_back_to_ranges_on_duplicate_extremes() {
    // both axes select the same nondominated point, the hyperplane system is singular
    let candidates = vec![vec![0., 0.], vec![1., 1.]];
    let nondominated = vec![vec![1., 1.], vec![1., 1.]];

    let normalized = normalize(&candidates, &nondominated).unwrap();

    assert_eq!(normalized, vec![vec![0., 0.], vec![1., 1.]]);
}

#[test]
fn can_reject_flat_candidate_geometry() {
    let candidates = vec![vec![1., 1.], vec![1., 1.]];
    let nondominated = candidates.clone();

    assert!(matches!(normalize(&candidates, &nondominated), Err(SelectionError::DegenerateGeometry(_))));
}

#[test]
fn can_reject_under_determined_nondominated_front() {
    let candidates = vec![vec![1., 2.], vec![2., 1.]];
    let nondominated = vec![vec![1., 2.]];

    assert!(matches!(normalize(&candidates, &nondominated), Err(SelectionError::DimensionMismatch(_))));
}

#[test]
fn can_reject_mismatched_dimensions() {
    let candidates = vec![vec![1., 2.]];
    let nondominated = vec![vec![1., 2., 3.], vec![3., 2., 1.], vec![2., 2., 2.]];

    assert!(matches!(normalize(&candidates, &nondominated), Err(SelectionError::DimensionMismatch(_))));
}

#[test]
fn can_reject_invalid_penalty() {
    assert!(matches!(Normalizer::new(0.5), Err(SelectionError::InvalidParameter(_))));
    assert!(matches!(Normalizer::new(Float::NAN), Err(SelectionError::InvalidParameter(_))));
    assert!(matches!(Normalizer::new(Float::INFINITY), Err(SelectionError::InvalidParameter(_))));
}
