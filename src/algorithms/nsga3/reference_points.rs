//! Systematic (Das-Dennis) reference point generation on the standard simplex.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/reference_points_test.rs"]
mod reference_points_test;

use super::ReferencePoint;
use crate::utils::{Float, SelectionError, SelectionResult};

/// Generates the full simplex lattice of reference directions for the given objective
/// dimension: every point whose coordinates are non-negative multiples of `1/divisions`
/// summing to one. The result contains exactly `C(dimension + divisions - 1, divisions)`
/// points and is generated with the first axis ascending, so for two dimensions the
/// sequence starts at `(0, 1)` and ends at `(1, 0)`.
///
/// The lattice is enumerated over exact integer compositions and scaled once at the end,
/// so no point is lost or duplicated to accumulated floating point error at the simplex
/// boundary.
pub fn generate_reference_points(divisions: usize, dimension: usize) -> SelectionResult<Vec<ReferencePoint>> {
    if divisions < 1 {
        return Err(SelectionError::InvalidParameter(format!("divisions must be positive, got {divisions}")));
    }

    if dimension < 2 {
        return Err(SelectionError::InvalidParameter(format!("dimension must be at least 2, got {dimension}")));
    }

    let mut points = Vec::with_capacity(binomial(dimension + divisions - 1, divisions));
    let mut composition = vec![0_usize; dimension];
    fill_simplex_lattice(divisions, divisions, 0, &mut composition, &mut points);

    Ok(points)
}

/// Enumerates all compositions of `divisions` into `composition.len()` non-negative parts,
/// scaling each completed composition onto the simplex.
fn fill_simplex_lattice(
    divisions: usize,
    remaining: usize,
    axis: usize,
    composition: &mut [usize],
    points: &mut Vec<ReferencePoint>,
) {
    if axis + 1 == composition.len() {
        composition[axis] = remaining;
        points.push(composition.iter().map(|&steps| steps as Float / divisions as Float).collect());
        return;
    }

    for steps in 0..=remaining {
        composition[axis] = steps;
        fill_simplex_lattice(divisions, remaining - steps, axis + 1, composition, points);
    }
}

fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);

    (0..k).fold(1, |acc, idx| acc * (n - idx) / (idx + 1))
}
