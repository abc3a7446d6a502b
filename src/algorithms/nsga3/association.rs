//! Association of normalized candidates with their nearest reference directions. This is
//! the hot path of the selection step, `O(N * K * M)` for `N` candidates, `K` reference
//! points and `M` objectives, so candidates are processed in parallel and the full
//! distance matrix is never materialized.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/association_test.rs"]
mod association_test;

use super::{ObjectiveVector, ReferencePoint, get_uniform_dimension};
use crate::utils::{Float, SelectionError, SelectionResult, compare_floats, parallel_collect};
use std::cmp::Ordering;

/// The nearest reference direction assigned to one candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct AssociationRecord {
    /// Index of the associated reference point.
    pub reference: usize,
    /// Perpendicular distance from the candidate to the ray spanned by the reference point.
    pub distance: Float,
}

/// The outcome of associating a candidate set with a set of reference directions.
///
/// A niche preservation step is expected to consume the records together with the niche
/// counts when pruning the boundary front; this crate only produces the association.
#[derive(Clone, Debug)]
pub struct Association {
    records: Vec<AssociationRecord>,
    niche_counts: Vec<usize>,
}

impl Association {
    /// One record per candidate, in candidate order.
    pub fn records(&self) -> &[AssociationRecord] {
        &self.records
    }

    /// The number of candidates associated with each reference point, indexed by
    /// reference point.
    pub fn niche_counts(&self) -> &[usize] {
        &self.niche_counts
    }
}

/// Associates every candidate with the reference direction closest to it, measuring the
/// distance perpendicular to the ray through the origin in the direction of the reference
/// point. Distance ties are broken towards the lowest reference point index, which keeps
/// repeated calls on identical input bit-reproducible.
pub fn associate(
    reference_points: &[ReferencePoint],
    candidates: &[ObjectiveVector],
) -> SelectionResult<Association> {
    let reference_dimension = get_uniform_dimension(reference_points, "reference points")?;
    let candidate_dimension = get_uniform_dimension(candidates, "candidates")?;

    if reference_dimension != candidate_dimension {
        return Err(SelectionError::DimensionMismatch(format!(
            "reference points have dimension {reference_dimension}, candidates have {candidate_dimension}"
        )));
    }

    let squared_norms =
        reference_points.iter().map(|point| point.iter().map(|value| value * value).sum::<Float>()).collect::<Vec<_>>();

    if let Some(index) = squared_norms.iter().position(|norm| *norm == 0.) {
        return Err(SelectionError::InvalidParameter(format!("reference point {index} has zero magnitude")));
    }

    let records = parallel_collect(candidates, |candidate| {
        find_nearest_reference(candidate, reference_points, &squared_norms)
    });

    let mut niche_counts = vec![0; reference_points.len()];
    records.iter().for_each(|record| niche_counts[record.reference] += 1);

    Ok(Association { records, niche_counts })
}

fn find_nearest_reference(
    candidate: &[Float],
    reference_points: &[ReferencePoint],
    squared_norms: &[Float],
) -> AssociationRecord {
    let mut nearest = AssociationRecord { reference: 0, distance: Float::INFINITY };

    for (reference, (point, &squared_norm)) in reference_points.iter().zip(squared_norms.iter()).enumerate() {
        let distance = perpendicular_distance(candidate, point, squared_norm);
        if compare_floats(distance, nearest.distance) == Ordering::Less {
            nearest = AssociationRecord { reference, distance };
        }
    }

    nearest
}

/// Distance from `candidate` to its projection onto the ray spanned by `reference`.
fn perpendicular_distance(candidate: &[Float], reference: &[Float], squared_norm: Float) -> Float {
    let dot = reference.iter().zip(candidate.iter()).map(|(direction, value)| direction * value).sum::<Float>();
    let scale = dot / squared_norm;

    candidate
        .iter()
        .zip(reference.iter())
        .map(|(value, direction)| {
            let rest = value - direction * scale;
            rest * rest
        })
        .sum::<Float>()
        .sqrt()
}
