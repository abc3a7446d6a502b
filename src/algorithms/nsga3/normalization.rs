//! Adaptive normalization which maps the extreme structure of the nondominated front
//! approximately onto the corners of the unit simplex.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/normalization_test.rs"]
mod normalization_test;

use super::{ObjectiveVector, get_uniform_dimension};
use crate::algorithms::math::solve_linear_system;
use crate::utils::{Float, SelectionError, SelectionResult, argmin_floats};

/// Penalty put on foreign axes by the achievement scalarizing function.
const DEFAULT_ASF_PENALTY: Float = 1e6;

/// Intercepts below this threshold cannot be divided by in a meaningful way.
const MIN_INTERCEPT: Float = 1e-9;

/// Rescales candidate objective values into a common, ideal point anchored range: the
/// ideal point moves to the origin and the hyperplane through the per axis extreme points
/// of the nondominated front intersects every axis at one.
#[derive(Clone, Debug)]
pub struct Normalizer {
    asf_penalty: Float,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self { asf_penalty: DEFAULT_ASF_PENALTY }
    }
}

impl Normalizer {
    /// Creates a normalizer with a custom scalarization penalty.
    ///
    /// The penalty controls how strongly foreign axes suppress a point's claim to be the
    /// extreme of an axis; it has to be a finite value of at least one.
    pub fn new(asf_penalty: Float) -> SelectionResult<Self> {
        if !asf_penalty.is_finite() || asf_penalty < 1. {
            return Err(SelectionError::InvalidParameter(format!(
                "scalarization penalty must be finite and at least 1, got {asf_penalty}"
            )));
        }

        Ok(Self { asf_penalty })
    }

    /// Normalizes `candidates` using extreme points derived from the `nondominated` front.
    ///
    /// When the extreme points span no usable hyperplane (duplicates, collinearity, or
    /// intercepts without a meaningful magnitude), the per axis spread of the candidate
    /// set is used as intercepts instead; only when that spread is zero on some axis the
    /// geometry is reported as degenerate.
    pub fn normalize(
        &self,
        candidates: &[ObjectiveVector],
        nondominated: &[ObjectiveVector],
    ) -> SelectionResult<Vec<ObjectiveVector>> {
        let dimension = get_uniform_dimension(candidates, "candidates")?;
        let nondominated_dimension = get_uniform_dimension(nondominated, "nondominated front")?;

        if dimension != nondominated_dimension {
            return Err(SelectionError::DimensionMismatch(format!(
                "candidates have dimension {dimension}, nondominated front has {nondominated_dimension}"
            )));
        }

        if nondominated.len() < dimension {
            return Err(SelectionError::DimensionMismatch(format!(
                "{} nondominated points cannot anchor a hyperplane in {dimension} dimensions",
                nondominated.len()
            )));
        }

        let ideal_point = get_ideal_point(candidates, dimension);

        let intercepts = match get_hyperplane_intercepts(nondominated, &ideal_point, self.asf_penalty) {
            Some(intercepts) => intercepts,
            None => get_range_intercepts(candidates, &ideal_point)?,
        };

        Ok(candidates
            .iter()
            .map(|candidate| {
                candidate
                    .iter()
                    .zip(ideal_point.iter())
                    .zip(intercepts.iter())
                    .map(|((value, ideal), intercept)| (value - ideal) / intercept)
                    .collect()
            })
            .collect())
    }
}

/// Normalizes `candidates` against the `nondominated` front with the default penalty.
pub fn normalize(
    candidates: &[ObjectiveVector],
    nondominated: &[ObjectiveVector],
) -> SelectionResult<Vec<ObjectiveVector>> {
    Normalizer::default().normalize(candidates, nondominated)
}

fn get_ideal_point(candidates: &[ObjectiveVector], dimension: usize) -> Vec<Float> {
    (0..dimension)
        .map(|axis| candidates.iter().map(|candidate| candidate[axis]).fold(Float::INFINITY, Float::min))
        .collect()
}

/// Finds the intercepts of the hyperplane spanned by the per axis extreme points, or
/// `None` when the extreme geometry does not define a usable hyperplane.
fn get_hyperplane_intercepts(
    nondominated: &[ObjectiveVector],
    ideal_point: &[Float],
    asf_penalty: Float,
) -> Option<Vec<Float>> {
    let dimension = ideal_point.len();

    let extreme_points = (0..dimension)
        .map(|axis| {
            let index = argmin_floats(nondominated.iter().map(|point| achievement_scalar(point, axis, asf_penalty)))
                .expect("nondominated front is not empty");
            &nondominated[index]
        })
        .collect::<Vec<_>>();

    let shifted = extreme_points
        .iter()
        .map(|point| point.iter().zip(ideal_point.iter()).map(|(value, ideal)| value - ideal).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let unit_rhs = vec![1.; dimension];

    let plane = solve_linear_system(&shifted, &unit_rhs)?;
    let intercepts = plane.iter().map(|coefficient| 1. / coefficient).collect::<Vec<_>>();

    if intercepts.iter().all(|value| value.is_finite() && *value > MIN_INTERCEPT) { Some(intercepts) } else { None }
}

/// Largest translated value per axis over the candidate set, the fallback intercepts.
fn get_range_intercepts(candidates: &[ObjectiveVector], ideal_point: &[Float]) -> SelectionResult<Vec<Float>> {
    ideal_point
        .iter()
        .enumerate()
        .map(|(axis, ideal)| {
            let range = candidates.iter().map(|candidate| candidate[axis] - ideal).fold(0., Float::max);
            if range > MIN_INTERCEPT {
                Ok(range)
            } else {
                Err(SelectionError::DegenerateGeometry(format!("candidate scores have no spread on axis {axis}")))
            }
        })
        .collect()
}

/// A weighted max reduction which ranks how strongly `point` aligns with the given axis:
/// the point minimizing it is the extreme point of that axis.
fn achievement_scalar(point: &[Float], axis: usize, penalty: Float) -> Float {
    point
        .iter()
        .enumerate()
        .map(|(index, value)| if index == axis { *value } else { value * penalty })
        .fold(Float::NEG_INFINITY, Float::max)
}
