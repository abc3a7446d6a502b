//! This module contains a logic for the environmental selection step of multi objective
//! optimization based on `Non Dominated Sorting Genetic Algorithm III` algorithm.
//!
//! NSGA-III keeps a population spread over the Pareto front by combining fast
//! non-dominated sorting with a set of systematically spaced reference directions:
//!
//! - non-dominated sorting partitions the population into ranked fronts
//! - a simplex lattice (Das-Dennis) construction supplies the reference directions
//! - adaptive normalization maps the current front geometry onto the unit simplex
//! - every candidate is associated with its nearest reference line, producing the niche
//!   counts consumed by an external niche preservation step
//!
//! All operations treat objectives under a single minimization convention: smaller values
//! are better on every axis. Objectives where higher is better have to be negated by the
//! caller before entering this module.
//!
//! For more details regarding NSGA-III algorithm details, check the original paper
//! "An Evolutionary Many-Objective Optimization Algorithm Using Reference-Point-Based
//! Nondominated Sorting Approach, Part I", Kalyanmoy Deb and Himanshu Jain.
//! DOI: `10.1109/TEVC.2013.2281535`
//!

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/nsga3_test.rs"]
mod nsga3_test;

mod association;
pub use self::association::*;

mod dominance;
pub use self::dominance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;

mod normalization;
pub use self::normalization::*;

mod reference_points;
pub use self::reference_points::*;

use crate::utils::{Float, SelectionError, SelectionResult};

/// An ordered, fixed length sequence of objective values describing one solution.
pub type ObjectiveVector = Vec<Float>;

/// A direction on the standard simplex used to keep the selection spread over the front.
pub type ReferencePoint = Vec<Float>;

/// Returns the dimension shared by all vectors in the collection, or the validation error
/// explaining which contract is broken.
pub(crate) fn get_uniform_dimension(vectors: &[ObjectiveVector], subject: &str) -> SelectionResult<usize> {
    let first = vectors
        .first()
        .ok_or_else(|| SelectionError::InvalidParameter(format!("{subject} must not be empty")))?;

    let dimension = first.len();
    if dimension == 0 {
        return Err(SelectionError::InvalidParameter(format!("{subject} contain empty objective vectors")));
    }

    if let Some(position) = vectors.iter().position(|vector| vector.len() != dimension) {
        return Err(SelectionError::DimensionMismatch(format!(
            "{subject} disagree on dimension: expected {dimension}, got {} at index {position}",
            vectors[position].len()
        )));
    }

    Ok(dimension)
}
