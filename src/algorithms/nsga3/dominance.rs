#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/dominance_test.rs"]
mod dominance_test;

use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Controls how coordinate equality is treated by the Pareto dominance predicate.
///
/// `Ordering::Less` returned by [`DominancePolicy::dominance_order`] means "the left
/// solution dominates the right one" under the minimization convention.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DominancePolicy {
    /// Textbook dominance: the dominating solution is no worse on every objective and
    /// strictly better on at least one. Two equal vectors are incomparable.
    #[default]
    Strict,
    /// Weak dominance: the dominating solution is no worse on every objective. Two equal
    /// vectors are reported as dominated by the left argument, so the classification of
    /// duplicates depends on the argument order.
    Weak,
}

impl DominancePolicy {
    /// Returns the dominance relation between two objective vectors of the same length.
    pub fn dominance_order(&self, a: &[Float], b: &[Float]) -> Ordering {
        debug_assert_eq!(a.len(), b.len());

        match self {
            DominancePolicy::Strict => strict_dominance_order(a, b),
            DominancePolicy::Weak => weak_dominance_order(a, b),
        }
    }
}

fn strict_dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (left, right) in a.iter().zip(b.iter()) {
        match compare_floats(*left, *right) {
            Ordering::Less => less_cnt += 1,
            Ordering::Greater => greater_cnt += 1,
            Ordering::Equal => {}
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn weak_dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    if a.iter().zip(b.iter()).all(|(left, right)| left <= right) {
        Ordering::Less
    } else if b.iter().zip(a.iter()).all(|(left, right)| left <= right) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
