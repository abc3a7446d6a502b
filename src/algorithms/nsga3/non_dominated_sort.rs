//! Implementation of the [Fast Non-Dominated Sort Algorithm][1] used by the NSGA family.
//! Time complexity is `O(M * N^2)`, where `M` is the number of objectives and `N` the
//! number of solutions; auxiliary space is `O(N^2)` in the worst case.
//!
//! [1]: https://www.iitk.ac.in/kangal/Deb_NSGA-II.pdf "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II)"

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::{DominancePolicy, ObjectiveVector, get_uniform_dimension};
use crate::utils::SelectionResult;
use std::cmp::Ordering;

type SolutionIdx = usize;

/// An ordered set of mutually non-dominated solutions sharing one peeling depth.
#[derive(Clone, Debug)]
pub struct Front {
    rank: usize,
    members: Vec<SolutionIdx>,
}

impl Front {
    /// Returns the 1-based rank shared by all members; rank 1 is the nondominated front.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Indices of the member solutions, in the order they entered the front.
    pub fn members(&self) -> &[SolutionIdx] {
        &self.members
    }

    /// Returns the number of solutions in the front.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Checks whether the front has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partitions `population` into ranked Pareto fronts: every solution lands in exactly one
/// front, and a solution joins front `k + 1` once all solutions dominating it are peeled
/// away with fronts `0..=k`.
///
/// Fronts are indexed by the caller's population order, so the population itself stays
/// untouched; all transient sort state lives in arrays scoped to this call and is
/// discarded afterwards. Member order inside a front follows first-reached order, which
/// makes the result deterministic for a fixed population order.
pub fn sort_fronts(population: &[ObjectiveVector], policy: DominancePolicy) -> SelectionResult<Vec<Front>> {
    get_uniform_dimension(population, "population")?;

    // the indices of the solutions dominated by this solution
    let mut dominated_solutions: Vec<Vec<SolutionIdx>> = population.iter().map(|_| Vec::new()).collect();

    // for each solution, the number of solutions it is dominated by
    let mut domination_count: Vec<usize> = vec![0; population.len()];

    let mut current_front: Vec<SolutionIdx> = Vec::new();

    // classification pass over ordered pairs: each row only updates its own state, which
    // keeps the weak policy's order-dependent handling of duplicates consistent
    for (p_idx, p) in population.iter().enumerate() {
        for (q_idx, q) in population.iter().enumerate() {
            if p_idx == q_idx {
                continue;
            }

            match policy.dominance_order(p, q) {
                Ordering::Less => dominated_solutions[p_idx].push(q_idx),
                Ordering::Greater => domination_count[p_idx] += 1,
                Ordering::Equal => {}
            }
        }

        if domination_count[p_idx] == 0 {
            current_front.push(p_idx);
        }
    }

    let mut fronts = Vec::new();
    let mut rank = 1;

    while !current_front.is_empty() {
        let mut next_front = Vec::new();

        for &p_idx in current_front.iter() {
            for &q_idx in dominated_solutions[p_idx].iter() {
                // the weak policy reports exactly equal vectors as dominating each other,
                // both are ranked together already with a zero count
                if domination_count[q_idx] == 0 {
                    continue;
                }

                domination_count[q_idx] -= 1;
                if domination_count[q_idx] == 0 {
                    next_front.push(q_idx);
                }
            }
        }

        fronts.push(Front { rank, members: current_front });
        current_front = next_front;
        rank += 1;
    }

    Ok(fronts)
}
