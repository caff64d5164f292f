//! Pairwise dominance checks over sets of objective value vectors, used to validate and prune
//! an enumerated frontier. All checks assume a maximize is better convention: objectives are
//! expected to be sign adjusted by the caller so that a greater value is better uniformly.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dominance_test.rs"]
mod dominance_test;

use crate::utils::{compare_floats, map_reduce, Float};
use std::cmp::Ordering;

/// Calculates a dominance order between two objective value vectors of the same dimension.
///
/// `Ordering::Greater` means that `a` dominates `b`: `a` is at least as good as `b` in every
/// dimension and strictly better in at least one. `Ordering::Equal` covers both identical and
/// mutually incomparable vectors, so a vector never dominates itself or its exact duplicate.
pub fn dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());

    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (x, y) in a.iter().zip(b.iter()) {
        match compare_floats(*x, *y) {
            Ordering::Greater => greater_cnt += 1,
            Ordering::Less => less_cnt += 1,
            Ordering::Equal => {}
        }
    }

    if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Checks that no vector of the set is strictly dominated by another vector of the same set.
///
/// The check is order independent and runs a full pairwise scan in parallel. Exact duplicates
/// do not dominate each other and are tolerated.
pub fn all_non_dominated(vectors: &[Vec<Float>]) -> bool {
    map_reduce(
        vectors,
        |fi| vectors.iter().all(|fj| dominance_order(fj, fi) != Ordering::Greater),
        || true,
        |a, b| a && b,
    )
}

/// Checks that no vector of the sequence is weakly dominated by a vector appearing earlier.
///
/// A vector is weakly dominated if some earlier vector is at least as good in every dimension
/// without being identical. Exact duplicates of earlier vectors are tolerated, and so is a
/// later vector which improves on an earlier one. This makes the check a weaker obligation
/// than [`all_non_dominated`] and suitable for validating an enumeration output where already
/// found points can be rediscovered or improved as the epsilon bounds tighten: whenever this
/// check fails, the strict one fails as well.
pub fn all_weakly_non_dominated(vectors: &[Vec<Float>]) -> bool {
    vectors
        .iter()
        .enumerate()
        .all(|(idx, fi)| vectors[..idx].iter().all(|fj| dominance_order(fj, fi) != Ordering::Greater))
}
