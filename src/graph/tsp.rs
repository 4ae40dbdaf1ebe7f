use std::ops::Range;

use itertools::Itertools;
use tracing::debug;

use crate::{error::InvalidInputError, math::kbn_sum, point::Point};

/// Lazily enumerates every ordering of `0..n` in lexicographic order, holding only O(n) state.
///
/// Clone the iterator before advancing it to walk the same sequence again.
pub fn permutations(n: usize) -> itertools::Permutations<Range<usize>> {
    (0..n).permutations(n)
}

/// Find the shortest closed tour through all points by trying every ordering, in O(n * n!) time.
///
/// The returned cycle has `n + 1` points: each input point once, then the first point again to close the loop.
/// Permutations are visited in lexicographic order of input indices and the first one of minimal weight wins.
///
/// Anything much larger than 10 points is infeasible.
pub fn solve_tsp(points: &[Point]) -> Result<Vec<Point>, InvalidInputError> {
    if points.is_empty() {
        return Err(InvalidInputError::EmptyPointSet);
    }

    let mut best: Option<(Vec<Point>, f64)> = None;
    let mut cycle = Vec::with_capacity(points.len() + 1);
    for permutation in permutations(points.len()) {
        cycle.clear();
        cycle.extend(permutation.iter().map(|i| points[*i]));
        cycle.push(points[permutation[0]]);

        let weight = cycle_weight(&cycle);
        if best
            .as_ref()
            .map_or(true, |(_, best_weight)| weight < *best_weight)
        {
            best = Some((cycle.clone(), weight));
        }
    }

    best.map(|(cycle, weight)| {
        debug_assert!(verify_cycle(points, &cycle));
        debug!(n = points.len(), weight, "solved traveling salesperson");
        cycle
    })
    .ok_or(InvalidInputError::EmptyPointSet)
}

/// Total length of a path, including the closing edge if the last point repeats the first.
pub fn cycle_weight(cycle: &[Point]) -> f64 {
    kbn_sum(
        cycle
            .iter()
            .tuple_windows()
            .map(|(from, to)| from.distance(to)),
    )
}

/// Check that `cycle` is a closed Hamiltonian cycle over exactly the given points.
///
/// Duplicate input points must appear as many times as they occur in the input.
pub fn verify_cycle(points: &[Point], cycle: &[Point]) -> bool {
    if points.is_empty() || cycle.len() != points.len() + 1 {
        return false;
    }
    if !cycle[0].is_identical(&cycle[points.len()]) {
        return false;
    }

    let mut used = vec![false; points.len()];
    cycle[..points.len()].iter().all(|visited| {
        match points
            .iter()
            .enumerate()
            .position(|(i, point)| !used[i] && point.is_identical(visited))
        {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}
