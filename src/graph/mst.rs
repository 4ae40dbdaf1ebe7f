use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::{debug, trace};

use crate::{
    error::InvalidInputError,
    math::kbn_sum,
    point::{Edge, Point},
};

/// Compute the MST by repeatedly picking the shortest bridge between the spanned and unspanned points.
///
/// Every step scans all ordered pairs `(v, w)`, `v` in the outer loop and `w` in the inner loop, so this runs in O(n^3).
/// Ties are broken in favor of the first bridge found in that order and the edge keeps the scan orientation
/// `(points[v], points[w])`.
///
/// A single point spans itself, so the tree is empty.
pub fn build_mst(points: &[Point]) -> Result<Vec<Edge>, InvalidInputError> {
    if points.is_empty() {
        return Err(InvalidInputError::EmptyPointSet);
    }
    let n = points.len();

    let mut spanned = vec![false; n];
    // Kickstart MST with 1 vertex
    spanned[0] = true;

    let mut mst = Vec::with_capacity(n - 1);
    while mst.len() < n - 1 {
        let mut bridge: Option<(usize, usize, f64)> = None;
        for v in 0..n {
            for w in 0..n {
                if spanned[v] == spanned[w] {
                    continue;
                }
                let distance = points[v].distance(&points[w]);
                if bridge.map_or(true, |(.., shortest)| distance < shortest) {
                    bridge = Some((v, w, distance));
                }
            }
        }

        // Each step spans exactly one new point, so a bridge exists until the tree is done
        let Some((v, w, distance)) = bridge else {
            break;
        };
        trace!(v, w, distance, "bridge");
        spanned[v] = true;
        spanned[w] = true;
        mst.push(Edge(points[v], points[w]));
    }

    debug!(n, edges = mst.len(), "built minimum spanning tree");
    Ok(mst)
}

#[derive(Debug, Clone, Copy)]
struct PriorityQueueEdge {
    from: usize,
    to: usize,
    distance: f64,
}

impl PartialEq for PriorityQueueEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityQueueEdge {}

impl PartialOrd for PriorityQueueEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityQueueEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

/// Compute the MST with Prim's algorithm in O(n^2 log(n)) time, treating the points as a complete graph.
///
/// Produces a tree of the same weight as [build_mst], though edge order and tie-breaking can differ.
///
/// <https://en.wikipedia.org/wiki/Prim%27s_algorithm>
pub fn build_mst_with_heap(points: &[Point]) -> Result<Vec<Edge>, InvalidInputError> {
    if points.is_empty() {
        return Err(InvalidInputError::EmptyPointSet);
    }
    let n = points.len();

    let mut in_mst = vec![false; n];
    let mut edge_priority_queue = BinaryHeap::with_capacity(n);

    // Kickstart MST with 1 vertex
    in_mst[0] = true;
    push_outgoing_edges(points, 0, &in_mst, &mut edge_priority_queue);

    let mut mst = Vec::with_capacity(n - 1);
    while let Some(Reverse(shortest_edge)) = edge_priority_queue.pop() {
        // Claim: we know the "from" of the shortest edge will always be
        // in the MST, because all edges in the priority queue point
        // outwards from the tree built so far.
        if in_mst[shortest_edge.to] {
            // Edge would not add a new point to the MST
            continue;
        }
        in_mst[shortest_edge.to] = true;
        mst.push(Edge(points[shortest_edge.from], points[shortest_edge.to]));
        if mst.len() == n - 1 {
            // Early stopping condition, MST already has all the edges
            break;
        }
        push_outgoing_edges(points, shortest_edge.to, &in_mst, &mut edge_priority_queue);
    }

    debug!(n, edges = mst.len(), "built minimum spanning tree with heap");
    Ok(mst)
}

fn push_outgoing_edges(
    points: &[Point],
    from: usize,
    in_mst: &[bool],
    edge_priority_queue: &mut BinaryHeap<Reverse<PriorityQueueEdge>>,
) {
    for (to, point) in points.iter().enumerate() {
        if in_mst[to] {
            continue;
        }
        edge_priority_queue.push(Reverse(PriorityQueueEdge {
            from,
            to,
            distance: points[from].distance(point),
        }));
    }
}

/// Total length of a set of edges.
pub fn tree_weight(edges: &[Edge]) -> f64 {
    kbn_sum(edges.iter().map(Edge::weight))
}
