use itertools::Itertools;
use planar_graphs::{
    build_mst, build_mst_with_heap, cycle_weight, solve_tsp, tree_weight, verify_cycle, Edge,
    InvalidInputError, Point,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn point_set(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0..1.0f64, 0.0..1.0f64), 1..=max_len)
        .prop_map(|coordinates| coordinates.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

/// Number of connected components after joining the endpoints of every edge.
fn components(points: &[Point], edges: &[Edge]) -> usize {
    fn find(parent: &mut [usize], x: usize) -> usize {
        if parent[x] != x {
            parent[x] = find(parent, parent[x]);
        }
        parent[x]
    }
    let mut parent = (0..points.len()).collect::<Vec<_>>();
    for Edge(p, q) in edges {
        let a = points.iter().position(|r| r == p).unwrap();
        let b = points.iter().position(|r| r == q).unwrap();
        let (root_a, root_b) = (find(&mut parent, a), find(&mut parent, b));
        parent[root_a] = root_b;
    }
    (0..points.len())
        .filter(|&i| find(&mut parent, i) == i)
        .count()
}

#[test]
fn right_triangle_tree_weighs_two() {
    let points = [Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)];
    let tree = build_mst(&points).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree_weight(&tree), 2.0);
}

#[test]
fn unit_square_tour_is_perimeter() {
    let points = [
        Point::new(0., 0.),
        Point::new(1., 0.),
        Point::new(1., 1.),
        Point::new(0., 1.),
    ];
    assert_eq!(cycle_weight(&solve_tsp(&points).unwrap()), 4.0);
}

#[test]
fn single_point() {
    let points = [Point::new(5., 5.)];
    assert!(build_mst(&points).unwrap().is_empty());
    let cycle = solve_tsp(&points).unwrap();
    assert_eq!(cycle, [Point::new(5., 5.), Point::new(5., 5.)]);
    assert_eq!(cycle_weight(&cycle), 0.);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(build_mst(&[]), Err(InvalidInputError::EmptyPointSet));
    assert_eq!(solve_tsp(&[]), Err(InvalidInputError::EmptyPointSet));
}

#[test]
fn both_algorithms_can_share_points_across_threads() {
    let points = (0..7)
        .map(|i| Point::new(i as f64 / 7., (i * i % 7) as f64 / 7.))
        .collect::<Vec<_>>();
    let (tree, cycle) = rayon::join(|| build_mst(&points), || solve_tsp(&points));
    assert_eq!(tree.unwrap(), build_mst(&points).unwrap());
    assert_eq!(cycle.unwrap(), solve_tsp(&points).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn mst_spans_every_point(points in point_set(12)) {
        let tree = build_mst(&points).unwrap();
        prop_assert_eq!(tree.len(), points.len() - 1);
        // Connected with n - 1 edges, so acyclic
        prop_assert_eq!(components(&points, &tree), 1);
    }

    #[test]
    fn heap_mst_weighs_the_same(points in point_set(12)) {
        let bridge = tree_weight(&build_mst(&points).unwrap());
        let heap = tree_weight(&build_mst_with_heap(&points).unwrap());
        prop_assert!((bridge - heap).abs() < 1e-12);
    }

    #[test]
    fn mst_is_no_heavier_than_any_path(points in point_set(8)) {
        // Every Hamiltonian path is a spanning tree
        let tree = tree_weight(&build_mst(&points).unwrap());
        let path = points
            .iter()
            .tuple_windows()
            .map(|(p, q)| p.distance(q))
            .sum::<f64>();
        prop_assert!(tree <= path + 1e-12);
    }

    #[test]
    fn tsp_visits_every_point_once(points in point_set(6)) {
        let cycle = solve_tsp(&points).unwrap();
        prop_assert_eq!(cycle.len(), points.len() + 1);
        prop_assert_eq!(cycle.first(), cycle.last());
        prop_assert!(verify_cycle(&points, &cycle));
    }

    #[test]
    fn tsp_is_no_heavier_than_input_order(points in point_set(6)) {
        let mut closed = points.clone();
        closed.push(points[0]);
        let tour = cycle_weight(&solve_tsp(&points).unwrap());
        prop_assert!(tour <= cycle_weight(&closed));
    }

    #[test]
    fn tsp_tour_outweighs_tree(points in point_set(6)) {
        // Dropping any edge of a tour leaves a spanning path
        let tree = tree_weight(&build_mst(&points).unwrap());
        let tour = cycle_weight(&solve_tsp(&points).unwrap());
        prop_assert!(tree <= tour + 1e-12);
    }
}
