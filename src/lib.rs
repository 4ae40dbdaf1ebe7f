//! Euclidean minimum spanning trees and exact traveling salesperson tours over points in the plane.
//!
//! The algorithms in [graph] are pure functions of a point slice. Everything else
//! (point generation, timing, reports, and SVG rendering) exists to drive and present them.

pub mod color;
pub mod error;
pub mod graph;
pub mod math;
pub mod point;
pub mod points;
pub mod render;
pub mod report;

pub use error::{Error, InvalidInputError};
pub use graph::{
    mst::{build_mst, build_mst_with_heap, tree_weight},
    tsp::{cycle_weight, permutations, solve_tsp, verify_cycle},
};
pub use point::{Edge, Point};
