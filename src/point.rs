use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bitwise equality, so that NaN coordinates still match themselves.
    pub(crate) fn is_identical(&self, other: &Point) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// An undirected edge between two points.
///
/// Edges are compared without regard to orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge(pub Point, pub Point);

impl Edge {
    pub fn weight(&self) -> f64 {
        self.0.distance(&self.1)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl From<[[f64; 2]; 2]> for Edge {
    fn from([from, to]: [[f64; 2]; 2]) -> Self {
        Self(from.into(), to.into())
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Point};

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point::new(0., 0.);
        let b = Point::new(3., 4.);
        assert_eq!(a.distance(&b), 5.);
        assert_eq!(b.distance(&a), 5.);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(0.25, 0.75);
        assert_eq!(p.distance(&p), 0.);
    }

    #[test]
    fn test_edge_equality_ignores_orientation() {
        let edge = Edge::from([[0., 0.], [1., 0.]]);
        assert_eq!(edge, Edge::from([[1., 0.], [0., 0.]]));
        assert_ne!(edge, Edge::from([[0., 0.], [0., 1.]]));
        assert_eq!(edge.weight(), 1.);
    }

    #[test]
    fn test_nan_points_are_identical_to_themselves() {
        let p = Point::new(f64::NAN, 1.);
        assert_ne!(p, p);
        assert!(p.is_identical(&p));
    }
}
