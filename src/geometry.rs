use std::fmt;

use num_traits::{Float, Num, Signed};


/// Manhattan distance in 3D
pub fn manhattan_distance<T>(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs() + (z1 - z2).abs()
}

/// Euclidean distance in 3D
pub fn euclidean<T>(x1: T, y1: T, z1: T, x2: T, y2: T, z2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)).sqrt()
}


/// 3D Point
/// Equality is by coordinates only, graph identity is carried by `NodeId`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance to another point
    pub fn manhattan(&self, other: &Point3) -> f64 {
        manhattan_distance(self.x, self.y, self.z, other.x, other.y, other.z)
    }

    /// Straight line distance to another point
    pub fn euclidean(&self, other: &Point3) -> f64 {
        euclidean(self.x, self.y, self.z, other.x, other.y, other.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}


/// Estimated remaining cost between two points, used to guide A*
///
/// This is the Manhattan distance. It can exceed the straight line distance
/// between the points, so it is not admissible when edge costs are Euclidean
/// and A* guided by it may return a suboptimal path.
pub fn heuristic(a: &Point3, b: &Point3) -> f64 {
    a.manhattan(b)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(1, 2, 3, 4, 0, 3), 5);
        assert_eq!(manhattan_distance(-1.0, 0.0, 0.5, 1.0, 0.0, -0.5), 3.0);
    }

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 0.0, 2.0, 3.0, 6.0), 7.0);
    }

    #[test]
    fn test_heuristic_is_manhattan() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_eq!(heuristic(&a, &b), 5.0);
        assert_eq!(heuristic(&b, &a), 5.0);
        assert_eq!(heuristic(&a, &a), 0.0);

        // overestimates the straight line distance off-axis
        assert!(heuristic(&a, &b) > a.euclidean(&b));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point3::new(1.0, 2.5, 0.125).to_string(), "(1,2.5,0.125)");
    }
}
