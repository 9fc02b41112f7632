use num_traits::{Float, Num, Signed};

/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
{
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
/// sqrt((x1-x2)^2 + (y1-y2)^2) with true squared differences.
/// Admissible as an A* heuristic whenever edge weights are at least the
/// straight-line distance between their endpoints.
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}

/// 2D Point
/// Node coordinates are owned by the caller and only consumed by heuristics;
/// the graph itself never stores them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}
