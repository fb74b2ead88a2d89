//! Hull result type

use serde::{Deserialize, Serialize};

use crate::error::HullWarning;
use crate::geometry::{Point2D, is_simple, point_in_polygon, polygon_covers};
use crate::wire::BoundaryWire;

/// Ordered boundary polygon produced by the builder, with its build report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// Vertices in traversal order; the polygon closes implicitly
    points: Vec<Point2D>,
    /// Neighbour breadth of the attempt that produced the hull
    k: usize,
    /// Every breadth attempted, in order
    attempted_k: Vec<usize>,
    /// Walk steps taken by the final attempt
    iterations: usize,
    /// Adjustments and give-ups raised along the way
    warnings: Vec<HullWarning>,
}

impl Hull {
    pub(crate) fn new(
        points: Vec<Point2D>,
        k: usize,
        attempted_k: Vec<usize>,
        iterations: usize,
        warnings: Vec<HullWarning>,
    ) -> Self {
        Self {
            points,
            k,
            attempted_k,
            iterations,
            warnings,
        }
    }

    /// Hull vertices in traversal order
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the hull has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Neighbour breadth that produced this hull
    pub fn k(&self) -> usize {
        self.k
    }

    /// Breadths tried, first to last. Strictly increasing.
    pub fn attempted_k(&self) -> &[usize] {
        &self.attempted_k
    }

    /// Number of backtracking restarts
    pub fn retries(&self) -> usize {
        self.attempted_k.len().saturating_sub(1)
    }

    /// Walk steps taken by the final attempt
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Warnings raised while building
    pub fn warnings(&self) -> &[HullWarning] {
        &self.warnings
    }

    /// True unless the builder gave up (k limit or iteration limit)
    pub fn is_complete(&self) -> bool {
        !self.warnings.iter().any(HullWarning::is_give_up)
    }

    /// Boundary-inclusive containment test against the hull polygon
    pub fn contains(&self, point: Point2D, tolerance: f64) -> bool {
        point_in_polygon(point, &self.points, tolerance)
    }

    /// Check that every point lies inside or on the hull
    pub fn covers(&self, cloud: &[Point2D], tolerance: f64) -> bool {
        polygon_covers(&self.points, cloud, tolerance)
    }

    /// Check that no two non-adjacent edges touch
    pub fn is_simple(&self, tolerance: f64) -> bool {
        is_simple(&self.points, tolerance)
    }

    /// Closed wire for the downstream kernel
    pub fn to_wire(&self) -> BoundaryWire {
        BoundaryWire::from_hull(&self.points)
    }

    /// Take the vertices
    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Hull {
        Hull::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(0.0, 1.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(1.0, 0.0),
            ],
            4,
            vec![4],
            4,
            Vec::new(),
        )
    }

    #[test]
    fn test_accessors() {
        let hull = square();
        assert_eq!(hull.len(), 4);
        assert!(!hull.is_empty());
        assert_eq!(hull.k(), 4);
        assert_eq!(hull.retries(), 0);
        assert!(hull.is_complete());
        assert!(hull.is_simple(1e-7));
        assert!(hull.contains(Point2D::new(0.5, 0.5), 1e-7));
        assert!(hull.covers(&[Point2D::new(1.0, 0.5), Point2D::new(0.1, 0.9)], 1e-7));
    }

    #[test]
    fn test_give_up_warnings_mark_incomplete() {
        let mut hull = square();
        hull.warnings.push(HullWarning::KTooSmall { requested: 1, used: 2 });
        assert!(hull.is_complete());
        hull.warnings.push(HullWarning::ReachedIterationLimit { iterations: 9 });
        assert!(!hull.is_complete());
    }

    #[test]
    fn test_hull_persists_as_json() {
        let mut hull = square();
        hull.warnings.push(HullWarning::KExceedsLimit { requested: 30, limit: 25 });

        let json = serde_json::to_string(&hull).unwrap();
        assert!(json.contains("KExceedsLimit"));
        let restored: Hull = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, hull);
    }
}
