//! Boundary wire handed to the downstream B-Rep kernel
//!
//! Mirrors the kernel's 2D wire profile: an identified, ordered point loop.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point2D;

/// A 2D wire built from a hull
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryWire {
    /// Unique identifier
    pub id: Uuid,
    /// Points defining the wire (in order)
    pub points: Vec<Point2D>,
    /// Whether the wire is closed
    pub closed: bool,
}

impl BoundaryWire {
    /// Create a new wire from points
    pub fn new(points: Vec<Point2D>, closed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            closed,
        }
    }

    /// Wire for a hull polygon; closed once it has an area to bound
    pub fn from_hull(points: &[Point2D]) -> Self {
        Self::new(points.to_vec(), points.len() >= 3)
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the wire has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point links back to the first
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consecutive point pairs, including the closing segment when closed
    pub fn segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let closing = if self.closed {
            self.points.last().copied().zip(self.points.first().copied())
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Total length of the wire
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}
