//! Per-attempt mutable view of the cloud

use crate::geometry::Point2D;

/// A cloud point with its walk bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudPoint {
    /// Position in the working plane
    pub position: Point2D,
    /// Whether the point may still be chosen as the next hull vertex
    pub active: bool,
    /// Index into the deduplicated cloud
    pub original_index: usize,
}

/// Fresh copy of the deduplicated cloud, rebuilt for every attempt
#[derive(Debug, Clone)]
pub struct WorkingSet {
    points: Vec<CloudPoint>,
    active_count: usize,
}

impl WorkingSet {
    /// Create a working set with every point active
    pub fn from_cloud(cloud: &[Point2D]) -> Self {
        let points = cloud
            .iter()
            .enumerate()
            .map(|(original_index, &position)| CloudPoint {
                position,
                active: true,
                original_index,
            })
            .collect::<Vec<_>>();
        Self {
            active_count: points.len(),
            points,
        }
    }

    /// Number of points, active or not
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the set holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points still eligible
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Check if any point is still eligible
    pub fn has_active(&self) -> bool {
        self.active_count > 0
    }

    /// Position of a point by index
    pub fn position(&self, index: usize) -> Point2D {
        self.points[index].position
    }

    /// Check if a point is eligible
    pub fn is_active(&self, index: usize) -> bool {
        self.points[index].active
    }

    /// Make a point eligible again
    pub fn activate(&mut self, index: usize) {
        let point = &mut self.points[index];
        if !point.active {
            point.active = true;
            self.active_count += 1;
        }
    }

    /// Consume a point
    pub fn deactivate(&mut self, index: usize) {
        let point = &mut self.points[index];
        if point.active {
            point.active = false;
            self.active_count -= 1;
        }
    }

    /// Iterate over the eligible points
    pub fn active_points(&self) -> impl Iterator<Item = &CloudPoint> {
        self.points.iter().filter(|p| p.active)
    }
}

/// Index of the point with minimal Y; ties go to the first occurrence
pub fn seed_index(cloud: &[Point2D]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in cloud.iter().enumerate() {
        match best {
            Some((_, y)) if point.y >= y => {}
            _ => best = Some((index, point.y)),
        }
    }
    best.map(|(index, _)| index)
}
