//! Near-coincident point removal
//!
//! Points closer than the tolerance collapse onto the first one seen, so
//! the surviving order follows the input order. Large clouds go through a
//! hash grid with cells as wide as the tolerance: any point within reach
//! lies in the 3×3 block of cells around the query, which is the same as
//! probing the coordinates shifted by ±tolerance on each axis.

use std::collections::HashMap;

use crate::constants::BRUTE_FORCE_DEDUP_LIMIT;
use crate::geometry::{Point2D, squared_distance};

/// Remove points closer than `tolerance` to an earlier surviving point.
pub fn dedupe(cloud: &[Point2D], tolerance: f64) -> Vec<Point2D> {
    if cloud.len() <= BRUTE_FORCE_DEDUP_LIMIT {
        return dedupe_pairwise(cloud, tolerance);
    }

    match CellGrid::new(tolerance) {
        Some(grid) => grid.dedupe(cloud).unwrap_or_else(|| dedupe_pairwise(cloud, tolerance)),
        None => dedupe_pairwise(cloud, tolerance),
    }
}

fn dedupe_pairwise(cloud: &[Point2D], tolerance: f64) -> Vec<Point2D> {
    let limit = tolerance * tolerance;
    let mut kept: Vec<Point2D> = Vec::with_capacity(cloud.len());
    for &point in cloud {
        if kept.iter().all(|&other| squared_distance(point, other) >= limit) {
            kept.push(point);
        }
    }
    kept
}

/// Uniform grid mapping integer cell coordinates to kept points
struct CellGrid {
    inv_cell_size: f64,
    limit: f64,
    cells: HashMap<(i64, i64), Vec<Point2D>>,
}

impl CellGrid {
    fn new(cell_size: f64) -> Option<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return None;
        }
        Some(Self {
            inv_cell_size: 1.0 / cell_size,
            limit: cell_size * cell_size,
            cells: HashMap::new(),
        })
    }

    /// Returns `None` when a coordinate cannot be keyed without overflow
    fn dedupe(mut self, cloud: &[Point2D]) -> Option<Vec<Point2D>> {
        let mut kept = Vec::with_capacity(cloud.len());
        for &point in cloud {
            let (cx, cy) = self.cell_of(point)?;
            if !self.has_neighbor(point, cx, cy) {
                self.cells.entry((cx, cy)).or_default().push(point);
                kept.push(point);
            }
        }
        Some(kept)
    }

    fn cell_of(&self, point: Point2D) -> Option<(i64, i64)> {
        // Keep one cell of headroom so neighbour offsets cannot overflow
        let bound = (i64::MAX / 2) as f64;
        let x = (point.x * self.inv_cell_size).floor();
        let y = (point.y * self.inv_cell_size).floor();
        if !x.is_finite() || !y.is_finite() || x.abs() >= bound || y.abs() >= bound {
            return None;
        }
        Some((x as i64, y as i64))
    }

    fn has_neighbor(&self, point: Point2D, cx: i64, cy: i64) -> bool {
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy))
                    && bucket
                        .iter()
                        .any(|&other| squared_distance(point, other) < self.limit)
                {
                    return true;
                }
            }
        }
        false
    }
}
