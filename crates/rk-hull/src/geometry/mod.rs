//! Planar geometry helpers
//!
//! Points are `glam::DVec2`. Nothing here compares coordinates exactly:
//! coincidence is always decided against a caller-supplied tolerance.

mod polygon;

pub use polygon::{is_simple, point_in_polygon, polygon_covers, segments_intersect, signed_area};

use std::f64::consts::TAU;

/// A point (or direction) in the working plane
pub type Point2D = glam::DVec2;

/// Squared Euclidean distance between two points
#[inline]
pub fn squared_distance(a: Point2D, b: Point2D) -> f64 {
    a.distance_squared(b)
}

/// Check if two points are closer than `tolerance`
#[inline]
pub fn points_coincide(a: Point2D, b: Point2D, tolerance: f64) -> bool {
    squared_distance(a, b) <= tolerance * tolerance
}

/// Polar angle of the direction `from -> to`, in `(-PI, PI]`
#[inline]
pub fn direction_angle(from: Point2D, to: Point2D) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Clockwise rotation from `back_angle` to `candidate_angle`, in `[0, TAU)`.
///
/// `back_angle` is the direction from the current vertex towards the
/// previous one. A value just below `TAU` means the candidate sits just
/// counter-clockwise of the way we came, which is the sharpest right-hand
/// turn and keeps the rest of the cloud on the left of the walk.
#[inline]
pub fn turning_angle(back_angle: f64, candidate_angle: f64) -> f64 {
    let angle = (back_angle - candidate_angle).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if angle >= TAU { 0.0 } else { angle }
}
