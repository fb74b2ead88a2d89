//! Neighbour search and angular ranking

use std::cmp::Ordering;

use super::working_set::WorkingSet;
use crate::geometry::{Point2D, direction_angle, squared_distance, turning_angle};

/// Auxiliary record for a candidate next vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index into the deduplicated cloud
    pub index: usize,
    /// Squared distance from the current vertex
    pub distance_sq: f64,
    /// Turning angle from the previous edge, filled in by [`rank_by_angle`]
    pub angle: f64,
}

/// The `k` active points closest to `current`, nearest first.
///
/// Equal distances are ordered by index so the result never depends on
/// iteration order.
pub fn nearest(working_set: &WorkingSet, current: Point2D, k: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = working_set
        .active_points()
        .map(|p| Candidate {
            index: p.original_index,
            distance_sq: squared_distance(current, p.position),
            angle: 0.0,
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.distance_sq
            .total_cmp(&b.distance_sq)
            .then(a.index.cmp(&b.index))
    });
    candidates.truncate(k);
    candidates
}

/// Compare two angles, treating values within `tolerance` as equal
#[inline]
fn compare_angles(a: f64, b: f64, tolerance: f64) -> Ordering {
    if (a - b).abs() < tolerance {
        Ordering::Equal
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Order candidates by turning angle, largest first.
///
/// `back_angle` is the direction from the current vertex back to the
/// previous one. Candidates whose angles compare equal keep their incoming
/// (nearest-first) order. Tolerance-based equality is not transitive, so
/// this uses an insertion ranking instead of a library sort: each candidate
/// goes in front of the first ranked entry it strictly beats.
pub fn rank_by_angle(
    candidates: &[Candidate],
    working_set: &WorkingSet,
    current: Point2D,
    back_angle: f64,
    tolerance: f64,
) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let angle = turning_angle(
            back_angle,
            direction_angle(current, working_set.position(candidate.index)),
        );
        let candidate = Candidate { angle, ..*candidate };

        let slot = ranked
            .iter()
            .position(|other| compare_angles(angle, other.angle, tolerance) == Ordering::Greater)
            .unwrap_or(ranked.len());
        ranked.insert(slot, candidate);
    }
    ranked
}
