//! One construction attempt for a fixed neighbour breadth

use std::f64::consts::PI;

use super::neighbors::{Candidate, nearest, rank_by_angle};
use super::working_set::{WorkingSet, seed_index};
use crate::constants::K_LIMIT;
use crate::geometry::{
    Point2D, direction_angle, polygon_covers, segments_intersect, squared_distance,
};

/// Back direction assumed at the seed: the walk behaves as if it arrived
/// along the positive X axis, i.e. from a point on the -X side. The
/// lowest point then heads right first and the walk runs counter-clockwise.
const SEED_BACK_ANGLE: f64 = PI;

/// Step at which the seed becomes a candidate again
const SEED_REACTIVATION_STEP: usize = 5;

/// Knobs shared by every attempt of one build
#[derive(Debug, Clone, Copy)]
pub(crate) struct WalkSettings {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub angular_tolerance: f64,
}

/// How an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkOutcome {
    /// The walk came back to the seed
    Closed,
    /// The open hull already enclosed the whole cloud
    Covered,
    /// No eligible points were left
    Exhausted,
    /// The iteration bound cut the walk short
    IterationLimit,
    /// Every ranked candidate crossed the hull, or the closing edge would
    Intersecting,
    /// The neighbour breadth went past the limit
    KExceeded,
    /// The neighbour query came back empty
    NoCandidate { step: usize },
}

/// Result of [`walk`]
#[derive(Debug, Clone)]
pub(crate) struct Attempt {
    pub outcome: WalkOutcome,
    pub points: Vec<Point2D>,
    pub iterations: usize,
}

/// State of a walk in progress
struct Walk<'a> {
    cloud: &'a [Point2D],
    working_set: WorkingSet,
    /// Hull vertices as indices into `cloud`
    hull: Vec<usize>,
    /// Hull vertices as positions, kept in step with `hull`
    points: Vec<Point2D>,
    seed: usize,
    current: usize,
    step: usize,
    iterations: usize,
}

impl<'a> Walk<'a> {
    fn start(cloud: &'a [Point2D], seed: usize) -> Self {
        let mut working_set = WorkingSet::from_cloud(cloud);
        working_set.deactivate(seed);
        Self {
            cloud,
            working_set,
            hull: vec![seed],
            points: vec![cloud[seed]],
            seed,
            current: seed,
            step: 2,
            iterations: 0,
        }
    }

    fn finish(self, outcome: WalkOutcome) -> Attempt {
        Attempt {
            outcome,
            points: self.points,
            iterations: self.iterations,
        }
    }

    fn back_angle(&self) -> f64 {
        match self.hull.len() {
            0 | 1 => SEED_BACK_ANGLE,
            n => direction_angle(self.cloud[self.current], self.cloud[self.hull[n - 2]]),
        }
    }

    /// Check whether the edge `current -> candidate` touches any hull edge
    /// it does not share an endpoint with.
    fn crosses_hull(&self, candidate: usize, tolerance: f64) -> bool {
        let from = self.cloud[self.current];
        let to = self.cloud[candidate];
        self.hull.windows(2).any(|edge| {
            let (a, b) = (edge[0], edge[1]);
            let adjacent = a == self.current || b == self.current || a == candidate || b == candidate;
            !adjacent && segments_intersect(from, to, self.cloud[a], self.cloud[b], tolerance)
        })
    }

    /// Check whether the implied edge back to the seed crosses the hull
    fn closing_crosses(&self, tolerance: f64) -> bool {
        self.crosses_hull(self.seed, tolerance)
    }

    fn accept(&mut self, candidate: usize) {
        self.hull.push(candidate);
        self.points.push(self.cloud[candidate]);
        self.working_set.deactivate(candidate);
        self.current = candidate;
        self.step += 1;
    }
}

/// Walk the boundary once with neighbour breadth `k`.
///
/// The dataset must already be deduplicated. Nothing is shared between
/// calls: every attempt starts from a fresh working set.
pub(crate) fn walk(cloud: &[Point2D], k: usize, settings: &WalkSettings) -> Attempt {
    let Some(seed) = seed_index(cloud) else {
        return Attempt {
            outcome: WalkOutcome::NoCandidate { step: 1 },
            points: Vec::new(),
            iterations: 0,
        };
    };

    let mut walk = Walk::start(cloud, seed);
    let closure_distance = settings.tolerance * settings.tolerance;
    let seed_position = cloud[seed];

    while (walk.step == 2 || squared_distance(cloud[walk.current], seed_position) > closure_distance)
        && walk.working_set.has_active()
    {
        walk.iterations += 1;
        if walk.iterations >= settings.max_iterations {
            return walk.finish(WalkOutcome::IterationLimit);
        }

        // Enclosure only counts once the polygon can close without crossing itself
        if polygon_covers(&walk.points, cloud, settings.tolerance)
            && !walk.closing_crosses(settings.tolerance)
        {
            return walk.finish(WalkOutcome::Covered);
        }

        if walk.step == SEED_REACTIVATION_STEP {
            walk.working_set.activate(seed);
        }

        let breadth = k.min(walk.working_set.active_count());
        if breadth > K_LIMIT {
            return walk.finish(WalkOutcome::KExceeded);
        }

        let current = cloud[walk.current];
        let candidates = nearest(&walk.working_set, current, breadth);
        if candidates.is_empty() {
            let step = walk.step;
            return walk.finish(WalkOutcome::NoCandidate { step });
        }

        let ranked = rank_by_angle(
            &candidates,
            &walk.working_set,
            current,
            walk.back_angle(),
            settings.angular_tolerance,
        );

        let accepted: Option<Candidate> = ranked
            .into_iter()
            .find(|c| !walk.crosses_hull(c.index, settings.tolerance));

        match accepted {
            None => {
                tracing::trace!(step = walk.step, k, "all candidates cross the hull");
                return walk.finish(WalkOutcome::Intersecting);
            }
            Some(c) if c.index == seed => {
                tracing::trace!(step = walk.step, "walk closed on the seed");
                return walk.finish(WalkOutcome::Closed);
            }
            Some(c) => {
                tracing::trace!(step = walk.step, index = c.index, angle = c.angle, "accepted vertex");
                walk.accept(c.index);
            }
        }
    }

    if walk.closing_crosses(settings.tolerance) {
        tracing::trace!(step = walk.step, k, "closing edge crosses the hull");
        return walk.finish(WalkOutcome::Intersecting);
    }
    walk.finish(WalkOutcome::Exhausted)
}
