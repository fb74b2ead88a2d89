//! Concave hull builder
//!
//! Adaptive k-nearest-neighbour boundary walk: starting from the lowest
//! point, repeatedly step to the one of the `k` nearest remaining points
//! that turns furthest towards the outside without crossing the hull built
//! so far. When every candidate crosses, or the closed hull leaves points
//! outside, the whole walk is thrown away and restarted with `k + 1`.

mod neighbors;
mod walker;
mod working_set;

pub use neighbors::Candidate;
pub use working_set::{CloudPoint, WorkingSet, seed_index};

use crate::constants::{
    ANGULAR_TOLERANCE, COINCIDENCE_TOLERANCE, DEFAULT_K, DEFAULT_MAX_ITERATIONS, K_LIMIT, MIN_K,
};
use crate::dedup::dedupe;
use crate::error::{HullError, HullResult, HullWarning};
use crate::geometry::{Point2D, polygon_covers};
use crate::hull::Hull;
use walker::{WalkOutcome, WalkSettings, walk};

/// Concave hull builder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullBuilder {
    /// Initial neighbour breadth
    k: usize,
    /// Walk steps allowed per attempt
    max_iterations: usize,
    /// Coincidence tolerance for deduplication and geometric tests
    tolerance: f64,
    /// Angles closer than this rank equally
    angular_tolerance: f64,
}

impl Default for HullBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HullBuilder {
    /// Create a builder with default parameters
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: COINCIDENCE_TOLERANCE,
            angular_tolerance: ANGULAR_TOLERANCE,
        }
    }

    /// Set the initial neighbour breadth (clamped to `[2, 25]` at build time)
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the maximum walk steps per attempt
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the coincidence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the angular tolerance used when ranking candidates
    pub fn with_angular_tolerance(mut self, angular_tolerance: f64) -> Self {
        self.angular_tolerance = angular_tolerance;
        self
    }

    /// Initial neighbour breadth as configured
    pub fn k(&self) -> usize {
        self.k
    }

    /// Maximum walk steps per attempt
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Coincidence tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Build the concave hull of `cloud`.
    ///
    /// Returns an error only for invalid input or when a step finds no
    /// candidate at all. Giving up at the `k` limit or the iteration bound
    /// still yields a hull; check [`Hull::warnings`] or
    /// [`Hull::is_complete`] when full coverage matters.
    pub fn build(&self, cloud: &[Point2D]) -> HullResult<Hull> {
        self.validate(cloud)?;

        let mut warnings = Vec::new();
        let mut k = self.clamped_k(&mut warnings);

        let dataset = dedupe(cloud, self.tolerance);
        if dataset.len() <= 3 {
            tracing::debug!(points = dataset.len(), "trivial cloud returned as hull");
            return Ok(Hull::new(dataset, k, vec![k], 0, warnings));
        }

        let settings = WalkSettings {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            angular_tolerance: self.angular_tolerance,
        };

        let mut attempted = Vec::new();
        let mut best_effort = Vec::new();
        let mut iterations = 0;

        while k <= K_LIMIT {
            attempted.push(k);
            let attempt = walk(&dataset, k, &settings);
            tracing::debug!(
                k,
                outcome = ?attempt.outcome,
                vertices = attempt.points.len(),
                iterations = attempt.iterations,
                "hull attempt finished"
            );

            match attempt.outcome {
                WalkOutcome::NoCandidate { step } => {
                    return Err(HullError::NoCandidateFound { step, k });
                }
                WalkOutcome::IterationLimit => {
                    tracing::warn!(
                        k,
                        iterations = attempt.iterations,
                        "hull walk hit the iteration limit, returning partial hull"
                    );
                    warnings.push(HullWarning::ReachedIterationLimit {
                        iterations: attempt.iterations,
                    });
                    return Ok(Hull::new(
                        attempt.points,
                        k,
                        attempted,
                        attempt.iterations,
                        warnings,
                    ));
                }
                WalkOutcome::KExceeded => {
                    best_effort = attempt.points;
                    iterations = attempt.iterations;
                    break;
                }
                WalkOutcome::Intersecting => {
                    tracing::debug!(k, "every candidate crosses the hull, retrying with k + 1");
                }
                WalkOutcome::Closed | WalkOutcome::Covered | WalkOutcome::Exhausted => {
                    if polygon_covers(&attempt.points, &dataset, self.tolerance) {
                        return Ok(Hull::new(
                            attempt.points,
                            k,
                            attempted,
                            attempt.iterations,
                            warnings,
                        ));
                    }
                    tracing::debug!(k, "hull leaves points outside, retrying with k + 1");
                }
            }

            best_effort = attempt.points;
            iterations = attempt.iterations;
            k += 1;
        }

        tracing::warn!(
            limit = K_LIMIT,
            "no valid hull found within the k limit, returning best effort"
        );
        warnings.push(HullWarning::KLimitReached { limit: K_LIMIT });
        let k = attempted.last().copied().unwrap_or(K_LIMIT);
        Ok(Hull::new(best_effort, k, attempted, iterations, warnings))
    }

    /// Build one hull per cloud. Builds are independent; with the
    /// `parallel` feature they run on the rayon thread pool.
    pub fn build_batch(&self, clouds: &[Vec<Point2D>]) -> Vec<HullResult<Hull>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            clouds.par_iter().map(|cloud| self.build(cloud)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            clouds.iter().map(|cloud| self.build(cloud)).collect()
        }
    }

    fn validate(&self, cloud: &[Point2D]) -> HullResult<()> {
        if cloud.is_empty() {
            return Err(HullError::EmptyCloud);
        }
        if let Some(index) = cloud.iter().position(|p| !p.is_finite()) {
            return Err(HullError::NonFiniteCoordinate { index });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(HullError::InvalidTolerance(self.tolerance));
        }
        if !self.angular_tolerance.is_finite() || self.angular_tolerance < 0.0 {
            return Err(HullError::InvalidTolerance(self.angular_tolerance));
        }
        Ok(())
    }

    fn clamped_k(&self, warnings: &mut Vec<HullWarning>) -> usize {
        if self.k < MIN_K {
            tracing::warn!(requested = self.k, used = MIN_K, "k too small, raising it");
            warnings.push(HullWarning::KTooSmall {
                requested: self.k,
                used: MIN_K,
            });
            MIN_K
        } else if self.k > K_LIMIT {
            tracing::warn!(requested = self.k, limit = K_LIMIT, "k exceeds the limit, lowering it");
            warnings.push(HullWarning::KExceedsLimit {
                requested: self.k,
                limit: K_LIMIT,
            });
            K_LIMIT
        } else {
            self.k
        }
    }
}

/// Build the concave hull of `cloud` with default tolerances.
///
/// # Example
///
/// ```
/// use rk_hull::{Point2D, build};
///
/// let cloud = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(0.0, 1.0),
///     Point2D::new(0.5, 0.5),
/// ];
/// let hull = build(&cloud, 4, 1000).unwrap();
/// assert_eq!(hull.len(), 4);
/// assert!(hull.is_complete());
/// ```
pub fn build(cloud: &[Point2D], k_init: usize, max_iterations: usize) -> HullResult<Hull> {
    HullBuilder::new()
        .with_k(k_init)
        .with_max_iterations(max_iterations)
        .build(cloud)
}
