//! Hull construction errors and warnings
//!
//! Hard failures are returned as [`HullError`]. Conditions the builder can
//! correct or work around are reported as [`HullWarning`]s on the returned
//! hull instead, so callers that need strict guarantees must inspect them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for hull construction
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(missing_docs)]
pub enum HullError {
    #[error("Point cloud is empty")]
    EmptyCloud,

    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),

    #[error("No neighbour candidate found at step {step} (k = {k})")]
    NoCandidateFound { step: usize, k: usize },
}

/// Result type for hull operations
pub type HullResult<T> = Result<T, HullError>;

/// Non-fatal condition raised while building a hull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullWarning {
    /// Requested `k` was below the minimum and has been raised
    KTooSmall {
        /// Value supplied by the caller
        requested: usize,
        /// Value actually used
        used: usize,
    },

    /// Requested `k` was above the limit and has been lowered to it
    KExceedsLimit {
        /// Value supplied by the caller
        requested: usize,
        /// The limit in force
        limit: usize,
    },

    /// Every attempt up to the `k` limit failed; the hull is the last
    /// attempt's best effort and may be incomplete or not enclosing
    KLimitReached {
        /// The limit in force
        limit: usize,
    },

    /// The walk was cut off by the iteration bound; the hull is partial
    ReachedIterationLimit {
        /// Iterations performed by the last attempt
        iterations: usize,
    },
}

impl HullWarning {
    /// Whether this warning means the hull may not enclose the cloud
    pub fn is_give_up(&self) -> bool {
        match self {
            HullWarning::KTooSmall { .. } | HullWarning::KExceedsLimit { .. } => false,
            HullWarning::KLimitReached { .. } | HullWarning::ReachedIterationLimit { .. } => true,
        }
    }
}

impl std::fmt::Display for HullWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HullWarning::KTooSmall { requested, used } => {
                write!(f, "k = {requested} is too small, using {used}")
            }
            HullWarning::KExceedsLimit { requested, limit } => {
                write!(f, "k = {requested} exceeds the limit of {limit}")
            }
            HullWarning::KLimitReached { limit } => {
                write!(f, "no valid hull found with k up to {limit}")
            }
            HullWarning::ReachedIterationLimit { iterations } => {
                write!(f, "iteration limit reached after {iterations} steps")
            }
        }
    }
}
