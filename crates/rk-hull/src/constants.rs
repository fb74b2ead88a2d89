//! Global constants for rk-hull

/// Hard ceiling for the neighbour breadth `k`; retries stop once it is exceeded
pub const K_LIMIT: usize = 25;

/// Smallest neighbour breadth that can still form a boundary walk
pub const MIN_K: usize = 2;

/// Default initial neighbour breadth
pub const DEFAULT_K: usize = 4;

/// Default bound on the number of walk steps per construction attempt
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Distance below which two points are considered coincident (model units)
pub const COINCIDENCE_TOLERANCE: f64 = 1e-7;

/// Angle difference (radians) below which two candidates rank equally
pub const ANGULAR_TOLERANCE: f64 = 1e-12;

/// Clouds up to this size are deduplicated with a plain pairwise scan
pub const BRUTE_FORCE_DEDUP_LIMIT: usize = 32;
