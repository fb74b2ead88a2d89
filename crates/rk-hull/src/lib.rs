//! Concave Hull Construction for Planar Point Clouds
//!
//! This crate provides:
//! - Adaptive k-nearest-neighbour concave hull builder with backtracking
//! - Tolerance-based point cloud deduplication
//! - Point-in-polygon and segment intersection primitives
//! - Conversion of hulls into closed boundary wires for the CAD kernel

pub mod builder;
pub mod constants;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod wire;

// Re-exports for convenience
pub use builder::{HullBuilder, build};
pub use dedup::dedupe;
pub use error::{HullError, HullResult, HullWarning};
pub use geometry::{Point2D, point_in_polygon, polygon_covers, segments_intersect};
pub use hull::Hull;
pub use wire::BoundaryWire;
