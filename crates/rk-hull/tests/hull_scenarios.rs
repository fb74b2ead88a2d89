//! End-to-end hull construction scenarios.
//!
//! Covers the behaviours callers rely on:
//! - Small and convex clouds
//! - Concave outlines (U-shape notch, C-shaped ring, star)
//! - Backtracking with increasing k
//! - Giving up at the k limit and at the iteration bound
//! - Input validation

use rk_hull::constants::{COINCIDENCE_TOLERANCE, K_LIMIT};
use rk_hull::{HullBuilder, HullError, HullWarning, Point2D, build, dedupe};
use std::f64::consts::TAU;

const TOL: f64 = COINCIDENCE_TOLERANCE;

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

/// 7x7 integer grid with a notch cut out of the top middle
fn u_shape() -> Vec<Point2D> {
    (0..7)
        .flat_map(|y| (0..7).map(move |x| (x, y)))
        .filter(|&(x, y)| !((2..=4).contains(&x) && y >= 2))
        .map(|(x, y)| p(x as f64, y as f64))
        .collect()
}

/// Three concentric arcs spanning 280 degrees, open towards +X
fn c_ring() -> Vec<Point2D> {
    let mut cloud = Vec::new();
    for i in 0..25 {
        let angle = (40.0 + i as f64 * 280.0 / 24.0).to_radians();
        for r in [8.0, 9.0, 10.0] {
            cloud.push(p(r * angle.cos(), r * angle.sin()));
        }
    }
    cloud
}

/// Straight arms of unit-spaced points radiating from the origin
fn star(arms: usize, length: usize) -> Vec<Point2D> {
    let mut cloud = vec![p(0.0, 0.0)];
    for arm in 0..arms {
        let angle = arm as f64 * TAU / arms as f64 + 0.05;
        for step in 1..=length {
            let r = step as f64;
            cloud.push(p(r * angle.cos(), r * angle.sin()));
        }
    }
    cloud
}

/// Dense grid plus a far-away cluster no breadth up to the limit can reach
fn grid_with_distant_cluster() -> Vec<Point2D> {
    let mut cloud: Vec<Point2D> = (0..10)
        .flat_map(|y| (0..10).map(move |x| p(x as f64, y as f64)))
        .collect();
    cloud.extend([p(100.0, 100.0), p(101.0, 100.0), p(100.0, 101.0)]);
    cloud
}

// =============================================================================
// SMALL AND CONVEX CLOUDS
// =============================================================================

#[test]
fn test_single_point() {
    let hull = build(&[p(3.0, 4.0)], 4, 100).unwrap();
    assert_eq!(hull.points(), &[p(3.0, 4.0)]);
    assert!(hull.is_complete());
    assert!(!hull.to_wire().is_closed());
}

#[test]
fn test_triangle_is_returned_as_given() {
    let cloud = [p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)];
    let hull = build(&cloud, 4, 100).unwrap();
    assert_eq!(hull.points(), &cloud);
    assert_eq!(hull.iterations(), 0);
    assert!(hull.to_wire().is_closed());
}

#[test]
fn test_square_in_arbitrary_order() {
    let cloud = [p(1.0, 1.0), p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
    let hull = build(&cloud, 4, 1000).unwrap();

    assert_eq!(
        hull.points(),
        &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    );
    assert_eq!(hull.attempted_k(), &[4]);
    assert!(hull.is_simple(TOL));
    // Counter-clockwise traversal
    assert!(rk_hull::geometry::signed_area(hull.points()) > 0.0);
}

#[test]
fn test_interior_points_are_not_vertices() {
    let corners = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
    let interior = [p(0.5, 0.5), p(0.25, 0.75), p(0.75, 0.75)];
    let orders = [[0, 1, 2, 3], [2, 0, 3, 1], [3, 2, 1, 0], [1, 3, 0, 2], [0, 3, 2, 1]];

    for order in orders {
        let mut cloud: Vec<Point2D> = order.iter().map(|&i| corners[i]).collect();
        cloud.extend(interior);
        let hull = build(&cloud, 4, 1000).unwrap();

        assert_eq!(hull.len(), 4, "corner order {order:?}");
        assert!(corners.iter().all(|c| hull.points().contains(c)));
        assert!(hull.covers(&cloud, TOL));
        assert!(hull.warnings().is_empty());

        // Interior points first must not change the outline
        let mut shuffled = interior.to_vec();
        shuffled.extend(order.iter().map(|&i| corners[i]));
        assert_eq!(build(&shuffled, 4, 1000).unwrap().len(), 4, "corner order {order:?}");
    }
}

#[test]
fn test_interior_point_near_the_left_edge_stays_inside() {
    let cloud = [
        p(0.0, 0.0),
        p(1.0, 0.0),
        p(1.0, 1.0),
        p(0.0, 1.0),
        p(0.5, 0.5),
        p(0.25, 0.75),
        p(0.6, 0.3),
    ];
    let hull = build(&cloud, 4, 100).unwrap();

    assert_eq!(
        hull.points(),
        &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    );
    assert!(hull.warnings().is_empty());
}

#[test]
fn test_duplicates_do_not_change_the_hull() {
    let cloud = vec![
        p(0.0, 0.0),
        p(1.0, 0.0),
        p(1.0, 1.0),
        p(0.0, 1.0),
        p(0.5, 0.5),
    ];
    let mut noisy = cloud.clone();
    noisy.extend([p(1.0, 1.0), p(0.0, 0.0), p(0.5, 0.5 + 1e-9)]);

    let clean = build(&cloud, 4, 1000).unwrap();
    let with_duplicates = build(&noisy, 4, 1000).unwrap();
    assert_eq!(clean.points(), with_duplicates.points());
    assert_eq!(dedupe(&noisy, TOL), cloud);
}

// =============================================================================
// CONCAVE OUTLINES
// =============================================================================

#[test]
fn test_u_shape_follows_the_notch() {
    let cloud = u_shape();
    let hull = build(&cloud, 3, 10_000).unwrap();

    assert_eq!(hull.len(), 26);
    assert_eq!(hull.attempted_k(), &[3]);
    assert!(hull.is_complete());
    assert!(hull.covers(&cloud, TOL));
    assert!(hull.is_simple(TOL));

    // Inside the notch, not inside the hull
    assert!(!hull.contains(p(3.0, 4.0), TOL));
    // Bottom of the U is solid
    assert!(hull.contains(p(3.0, 1.0), TOL));
}

#[test]
fn test_c_ring_leaves_the_opening_outside() {
    let cloud = c_ring();
    let hull = build(&cloud, 3, 10_000).unwrap();

    assert_eq!(hull.len(), 51);
    assert_eq!(hull.attempted_k(), &[3]);
    assert!(hull.is_complete());
    assert!(hull.covers(&cloud, TOL));
    assert!(hull.is_simple(TOL));

    assert!(!hull.contains(p(9.0, 0.0), TOL));
    assert!(!hull.contains(p(0.0, 0.0), TOL));

    let lowest = cloud
        .iter()
        .copied()
        .min_by(|a, b| a.y.total_cmp(&b.y))
        .unwrap();
    assert_eq!(hull.points()[0], lowest);
}

#[test]
fn test_input_order_does_not_matter() {
    let cloud = c_ring();
    let reversed: Vec<Point2D> = cloud.iter().rev().copied().collect();

    let a = build(&cloud, 3, 10_000).unwrap();
    let b = build(&reversed, 3, 10_000).unwrap();
    assert_eq!(a.points(), b.points());
}

#[test]
fn test_builds_are_deterministic() {
    let cloud = u_shape();
    let builder = HullBuilder::new().with_k(3);
    assert_eq!(builder.build(&cloud), builder.build(&cloud));
}

// =============================================================================
// BACKTRACKING
// =============================================================================

#[test]
fn test_star_retries_with_increasing_k() {
    let cloud = star(8, 10);
    let hull = build(&cloud, 2, 10_000).unwrap();

    // Narrow breadths walk into an arm and cannot get out without crossing
    assert_eq!(hull.attempted_k(), &[2, 3, 4, 5, 6, 7]);
    assert_eq!(hull.k(), 7);
    assert_eq!(hull.len(), 27);
    assert!(hull.is_complete());
    assert!(hull.covers(&cloud, TOL));
    assert!(hull.is_simple(TOL));
}

#[test]
fn test_endless_crossings_stop_at_the_k_limit() {
    let cloud = star(8, 50);
    let hull = build(&cloud, 2, 10_000).unwrap();

    let expected: Vec<usize> = (2..=K_LIMIT).collect();
    assert_eq!(hull.attempted_k(), expected.as_slice());
    assert!(hull.attempted_k().windows(2).all(|w| w[1] == w[0] + 1));
    assert_eq!(hull.k(), K_LIMIT);
    assert_eq!(
        hull.warnings(),
        &[HullWarning::KLimitReached { limit: K_LIMIT }]
    );
    assert!(!hull.is_complete());
    assert!(!hull.is_empty());
}

#[test]
fn test_uncovered_cluster_stops_at_the_k_limit() {
    let cloud = grid_with_distant_cluster();
    let hull = build(&cloud, 2, 10_000).unwrap();

    let expected: Vec<usize> = (2..=K_LIMIT).collect();
    assert_eq!(hull.attempted_k(), expected.as_slice());
    assert_eq!(hull.k(), K_LIMIT);
    assert_eq!(hull.len(), 36);
    assert_eq!(
        hull.warnings(),
        &[HullWarning::KLimitReached { limit: K_LIMIT }]
    );
    assert!(!hull.is_complete());
    assert!(!hull.covers(&cloud, TOL));
}

#[test]
fn test_oversized_k_is_clamped_before_the_first_attempt() {
    let cloud = grid_with_distant_cluster();
    let hull = build(&cloud, 30, 10_000).unwrap();

    assert_eq!(hull.attempted_k(), &[K_LIMIT]);
    assert_eq!(
        hull.warnings(),
        &[
            HullWarning::KExceedsLimit { requested: 30, limit: K_LIMIT },
            HullWarning::KLimitReached { limit: K_LIMIT },
        ]
    );
}

#[test]
fn test_undersized_k_is_raised() {
    for k in [0, 1] {
        let hull = build(&u_shape(), k, 10_000).unwrap();
        assert_eq!(hull.attempted_k()[0], 2);
        assert_eq!(
            hull.warnings()[0],
            HullWarning::KTooSmall { requested: k, used: 2 }
        );
    }
}

// =============================================================================
// ITERATION BOUND
// =============================================================================

#[test]
fn test_iteration_bound_returns_partial_hull() {
    let hull = build(&u_shape(), 3, 5).unwrap();

    assert_eq!(
        hull.points(),
        &[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), p(4.0, 0.0)]
    );
    assert_eq!(hull.iterations(), 5);
    assert_eq!(hull.attempted_k(), &[3]);
    assert_eq!(
        hull.warnings(),
        &[HullWarning::ReachedIterationLimit { iterations: 5 }]
    );
    assert!(!hull.is_complete());
}

#[test]
fn test_single_iteration_yields_only_the_seed() {
    let hull = build(&u_shape(), 3, 1).unwrap();
    assert_eq!(hull.points(), &[p(0.0, 0.0)]);
    assert!(!hull.is_complete());
}

// =============================================================================
// INPUT VALIDATION
// =============================================================================

#[test]
fn test_empty_cloud() {
    assert_eq!(build(&[], 4, 100), Err(HullError::EmptyCloud));
}

#[test]
fn test_non_finite_coordinates() {
    let cloud = [p(0.0, 0.0), p(1.0, 0.0), p(f64::INFINITY, 1.0)];
    assert_eq!(
        build(&cloud, 4, 100),
        Err(HullError::NonFiniteCoordinate { index: 2 })
    );
}

#[test]
fn test_negative_tolerance() {
    let result = HullBuilder::new()
        .with_tolerance(-1.0)
        .build(&[p(0.0, 0.0)]);
    assert_eq!(result, Err(HullError::InvalidTolerance(-1.0)));
}

// =============================================================================
// DOWNSTREAM WIRE
// =============================================================================

#[test]
fn test_hull_wire_is_closed_loop() {
    let hull = build(&u_shape(), 3, 10_000).unwrap();
    let wire = hull.to_wire();

    assert!(wire.is_closed());
    assert_eq!(wire.len(), hull.len());
    assert_eq!(wire.segments().count(), hull.len());
}
