//! Polygon predicates used by the hull walker
//!
//! Plain floating point with absolute tolerances; no exact arithmetic.

use super::{Point2D, points_coincide};

/// Twice the signed area of triangle `(a, b, c)`; positive when counter-clockwise
#[inline]
fn cross(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Orientation sign of `c` relative to `a -> b`.
///
/// Zero when `c` lies within `tolerance` of the line through `a` and `b`,
/// or when the segment itself is shorter than `tolerance`.
#[inline]
fn orientation(a: Point2D, b: Point2D, c: Point2D, tolerance: f64) -> i8 {
    let length = a.distance(b);
    if length <= tolerance {
        return 0;
    }
    let offset = cross(a, b, c) / length;
    if offset.abs() <= tolerance {
        0
    } else if offset > 0.0 {
        1
    } else {
        -1
    }
}

/// Check if `p` lies within the bounding box of `a`/`b`, grown by `tolerance`
#[inline]
fn within_box(a: Point2D, b: Point2D, p: Point2D, tolerance: f64) -> bool {
    p.x >= a.x.min(b.x) - tolerance
        && p.x <= a.x.max(b.x) + tolerance
        && p.y >= a.y.min(b.y) - tolerance
        && p.y <= a.y.max(b.y) + tolerance
}

/// Check if `p` lies on segment `a-b` (distance to the segment within `tolerance`)
fn on_segment(a: Point2D, b: Point2D, p: Point2D, tolerance: f64) -> bool {
    let length = a.distance(b);
    if length <= tolerance {
        return points_coincide(a, p, tolerance);
    }
    cross(a, b, p).abs() / length <= tolerance && within_box(a, b, p, tolerance)
}

/// Test whether segments `p1-p2` and `q1-q2` intersect or touch.
///
/// Collinear overlaps and endpoint contacts count as intersections. Callers
/// checking polygon edges must drop pairs that share an endpoint first, since
/// those always touch.
pub fn segments_intersect(
    p1: Point2D,
    p2: Point2D,
    q1: Point2D,
    q2: Point2D,
    tolerance: f64,
) -> bool {
    if !boxes_overlap(p1, p2, q1, q2, tolerance) {
        return false;
    }

    let o1 = orientation(p1, p2, q1, tolerance);
    let o2 = orientation(p1, p2, q2, tolerance);
    let o3 = orientation(q1, q2, p1, tolerance);
    let o4 = orientation(q1, q2, p2, tolerance);

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    (o1 == 0 && within_box(p1, p2, q1, tolerance))
        || (o2 == 0 && within_box(p1, p2, q2, tolerance))
        || (o3 == 0 && within_box(q1, q2, p1, tolerance))
        || (o4 == 0 && within_box(q1, q2, p2, tolerance))
}

fn boxes_overlap(p1: Point2D, p2: Point2D, q1: Point2D, q2: Point2D, tolerance: f64) -> bool {
    p1.x.max(p2.x) + tolerance >= q1.x.min(q2.x)
        && q1.x.max(q2.x) + tolerance >= p1.x.min(p2.x)
        && p1.y.max(p2.y) + tolerance >= q1.y.min(q2.y)
        && q1.y.max(q2.y) + tolerance >= p1.y.min(p2.y)
}

/// Boundary-inclusive point-in-polygon test.
///
/// The polygon is implicitly closed (last vertex links back to the first).
/// A point within `tolerance` of a vertex or lying on an edge, horizontal
/// edges included, is inside. Otherwise a ray is cast towards +X and the
/// crossings are counted, even-odd, over the edges the point does not
/// belong to, using the half-open rule on Y so that a ray grazing a vertex
/// is counted once.
///
/// One- and two-vertex polygons only contain their vertex or segment.
pub fn point_in_polygon(point: Point2D, polygon: &[Point2D], tolerance: f64) -> bool {
    if polygon
        .iter()
        .any(|&vertex| points_coincide(point, vertex, tolerance))
    {
        return true;
    }

    match polygon.len() {
        0 | 1 => return false,
        2 => return on_segment(polygon[0], polygon[1], point, tolerance),
        _ => {}
    }

    if edges(polygon).any(|(a, b)| on_segment(a, b, point, tolerance)) {
        return true;
    }

    let mut inside = false;
    for (a, b) in edges(polygon) {
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x {
                inside = !inside;
            }
        }
    }

    inside
}

/// Check that every point lies inside or on the boundary of `polygon`
pub fn polygon_covers(polygon: &[Point2D], points: &[Point2D], tolerance: f64) -> bool {
    points
        .iter()
        .all(|&point| point_in_polygon(point, polygon, tolerance))
}

/// Signed area of a closed polygon; positive for counter-clockwise order
pub fn signed_area(polygon: &[Point2D]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    edges(polygon).map(|(a, b)| a.perp_dot(b)).sum::<f64>() * 0.5
}

/// Check that a closed polygon has no two non-adjacent edges touching
pub fn is_simple(polygon: &[Point2D], tolerance: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let (a1, a2) = (polygon[i], polygon[(i + 1) % n]);
        for j in (i + 2)..n {
            // The last edge closes onto the first vertex
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (polygon[j], polygon[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2, tolerance) {
                return false;
            }
        }
    }

    true
}

/// Edges of the implicitly closed polygon
fn edges(polygon: &[Point2D]) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().skip(1).chain(polygon.first()))
        .map(|(&a, &b)| (a, b))
}
