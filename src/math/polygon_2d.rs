use super::{Vector2, TOLERANCE};
use crate::geometry::Point;

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x() * points[j].y() - points[j].x() * points[i].y();
    }
    sum * 0.5
}

/// Z component of the cross product `a x b`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unsigned angle between two vectors, in `[0, pi]`.
///
/// Equivalent to `acos(a.b / (|a||b|))` but evaluated with `atan2`, which
/// stays accurate for nearly parallel vectors.
#[must_use]
pub fn unsigned_angle(a: &Vector2, b: &Vector2) -> f64 {
    cross_2d(a, b).abs().atan2(a.dot(b))
}

/// Index of the leftmost vertex (smallest x), breaking ties by smallest y.
///
/// Returns 0 for an empty slice.
#[must_use]
pub fn leftmost_bottom_index(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x() < b.x() - TOLERANCE || (pt.x() - b.x()).abs() < TOLERANCE && pt.y() < b.y() {
            best = i;
        }
    }
    best
}

/// Rotates a closed vertex loop so it starts at the leftmost-bottom vertex.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let best = leftmost_bottom_index(points);
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}
