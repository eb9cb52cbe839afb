use crate::geometry::Point;

/// Returns the minimum distance from `p` to the segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return p.distance_to(a);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x() - a.x()) * dx + (p.y() - a.y()) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    p.distance_to(&Point::new(a.x() + t * dx, a.y() + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn projection_inside_segment() {
        let d = point_to_segment_dist(
            &Point::new(1.0, 2.0),
            &Point::new(0.0, 0.0),
            &Point::new(4.0, 0.0),
        );
        assert_abs_diff_eq!(d, 2.0);
    }

    #[test]
    fn projection_clamped_to_endpoint() {
        let d = point_to_segment_dist(
            &Point::new(7.0, 4.0),
            &Point::new(0.0, 0.0),
            &Point::new(4.0, 0.0),
        );
        assert_abs_diff_eq!(d, 5.0);
    }

    #[test]
    fn zero_length_segment() {
        let a = Point::new(1.0, 1.0);
        assert_abs_diff_eq!(point_to_segment_dist(&Point::new(4.0, 5.0), &a, &a), 5.0);
    }
}
