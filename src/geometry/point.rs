use std::fmt;

use crate::math::{Point2, Rotation2, Vector2};

use super::Line;

/// An immutable point in the Euclidean plane.
///
/// All affine operations return a new point. Equality compares the
/// coordinates exactly; tolerance-aware comparisons belong to the shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Sentinel for "no point", returned by [`Line::intersect`] for parallel
    /// lines. Not a real coordinate.
    pub const EMPTY: Point = Point {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns whether this point is the [`Point::EMPTY`] sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_infinite() && self.x > 0.0 && self.y.is_infinite() && self.y > 0.0
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint of the segment between `self` and `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(self.x.midpoint(other.x), self.y.midpoint(other.y))
    }

    /// Shifts the point by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Point reflection through `center`: `2 * center - self`.
    #[must_use]
    pub fn reflect_about_point(&self, center: &Point) -> Point {
        Point::new(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    /// Mirrors the point across `axis`.
    #[must_use]
    pub fn reflect_across_line(&self, axis: &Line) -> Point {
        match *axis {
            Line::Vertical { x } => Point::new(2.0 * x - self.x, self.y),
            Line::Sloped { slope: k, intercept: c } => {
                // x-coordinate of the foot of the perpendicular
                let d = (self.x + (self.y - c) * k) / (1.0 + k * k);
                Point::new(2.0 * d - self.x, 2.0 * (k * d + c) - self.y)
            }
        }
    }

    /// Rotates the point counter-clockwise about `center` by `angle_degrees`.
    #[must_use]
    pub fn rotate(&self, center: &Point, angle_degrees: f64) -> Point {
        let rotation = Rotation2::new(angle_degrees.to_radians());
        let c = center.to_point2();
        Point::from(c + rotation * (self.to_point2() - c))
    }

    /// Homothety about `center`: `center + (self - center) * coefficient`.
    ///
    /// A negative coefficient also reflects through `center`.
    #[must_use]
    pub fn scale(&self, center: &Point, coefficient: f64) -> Point {
        let c = center.to_point2();
        Point::from(c + (self.to_point2() - c) * coefficient)
    }

    /// Vector from `self` to `other`.
    #[must_use]
    pub fn vector_to(&self, other: &Point) -> Vector2 {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    /// Converts to an `nalgebra` point.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        p.to_point2()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty)")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point(p: Point, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x(), x, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y(), y, epsilon = 1e-12);
    }

    #[test]
    fn translate_shifts_components() {
        assert_point(Point::new(1.0, 2.0).translate(3.0, -4.0), 4.0, -2.0);
    }

    #[test]
    fn reflect_about_point() {
        let p = Point::new(1.0, 2.0);
        assert_point(p.reflect_about_point(&Point::new(3.0, 3.0)), 5.0, 4.0);
    }

    #[test]
    fn reflect_across_vertical_line() {
        let axis = Line::vertical(2.0);
        assert_point(Point::new(5.0, 7.0).reflect_across_line(&axis), -1.0, 7.0);
    }

    #[test]
    fn reflect_across_horizontal_line() {
        let axis = Line::from_slope_intercept(0.0, 1.0);
        assert_point(Point::new(4.0, 3.0).reflect_across_line(&axis), 4.0, -1.0);
    }

    #[test]
    fn reflect_across_diagonal_swaps_coordinates() {
        let axis = Line::from_slope_intercept(1.0, 0.0);
        assert_point(Point::new(1.0, 0.0).reflect_across_line(&axis), 0.0, 1.0);
        assert_point(Point::new(3.0, -2.0).reflect_across_line(&axis), -2.0, 3.0);
    }

    #[test]
    fn reflect_across_line_twice_is_identity() {
        let axis = Line::from_slope_intercept(-0.75, 2.5);
        let p = Point::new(-3.0, 8.0);
        let back = p.reflect_across_line(&axis).reflect_across_line(&axis);
        assert_point(back, -3.0, 8.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = Point::new(2.0, 1.0);
        assert_point(p.rotate(&Point::new(1.0, 1.0), 90.0), 1.0, 2.0);
    }

    #[test]
    fn rotate_full_turn_returns_to_start() {
        let p = Point::new(-2.5, 4.0);
        assert_point(p.rotate(&Point::new(7.0, -1.0), 360.0), -2.5, 4.0);
    }

    #[test]
    fn scale_from_center() {
        let p = Point::new(3.0, 3.0);
        assert_point(p.scale(&Point::new(1.0, 1.0), 2.0), 5.0, 5.0);
        assert_point(p.scale(&Point::new(1.0, 1.0), -1.0), -1.0, -1.0);
    }

    #[test]
    fn empty_sentinel() {
        assert!(Point::EMPTY.is_empty());
        assert!(!Point::ORIGIN.is_empty());
        assert_eq!(Point::EMPTY.to_string(), "(empty)");
    }

    #[test]
    fn distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_abs_diff_eq!(a.distance_to(&b), 5.0);
        assert_point(a.midpoint(&b), 1.5, 2.0);
    }

    #[test]
    fn midpoint_of_huge_coordinates_stays_finite() {
        let a = Point::new(f64::MAX, -f64::MAX);
        let m = a.midpoint(&a);
        assert!(m.x().is_finite() && m.y().is_finite());
        assert_eq!(m, a);
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = Point::new(1.5, -2.0);
        let q: Point2 = p.into();
        assert_eq!(Point::from(q), p);
    }
}
