use std::f64::consts::SQRT_2;

use crate::error::Result;
use crate::geometry::{Line, Point};

use super::{Circle, Figure, Polygon, Rectangle};

/// A rectangle with equal sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    rectangle: Rectangle,
}

impl Square {
    /// Creates a square from two opposite corners.
    ///
    /// # Errors
    ///
    /// Returns an error when the corners coincide.
    pub fn new(corner: Point, opposite: Point) -> Result<Self> {
        Ok(Self {
            rectangle: Rectangle::new(corner, opposite, 1.0)?,
        })
    }

    /// Returns the square as a rectangle.
    #[must_use]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    /// Returns the square as a polygon.
    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        self.rectangle.as_polygon()
    }

    /// Returns the corners.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.rectangle.vertices()
    }

    /// Side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.rectangle.width()
    }

    /// Intersection of the diagonals.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rectangle.center()
    }

    /// Circle through all four corners.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is too small to yield a valid radius.
    pub fn circumscribed_circle(&self) -> Result<Circle> {
        Circle::new(self.center(), self.side() / SQRT_2)
    }

    /// Circle tangent to all four sides.
    ///
    /// # Errors
    ///
    /// Returns an error if the square is too small to yield a valid radius.
    pub fn inscribed_circle(&self) -> Result<Circle> {
        Circle::new(self.center(), self.side() / 2.0)
    }

    fn wrap(rectangle: Rectangle) -> Self {
        Self { rectangle }
    }
}

impl Figure for Square {
    fn perimeter(&self) -> f64 {
        4.0 * self.side()
    }

    fn area(&self) -> f64 {
        self.side() * self.side()
    }

    fn contains_point(&self, point: &Point) -> bool {
        self.rectangle.contains_point(point)
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        self.rectangle.is_congruent_to(&other.rectangle)
    }

    fn is_similar_to(&self, other: &Self) -> bool {
        self.rectangle.is_similar_to(&other.rectangle)
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::wrap(self.rectangle.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        Self::wrap(self.rectangle.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        Self::wrap(self.rectangle.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        Self::wrap(self.rectangle.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        Ok(Self::wrap(self.rectangle.scale(center, coefficient)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square_0_2() -> Square {
        Square::new(Point::ORIGIN, Point::new(2.0, 2.0)).unwrap()
    }

    #[test]
    fn corners_from_diagonal() {
        let s = square_0_2();
        let v = s.vertices();
        assert_abs_diff_eq!(v[1].x(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1].y(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[3].x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[3].y(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.side(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn containment() {
        let s = square_0_2();
        assert!(s.contains_point(&Point::new(1.0, 1.0)));
        assert!(!s.contains_point(&Point::new(3.0, 3.0)));
    }

    #[test]
    fn metrics() {
        let s = square_0_2();
        assert_abs_diff_eq!(s.area(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.perimeter(), 8.0, epsilon = 1e-9);
        assert!(s.as_polygon().is_convex());
    }

    #[test]
    fn circles() {
        let s = square_0_2();
        let outer = s.circumscribed_circle().unwrap();
        let inner = s.inscribed_circle().unwrap();
        assert_abs_diff_eq!(outer.radius(), SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.radius(), 1.0, epsilon = 1e-12);
        assert_eq!(outer.center(), Point::new(1.0, 1.0));
        for corner in s.vertices() {
            let distance = corner.distance_to(&outer.center());
            assert_abs_diff_eq!(distance, outer.radius(), epsilon = 1e-12);
        }
    }

    #[test]
    fn tilted_square() {
        let s = Square::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0)).unwrap();
        assert_abs_diff_eq!(s.side(), SQRT_2, epsilon = 1e-12);
        assert_abs_diff_eq!(s.area(), 2.0, epsilon = 1e-9);
        assert!(s.is_similar_to(&square_0_2()));
        assert!(!s.is_congruent_to(&square_0_2()));
        assert!(s.is_congruent_to(&square_0_2().scale(&Point::ORIGIN, SQRT_2 / 2.0).unwrap()));
    }

    #[test]
    fn transforms_keep_square() {
        let s = square_0_2().reflect_across_line(&Line::from_slope_intercept(-1.0, 7.0));
        assert_abs_diff_eq!(s.as_rectangle().ratio(), 1.0, epsilon = 1e-12);
        assert!(s.is_congruent_to(&square_0_2()));
    }
}
