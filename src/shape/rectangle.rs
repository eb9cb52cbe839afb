use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::log;
use crate::math::{Vector2, TOLERANCE};

use super::{Figure, Polygon};

/// The two diagonals of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagonals {
    pub first: Line,
    pub second: Line,
}

/// A rectangle stored as its four corners in counter-clockwise order.
///
/// Vertex 0 and vertex 2 are the opposite corners supplied at construction.
/// The side `v0 -> v1` is the width and `v1 -> v2` is the height.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    polygon: Polygon,
}

impl Rectangle {
    /// Creates a rectangle from two opposite corners and the side ratio
    /// `height / width`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` for a non-positive or
    /// non-finite ratio and `GeometryError::Degenerate` when the corners
    /// coincide.
    pub fn new(corner: Point, opposite: Point, ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio < TOLERANCE {
            log::debug!(ratio, "rejected rectangle ratio");
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ratio",
                value: ratio,
                min: TOLERANCE,
                max: f64::MAX,
            }
            .into());
        }
        let diagonal = corner.vector_to(&opposite);
        let length = diagonal.norm();
        if length < TOLERANCE {
            log::debug!(%corner, %opposite, "rejected rectangle with coincident corners");
            return Err(
                GeometryError::Degenerate("rectangle corners must be distinct".into()).into(),
            );
        }

        let width = length / ratio.hypot(1.0);
        let height = width * ratio;

        // The width side leaves `corner` at atan(ratio) clockwise from the diagonal.
        let angle = diagonal.y.atan2(diagonal.x) - ratio.atan();
        let along = Vector2::new(angle.cos(), angle.sin());
        let across = Vector2::new(-along.y, along.x);

        let origin = corner.to_point2();
        let width_corner = Point::from(origin + along * width);
        let height_corner = Point::from(origin + across * height);

        Ok(Self {
            polygon: Polygon::new(vec![corner, width_corner, opposite, height_corner])?,
        })
    }

    /// Wraps a polygon already known to be a rectangle.
    pub(crate) fn from_polygon(polygon: Polygon) -> Self {
        Self { polygon }
    }

    /// Returns the rectangle as a polygon.
    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the corners.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    /// Length of the side `v0 -> v1`.
    #[must_use]
    pub fn width(&self) -> f64 {
        let v = self.vertices();
        v[0].distance_to(&v[1])
    }

    /// Length of the side `v1 -> v2`.
    #[must_use]
    pub fn height(&self) -> f64 {
        let v = self.vertices();
        v[1].distance_to(&v[2])
    }

    /// Side ratio `height / width`, recomputed from the corners.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.height() / self.width()
    }

    /// Intersection of the diagonals.
    #[must_use]
    pub fn center(&self) -> Point {
        let v = self.vertices();
        v[0].midpoint(&v[2])
    }

    /// Returns the diagonals `v0 v2` and `v1 v3`.
    #[must_use]
    pub fn diagonals(&self) -> Diagonals {
        let v = self.vertices();
        Diagonals {
            first: Line::through(&v[0], &v[2]),
            second: Line::through(&v[1], &v[3]),
        }
    }
}

impl Figure for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn contains_point(&self, point: &Point) -> bool {
        self.polygon.contains_point(point)
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        self.polygon.is_congruent_to(&other.polygon)
    }

    fn is_similar_to(&self, other: &Self) -> bool {
        self.polygon.is_similar_to(&other.polygon)
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_polygon(self.polygon.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        Self::from_polygon(self.polygon.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        Self::from_polygon(self.polygon.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        Self::from_polygon(self.polygon.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        Ok(Self::from_polygon(self.polygon.scale(center, coefficient)?))
    }
}
