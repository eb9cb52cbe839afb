use crate::error::{ConstructionError, GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::log;
use crate::math::TOLERANCE;

use super::{Circle, Figure, Polygon};

/// A polygon with exactly three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Creates a triangle from its vertices.
    ///
    /// # Errors
    ///
    /// Never fails for three points; the `Result` matches the other
    /// constructors.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        Ok(Self {
            polygon: Polygon::new(vec![a, b, c])?,
        })
    }

    /// Creates a triangle from a vertex list.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::WrongVertexCount` unless exactly three
    /// vertices are given.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() != 3 {
            log::debug!(count = vertices.len(), "rejected triangle");
            return Err(ConstructionError::WrongVertexCount {
                shape: "triangle",
                expected: 3,
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self {
            polygon: Polygon::new(vertices)?,
        })
    }

    /// Returns the triangle as a polygon.
    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Returns the three vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    /// Side lengths opposite each vertex, `(|BC|, |CA|, |AB|)`.
    #[must_use]
    pub fn sides(&self) -> (f64, f64, f64) {
        let [a, b, c] = self.corners();
        (b.distance_to(&c), c.distance_to(&a), a.distance_to(&b))
    }

    /// Intersection of the medians.
    #[must_use]
    pub fn centroid(&self) -> Point {
        self.polygon.centroid()
    }

    /// Circle through the three vertices, centered at the intersection of
    /// the perpendicular bisectors.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for collinear vertices.
    pub fn circumscribed_circle(&self) -> Result<Circle> {
        let [a, b, c] = self.corners();
        let (ax, ay, bx, by, cx, cy) = (a.x(), a.y(), b.x(), b.y(), c.x(), c.y());

        let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
        if d.abs() < TOLERANCE {
            return Err(collinear());
        }
        let a_sq = ax * ax + ay * ay;
        let b_sq = bx * bx + by * by;
        let c_sq = cx * cx + cy * cy;
        let ux = (a_sq * (by - cy) + b_sq * (cy - ay) + c_sq * (ay - by)) / d;
        let uy = (a_sq * (cx - bx) + b_sq * (ax - cx) + c_sq * (bx - ax)) / d;

        let center = Point::new(ux, uy);
        Circle::new(center, center.distance_to(&a))
    }

    /// Circle tangent to the three sides, centered at the incenter with
    /// radius `area / semiperimeter`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for collinear vertices.
    pub fn inscribed_circle(&self) -> Result<Circle> {
        let area = self.area();
        if area < TOLERANCE {
            return Err(collinear());
        }
        let [a, b, c] = self.corners();
        let (la, lb, lc) = self.sides();
        let perimeter = la + lb + lc;
        let center = Point::new(
            (la * a.x() + lb * b.x() + lc * c.x()) / perimeter,
            (la * a.y() + lb * b.y() + lc * c.y()) / perimeter,
        );
        Circle::new(center, area / (perimeter / 2.0))
    }

    fn corners(&self) -> [Point; 3] {
        let v = self.polygon.vertices();
        [v[0], v[1], v[2]]
    }

    fn wrap(polygon: Polygon) -> Self {
        Self { polygon }
    }
}

fn collinear() -> crate::error::PlanimetryError {
    GeometryError::Degenerate("triangle vertices are collinear".into()).into()
}

impl Figure for Triangle {
    fn perimeter(&self) -> f64 {
        self.polygon.perimeter()
    }

    fn area(&self) -> f64 {
        self.polygon.area()
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
        Self::wrap(self.polygon.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        Self::wrap(self.polygon.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        Self::wrap(self.polygon.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        Self::wrap(self.polygon.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        Ok(Self::wrap(self.polygon.scale(center, coefficient)?))
    }
}
