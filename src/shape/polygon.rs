use crate::error::{ConstructionError, Result};
use crate::geometry::{Line, Point};
use crate::log;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::polygon_2d::{cross_2d, rotate_to_canonical_start, signed_area_2d, unsigned_angle};
use crate::math::{Vector2, MATCH_TOLERANCE, TOLERANCE};

use super::{validate_scale_coefficient, Figure};

/// A directed polygon edge from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    start: Point,
    end: Point,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the start vertex.
    #[must_use]
    pub fn start(&self) -> &Point {
        &self.start
    }

    /// Returns the end vertex.
    #[must_use]
    pub fn end(&self) -> &Point {
        &self.end
    }

    /// Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.start.vector_to(&self.end)
    }
}

/// Which relation the cyclic alignment search checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matching {
    Congruent,
    Similar,
}

/// A closed polygon with at least three vertices.
///
/// Vertices are kept in the order supplied; edge `i` runs from vertex `i` to
/// vertex `(i + 1) mod n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from its vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::TooFewVertices` for fewer than 3 vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            log::debug!(count = vertices.len(), "rejected polygon");
            return Err(ConstructionError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Applies a point map to every vertex. The vertex count is preserved.
    pub(crate) fn map_vertices(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
        }
    }

    /// Returns the vertices in boundary order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the edges in boundary order, closing back to the first vertex.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Interior angle in radians at each vertex, in `[0, pi]`, between the
    /// edges that meet there. Index `i` is the angle at `vertices()[i]`.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let vertex = &self.vertices[i];
                let previous = vertex.vector_to(&self.vertices[(i + n - 1) % n]);
                let next = vertex.vector_to(&self.vertices[(i + 1) % n]);
                unsigned_angle(&previous, &next)
            })
            .collect()
    }

    /// Shoelace area, positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Returns whether the vertices wind counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns whether the polygon is convex.
    ///
    /// Collinear vertex triples are ignored. Triangles are always convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n <= 3 {
            return true;
        }

        let mut expected: Option<bool> = None;
        for i in 0..n {
            let p1 = &self.vertices[i];
            let p2 = &self.vertices[(i + 1) % n];
            let p3 = &self.vertices[(i + 2) % n];
            let cross = cross_2d(&p1.vector_to(p2), &p2.vector_to(p3));
            if cross == 0.0 {
                continue;
            }
            match expected {
                None => expected = Some(cross > 0.0),
                Some(left_turn) if left_turn != (cross > 0.0) => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Average of the vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x(), sy + p.y()));
        Point::new(sx / n, sy / n)
    }

    /// Returns the same polygon wound counter-clockwise and starting at its
    /// leftmost-bottom vertex.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut vertices = self.vertices.clone();
        if signed_area_2d(&vertices) < 0.0 {
            vertices.reverse();
        }
        Self {
            vertices: rotate_to_canonical_start(&vertices),
        }
    }

    /// Congruence test with an explicit matching tolerance.
    #[must_use]
    pub fn is_congruent_within(&self, other: &Polygon, tolerance: f64) -> bool {
        self.find_alignment(other, Matching::Congruent, tolerance).is_some()
    }

    /// Similarity test with an explicit matching tolerance.
    #[must_use]
    pub fn is_similar_within(&self, other: &Polygon, tolerance: f64) -> bool {
        self.find_alignment(other, Matching::Similar, tolerance).is_some()
    }

    /// Edge lengths paired with the angle at each edge's start vertex.
    fn edge_profile(&self) -> (Vec<f64>, Vec<f64>) {
        let lengths = self.edges().iter().map(Edge::length).collect();
        (lengths, self.angles())
    }

    /// Searches every cyclic offset of `self` against `other` and returns the
    /// first one at which all edge lengths (or length ratios) and angles line
    /// up. Reversed vertex order is not tried.
    fn find_alignment(
        &self,
        other: &Polygon,
        matching: Matching,
        tolerance: f64,
    ) -> Option<usize> {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return None;
        }

        let (lengths, angles) = self.edge_profile();
        let (other_lengths, other_angles) = other.edge_profile();

        let found = (0..n).find(|&start| {
            let ratio = lengths[start] / other_lengths[0];
            (0..n).all(|i| {
                let j = (start + i) % n;
                let lengths_match = match matching {
                    Matching::Congruent => (lengths[j] - other_lengths[i]).abs() <= tolerance,
                    Matching::Similar => {
                        (lengths[j] / other_lengths[i] - ratio).abs() <= tolerance
                    }
                };
                lengths_match && (angles[j] - other_angles[i]).abs() <= tolerance
            })
        });
        log::trace!(?matching, offset = ?found, "polygon alignment search");
        found
    }
}

impl Figure for Polygon {
    fn perimeter(&self) -> f64 {
        self.edges().iter().map(Edge::length).sum()
    }

    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Ray casting, with points within [`TOLERANCE`] of an edge counted as
    /// inside.
    fn contains_point(&self, point: &Point) -> bool {
        let edges = self.edges();
        if edges
            .iter()
            .any(|e| point_to_segment_dist(point, e.start(), e.end()) < TOLERANCE)
        {
            return true;
        }

        let (px, py) = (point.x(), point.y());
        let mut inside = false;
        for edge in &edges {
            let (p1, p2) = (edge.start(), edge.end());
            if (p1.y() > py) != (p2.y() > py) {
                let x_cross = (p2.x() - p1.x()) * (py - p1.y()) / (p2.y() - p1.y()) + p1.x();
                if px < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        self.is_congruent_within(other, MATCH_TOLERANCE)
    }

    fn is_similar_to(&self, other: &Self) -> bool {
        self.is_similar_within(other, MATCH_TOLERANCE)
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_vertices(|p| p.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        self.map_vertices(|p| p.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        self.map_vertices(|p| p.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        self.map_vertices(|p| p.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        validate_scale_coefficient(coefficient)?;
        Ok(self.map_vertices(|p| p.scale(center, coefficient)))
    }
}
