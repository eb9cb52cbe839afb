use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::log;
use crate::math::{MATCH_TOLERANCE, TOLERANCE};

use super::{Ellipse, Figure};

/// A circle: an ellipse whose foci coincide at the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    ellipse: Ellipse,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not a positive finite number.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            log::debug!(radius, "rejected circle");
            return Err(
                GeometryError::Degenerate(format!("circle radius must be positive, got {radius}"))
                    .into(),
            );
        }
        Ok(Self {
            ellipse: Ellipse::new(center, center, 2.0 * radius)?,
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.ellipse.center()
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.ellipse.sum_distance() / 2.0
    }

    /// Returns the circle viewed as an ellipse with coincident foci.
    #[must_use]
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.ellipse
    }

    fn with_center(&self, center: Point) -> Self {
        Self {
            ellipse: self.ellipse.translate(
                center.x() - self.center().x(),
                center.y() - self.center().y(),
            ),
        }
    }
}

impl Figure for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    fn area(&self) -> f64 {
        self.ellipse.area()
    }

    fn contains_point(&self, point: &Point) -> bool {
        self.ellipse.contains_point(point)
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        (self.radius() - other.radius()).abs() <= MATCH_TOLERANCE
    }

    /// All circles are similar.
    fn is_similar_to(&self, _other: &Self) -> bool {
        true
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.with_center(self.center().translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        self.with_center(self.center().rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        self.with_center(self.center().reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        self.with_center(self.center().reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        Ok(Self {
            ellipse: self.ellipse.scale(center, coefficient)?,
        })
    }
}
