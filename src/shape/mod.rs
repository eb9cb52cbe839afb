mod circle;
mod ellipse;
mod polygon;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use ellipse::{Directrices, Ellipse, Foci};
pub use polygon::{Edge, Polygon};
pub use rectangle::{Diagonals, Rectangle};
pub use square::Square;
pub use triangle::Triangle;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::math::TOLERANCE;

/// Capabilities shared by every planar shape.
///
/// Shapes are immutable: transformations return a new value of the same
/// type and leave `self` untouched.
pub trait Figure: Sized {
    /// Length of the boundary.
    fn perimeter(&self) -> f64;

    /// Enclosed area.
    fn area(&self) -> f64;

    /// Returns whether `point` lies in the closed region of the shape.
    fn contains_point(&self, point: &Point) -> bool;

    /// Same size and shape, ignoring position and orientation.
    fn is_congruent_to(&self, other: &Self) -> bool;

    /// Same shape up to uniform scaling.
    fn is_similar_to(&self, other: &Self) -> bool;

    /// Shifts the shape by `(dx, dy)`.
    #[must_use]
    fn translate(&self, dx: f64, dy: f64) -> Self;

    /// Rotates the shape counter-clockwise about `center`.
    #[must_use]
    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self;

    /// Point reflection through `center`.
    #[must_use]
    fn reflect_about_point(&self, center: &Point) -> Self;

    /// Mirror image across `axis`.
    #[must_use]
    fn reflect_across_line(&self, axis: &Line) -> Self;

    /// Homothety about `center`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when `coefficient` is zero (or not
    /// finite), since the result would collapse to a point.
    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self>;
}

/// Rejects scale coefficients that would collapse a shape.
pub(crate) fn validate_scale_coefficient(coefficient: f64) -> Result<()> {
    if !coefficient.is_finite() || coefficient.abs() < TOLERANCE {
        crate::log::debug!(coefficient, "rejected scale coefficient");
        return Err(GeometryError::Degenerate(format!(
            "scale coefficient must be finite and non-zero, got {coefficient}"
        ))
        .into());
    }
    Ok(())
}

/// Any of the supported shapes.
///
/// Equality, congruence and similarity only hold between values of the same
/// variant: a circle is never equal or congruent to an ellipse, even with
/// identical geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
}

/// Forwards a method call to the shape held by each variant.
macro_rules! dispatch {
    ($shape:expr, $inner:ident => $body:expr) => {
        match $shape {
            Shape::Circle($inner) => $body,
            Shape::Ellipse($inner) => $body,
            Shape::Polygon($inner) => $body,
            Shape::Rectangle($inner) => $body,
            Shape::Square($inner) => $body,
            Shape::Triangle($inner) => $body,
        }
    };
}

/// Like [`dispatch!`], wrapping the result back into the same variant.
macro_rules! dispatch_map {
    ($shape:expr, $inner:ident => $body:expr) => {
        match $shape {
            Shape::Circle($inner) => Shape::Circle($body),
            Shape::Ellipse($inner) => Shape::Ellipse($body),
            Shape::Polygon($inner) => Shape::Polygon($body),
            Shape::Rectangle($inner) => Shape::Rectangle($body),
            Shape::Square($inner) => Shape::Square($body),
            Shape::Triangle($inner) => Shape::Triangle($body),
        }
    };
}

impl Shape {
    /// Short lowercase name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Square(_) => "square",
            Shape::Triangle(_) => "triangle",
        }
    }

    /// The underlying polygon for the polygon family, `None` for conics.
    #[must_use]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Rectangle(r) => Some(r.as_polygon()),
            Shape::Square(s) => Some(s.as_polygon()),
            Shape::Triangle(t) => Some(t.as_polygon()),
            Shape::Circle(_) | Shape::Ellipse(_) => None,
        }
    }
}

impl Figure for Shape {
    fn perimeter(&self) -> f64 {
        dispatch!(self, s => s.perimeter())
    }

    fn area(&self) -> f64 {
        dispatch!(self, s => s.area())
    }

    fn contains_point(&self, point: &Point) -> bool {
        dispatch!(self, s => s.contains_point(point))
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.is_congruent_to(b),
            (Shape::Ellipse(a), Shape::Ellipse(b)) => a.is_congruent_to(b),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.is_congruent_to(b),
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a.is_congruent_to(b),
            (Shape::Square(a), Shape::Square(b)) => a.is_congruent_to(b),
            (Shape::Triangle(a), Shape::Triangle(b)) => a.is_congruent_to(b),
            _ => false,
        }
    }

    fn is_similar_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => a.is_similar_to(b),
            (Shape::Ellipse(a), Shape::Ellipse(b)) => a.is_similar_to(b),
            (Shape::Polygon(a), Shape::Polygon(b)) => a.is_similar_to(b),
            (Shape::Rectangle(a), Shape::Rectangle(b)) => a.is_similar_to(b),
            (Shape::Square(a), Shape::Square(b)) => a.is_similar_to(b),
            (Shape::Triangle(a), Shape::Triangle(b)) => a.is_similar_to(b),
            _ => false,
        }
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        dispatch_map!(self, s => s.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        dispatch_map!(self, s => s.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        dispatch_map!(self, s => s.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        dispatch_map!(self, s => s.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        Ok(dispatch_map!(self, s => s.scale(center, coefficient)?))
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(Circle, Ellipse, Polygon, Rectangle, Square, Triangle);
