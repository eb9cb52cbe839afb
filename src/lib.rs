//! Immutable 2D Euclidean shapes.
//!
//! [`geometry`] holds the [`Point`] and [`Line`] primitives, [`shape`] the
//! circle, ellipse and polygon family behind the [`Figure`] contract and the
//! closed [`Shape`] sum type.

pub mod error;
pub mod geometry;
pub mod log;
pub mod math;
pub mod shape;

pub use error::{PlanimetryError, Result};
pub use geometry::{Line, LineIntersection, Point};
pub use shape::{
    Circle, Diagonals, Directrices, Edge, Ellipse, Figure, Foci, Polygon, Rectangle, Shape,
    Square, Triangle,
};
