use crate::log;
use crate::math::TOLERANCE;

use super::Point;

/// An infinite line in slope-intercept form.
///
/// Vertical lines cannot be written as `y = kx + c`; they carry only their
/// x-position. Every computation must branch on the variant before doing
/// slope arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// `y = slope * x + intercept`.
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`.
    Vertical { x: f64 },
}

/// Outcome of intersecting two lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at exactly one point.
    Point(Point),
    /// The lines never meet.
    Parallel,
    /// The lines are the same line.
    Coincident,
}

impl Line {
    /// Line through two points. Equal x-coordinates give a vertical line.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn through(p1: &Point, p2: &Point) -> Self {
        if p1.x() == p2.x() {
            return Line::Vertical { x: p1.x() };
        }
        let slope = (p2.y() - p1.y()) / (p2.x() - p1.x());
        Line::Sloped {
            slope,
            intercept: p1.y() - slope * p1.x(),
        }
    }

    /// Line `y = slope * x + intercept`.
    #[must_use]
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Self {
        Line::Sloped { slope, intercept }
    }

    /// Line through `point` with the given slope.
    #[must_use]
    pub fn from_point_slope(point: &Point, slope: f64) -> Self {
        Line::Sloped {
            slope,
            intercept: point.y() - slope * point.x(),
        }
    }

    /// Vertical line `x = x`.
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Line::Vertical { x }
    }

    /// Returns whether the line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    /// Slope of the line; `+inf` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> f64 {
        match *self {
            Line::Sloped { slope, .. } => slope,
            Line::Vertical { .. } => f64::INFINITY,
        }
    }

    /// Intercept of the line. For a vertical line this is its x-position.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        match *self {
            Line::Sloped { intercept, .. } => intercept,
            Line::Vertical { x } => x,
        }
    }

    /// Height of the line at `x`, or `None` for a vertical line.
    #[must_use]
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
            Line::Vertical { .. } => None,
        }
    }

    /// Returns whether `p` lies on the line within [`TOLERANCE`].
    #[must_use]
    pub fn contains(&self, p: &Point) -> bool {
        match *self {
            Line::Vertical { x } => (p.x() - x).abs() < TOLERANCE,
            Line::Sloped { slope, intercept } => {
                // distance from the point to the line
                (slope * p.x() - p.y() + intercept).abs() / slope.hypot(1.0) < TOLERANCE
            }
        }
    }

    /// Intersection point of two lines.
    ///
    /// Lines with equal slopes (parallel, coincident, or both vertical)
    /// return [`Point::EMPTY`]; use [`Line::intersection`] to tell those
    /// cases apart.
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Point {
        match self.intersection(other) {
            LineIntersection::Point(p) => p,
            LineIntersection::Parallel | LineIntersection::Coincident => Point::EMPTY,
        }
    }

    /// Intersection of two lines, distinguishing parallel from coincident.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersection(&self, other: &Line) -> LineIntersection {
        if self.slope() == other.slope() {
            let outcome = if self.intercept() == other.intercept() {
                LineIntersection::Coincident
            } else {
                LineIntersection::Parallel
            };
            log::trace!(line = ?self, other = ?other, ?outcome, "lines do not cross");
            return outcome;
        }
        let point = match (*self, *other) {
            (Line::Vertical { x }, Line::Sloped { slope, intercept })
            | (Line::Sloped { slope, intercept }, Line::Vertical { x }) => {
                Point::new(x, slope * x + intercept)
            }
            (
                Line::Sloped {
                    slope: k1,
                    intercept: c1,
                },
                Line::Sloped {
                    slope: k2,
                    intercept: c2,
                },
            ) => {
                let x = (c2 - c1) / (k1 - k2);
                Point::new(x, k1 * x + c1)
            }
            // equal slopes handled above
            (Line::Vertical { .. }, Line::Vertical { .. }) => return LineIntersection::Parallel,
        };
        LineIntersection::Point(point)
    }
}
