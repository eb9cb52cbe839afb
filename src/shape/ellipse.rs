use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::{Line, Point};
use crate::log;
use crate::math::{Vector2, MATCH_TOLERANCE, TOLERANCE};

use super::{validate_scale_coefficient, Figure};

/// The two foci of an ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Foci {
    pub left: Point,
    pub right: Point,
}

/// The two directrices of an ellipse, one beyond each focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Directrices {
    pub first: Line,
    pub second: Line,
}

/// An ellipse given by its foci and the constant sum of distances from any
/// boundary point to both foci.
///
/// With `a = sum_distance / 2` and `c` half the focal distance, the semi-minor
/// axis is `b = sqrt(a^2 - c^2)`. Coincident foci give a circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    focus_left: Point,
    focus_right: Point,
    sum_distance: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `sum_distance` is not a positive
    /// finite number, and `GeometryError::NotRealizable` if it is shorter than
    /// the distance between the foci.
    pub fn new(focus_left: Point, focus_right: Point, sum_distance: f64) -> Result<Self> {
        if !sum_distance.is_finite() || sum_distance < TOLERANCE {
            log::debug!(sum_distance, "rejected ellipse");
            return Err(GeometryError::Degenerate(format!(
                "ellipse sum distance must be positive, got {sum_distance}"
            ))
            .into());
        }
        let focal_distance = focus_left.distance_to(&focus_right);
        if sum_distance < focal_distance {
            log::debug!(sum_distance, focal_distance, "rejected ellipse");
            return Err(GeometryError::NotRealizable {
                sum_distance,
                focal_distance,
            }
            .into());
        }
        Ok(Self {
            focus_left,
            focus_right,
            sum_distance,
        })
    }

    /// Returns both foci.
    #[must_use]
    pub fn foci(&self) -> Foci {
        Foci {
            left: self.focus_left,
            right: self.focus_right,
        }
    }

    /// Sum of distances from any boundary point to the two foci.
    #[must_use]
    pub fn sum_distance(&self) -> f64 {
        self.sum_distance
    }

    /// Midpoint of the foci.
    #[must_use]
    pub fn center(&self) -> Point {
        self.focus_left.midpoint(&self.focus_right)
    }

    /// Half the distance between the foci.
    #[must_use]
    pub fn focal_half_distance(&self) -> f64 {
        self.focus_left.distance_to(&self.focus_right) / 2.0
    }

    /// Semi-major axis `a`.
    #[must_use]
    pub fn semi_major_axis(&self) -> f64 {
        self.sum_distance / 2.0
    }

    /// Semi-minor axis `b`.
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        let a = self.semi_major_axis();
        let c = self.focal_half_distance();
        (a * a - c * c).max(0.0).sqrt()
    }

    /// Returns `(a, b)`.
    #[must_use]
    pub fn semi_axes(&self) -> (f64, f64) {
        (self.semi_major_axis(), self.semi_minor_axis())
    }

    /// Eccentricity `c / a`, zero for a circle.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.focal_half_distance() / self.semi_major_axis()
    }

    /// Returns whether the foci coincide.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        self.focal_half_distance() < TOLERANCE
    }

    /// Lines perpendicular to the major axis at distance `a^2 / c` from the
    /// center. `first` lies on the side of the right focus.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for a circle, whose directrices are
    /// at infinity.
    pub fn directrices(&self) -> Result<Directrices> {
        if self.is_circle() {
            return Err(GeometryError::Degenerate(
                "a circle has no finite directrices".into(),
            )
            .into());
        }
        let a = self.semi_major_axis();
        let c = self.focal_half_distance();
        let offset = a * a / c;

        let axis = self.focus_left.vector_to(&self.focus_right).normalize();
        let normal = Vector2::new(-axis.y, axis.x);
        let center = self.center().to_point2();

        let directrix = |side: f64| {
            let foot = center + axis * (side * offset);
            let along = foot + normal;
            Line::through(&Point::from(foot), &Point::from(along))
        };
        Ok(Directrices {
            first: directrix(1.0),
            second: directrix(-1.0),
        })
    }

    fn map_foci(&self, f: impl Fn(&Point) -> Point) -> Self {
        Self {
            focus_left: f(&self.focus_left),
            focus_right: f(&self.focus_right),
            sum_distance: self.sum_distance,
        }
    }
}

impl Figure for Ellipse {
    /// Ramanujan's second approximation.
    fn perimeter(&self) -> f64 {
        let (a, b) = self.semi_axes();
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }

    fn area(&self) -> f64 {
        let (a, b) = self.semi_axes();
        PI * a * b
    }

    fn contains_point(&self, point: &Point) -> bool {
        point.distance_to(&self.focus_left) + point.distance_to(&self.focus_right)
            <= self.sum_distance + TOLERANCE
    }

    fn is_congruent_to(&self, other: &Self) -> bool {
        let (a1, b1) = self.semi_axes();
        let (a2, b2) = other.semi_axes();
        (a1 - a2).abs() <= MATCH_TOLERANCE && (b1 - b2).abs() <= MATCH_TOLERANCE
    }

    fn is_similar_to(&self, other: &Self) -> bool {
        (self.eccentricity() - other.eccentricity()).abs() <= MATCH_TOLERANCE
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_foci(|p| p.translate(dx, dy))
    }

    fn rotate(&self, center: &Point, angle_degrees: f64) -> Self {
        self.map_foci(|p| p.rotate(center, angle_degrees))
    }

    fn reflect_about_point(&self, center: &Point) -> Self {
        self.map_foci(|p| p.reflect_about_point(center))
    }

    fn reflect_across_line(&self, axis: &Line) -> Self {
        self.map_foci(|p| p.reflect_across_line(axis))
    }

    fn scale(&self, center: &Point, coefficient: f64) -> Result<Self> {
        validate_scale_coefficient(coefficient)?;
        // foci and sum scale together, so a realizable ellipse stays realizable
        Ok(Self {
            focus_left: self.focus_left.scale(center, coefficient),
            focus_right: self.focus_right.scale(center, coefficient),
            sum_distance: self.sum_distance * coefficient.abs(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanimetryError;
    use approx::assert_abs_diff_eq;

    // a = 5, b = 3, c = 4
    fn ellipse_5_3() -> Ellipse {
        Ellipse::new(Point::new(-4.0, 0.0), Point::new(4.0, 0.0), 10.0).unwrap()
    }

    #[test]
    fn derived_axes() {
        let e = ellipse_5_3();
        let (a, b) = e.semi_axes();
        assert_abs_diff_eq!(a, 5.0);
        assert_abs_diff_eq!(b, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.eccentricity(), 0.8);
        assert_eq!(e.center(), Point::ORIGIN);
    }

    #[test]
    fn area_and_perimeter() {
        let e = ellipse_5_3();
        assert_abs_diff_eq!(e.area(), 15.0 * PI, epsilon = 1e-9);
        // Ramanujan II: pi * (24 - sqrt(18 * 14))
        let expected = PI * (24.0 - 252.0_f64.sqrt());
        assert_abs_diff_eq!(e.perimeter(), expected, epsilon = 1e-9);
    }

    #[test]
    fn coincident_foci_behave_as_circle() {
        let e = Ellipse::new(Point::ORIGIN, Point::ORIGIN, 10.0).unwrap();
        assert!(e.is_circle());
        assert_abs_diff_eq!(e.area(), 25.0 * PI, epsilon = 1e-9);
        assert_abs_diff_eq!(e.perimeter(), 10.0 * PI, epsilon = 1e-9);
        assert_abs_diff_eq!(e.eccentricity(), 0.0);
    }

    #[test]
    fn unrealizable_ellipse_is_rejected() {
        let r = Ellipse::new(Point::new(-4.0, 0.0), Point::new(4.0, 0.0), 7.0);
        assert!(matches!(
            r,
            Err(PlanimetryError::Geometry(GeometryError::NotRealizable { .. }))
        ));
    }

    #[test]
    fn non_positive_sum_is_rejected() {
        assert!(Ellipse::new(Point::ORIGIN, Point::ORIGIN, 0.0).is_err());
        assert!(Ellipse::new(Point::ORIGIN, Point::ORIGIN, -1.0).is_err());
        assert!(Ellipse::new(Point::ORIGIN, Point::ORIGIN, f64::NAN).is_err());
    }

    #[test]
    fn contains_closed_region() {
        let e = ellipse_5_3();
        assert!(e.contains_point(&Point::ORIGIN));
        assert!(e.contains_point(&Point::new(5.0, 0.0)));
        assert!(e.contains_point(&Point::new(0.0, 3.0)));
        assert!(!e.contains_point(&Point::new(0.0, 3.1)));
        assert!(!e.contains_point(&Point::new(4.0, 2.5)));
    }

    #[test]
    fn directrices_of_axis_aligned_ellipse() {
        let d = ellipse_5_3().directrices().unwrap();
        // a^2 / c = 25 / 4
        assert_eq!(d.first, Line::vertical(6.25));
        assert_eq!(d.second, Line::vertical(-6.25));
    }

    #[test]
    fn directrix_ratio_equals_eccentricity() {
        let e = ellipse_5_3().rotate(&Point::new(1.0, 1.0), 30.0);
        let d = e.directrices().unwrap();
        let Line::Sloped { slope, intercept } = d.first else {
            panic!("rotated directrix should not be vertical");
        };
        // any boundary point: the co-vertex at the end of the minor axis
        let axis = e.foci().left.vector_to(&e.foci().right).normalize();
        let p = Point::from(e.center().to_point2() + Vector2::new(-axis.y, axis.x) * 3.0);
        let to_focus = p.distance_to(&e.foci().right);
        let to_line = (slope * p.x() - p.y() + intercept).abs() / slope.hypot(1.0);
        assert_abs_diff_eq!(to_focus / to_line, e.eccentricity(), epsilon = 1e-9);
    }

    #[test]
    fn circle_has_no_directrices() {
        let e = Ellipse::new(Point::ORIGIN, Point::ORIGIN, 2.0).unwrap();
        assert!(e.directrices().is_err());
    }

    #[test]
    fn congruence_and_similarity() {
        let e = ellipse_5_3();
        let moved = e.rotate(&Point::new(3.0, 3.0), 71.0).translate(-2.0, 8.0);
        assert!(e.is_congruent_to(&moved));
        let bigger = e.scale(&Point::ORIGIN, 2.0).unwrap();
        assert!(!e.is_congruent_to(&bigger));
        assert!(e.is_similar_to(&bigger));
        let rounder = Ellipse::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0), 10.0).unwrap();
        assert!(!e.is_similar_to(&rounder));
    }

    #[test]
    fn negative_scale_keeps_positive_sum() {
        let scaled = ellipse_5_3().scale(&Point::ORIGIN, -0.5).unwrap();
        assert_abs_diff_eq!(scaled.sum_distance(), 5.0);
        assert_eq!(scaled.foci().left, Point::new(2.0, 0.0));
    }

    #[test]
    fn scaling_a_boundary_ellipse_never_fails() {
        let center = Point::new(1.3, -2.9);
        for i in 1..200 {
            let step = f64::from(i);
            let far = Point::new(0.37 * step, 0.11 * step);
            let flat = Ellipse::new(Point::ORIGIN, far, Point::ORIGIN.distance_to(&far)).unwrap();
            for k in [0.1, 0.3, 1.7, 3.3, -0.7] {
                let scaled = flat.scale(&center, k).unwrap();
                assert_abs_diff_eq!(
                    scaled.sum_distance(),
                    flat.sum_distance() * k.abs(),
                    epsilon = 1e-12
                );
                assert!(scaled.semi_minor_axis() >= 0.0);
            }
        }
    }
}
