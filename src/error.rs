use thiserror::Error;

/// Top-level error type for the planimetry shape library.
#[derive(Debug, Error)]
pub enum PlanimetryError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("ellipse is not realizable: sum distance {sum_distance} is less than focal distance {focal_distance}")]
    NotRealizable {
        sum_distance: f64,
        focal_distance: f64,
    },
}

/// Errors raised while building a shape from caller input.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("{shape} needs exactly {expected} vertices, got {count}")]
    WrongVertexCount {
        shape: &'static str,
        expected: usize,
        count: usize,
    },
}

/// Convenience type alias for results using [`PlanimetryError`].
pub type Result<T> = std::result::Result<T, PlanimetryError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn geometry_error_converts_to_top_level() {
        let err: PlanimetryError = GeometryError::Degenerate("coincident corners".into()).into();
        assert!(matches!(err, PlanimetryError::Geometry(GeometryError::Degenerate(_))));
        assert_eq!(err.to_string(), "degenerate geometry: coincident corners");
    }

    #[test]
    fn construction_error_message() {
        let err: PlanimetryError = ConstructionError::TooFewVertices { count: 2 }.into();
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, got 2");
    }

    #[test]
    fn polygon_with_two_vertices_reports_count() {
        let err = crate::Polygon::new(vec![crate::Point::ORIGIN, crate::Point::new(1.0, 0.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            PlanimetryError::Construction(ConstructionError::TooFewVertices { count: 2 })
        ));
    }
}
