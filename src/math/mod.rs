pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type used for internal vector arithmetic.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for degeneracy checks and boundary slack.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute tolerance used when matching edge lengths, length ratios and
/// angles in congruence and similarity tests.
pub const MATCH_TOLERANCE: f64 = 1e-9;
