mod line;
mod point;

pub use line::{Line, LineIntersection};
pub use point::Point;
