//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros, otherwise
//! they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __planimetry_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __planimetry_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__planimetry_debug as debug, __planimetry_trace as trace};
