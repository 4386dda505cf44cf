//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters. The
//! library-wide defaults live here as the only two named tolerances; the
//! visibility pipeline reads them through [`crate::VisibilityConfig`].

mod predicates;
mod span;

pub use predicates::{
    intersection_point, orientation, point_on_segment, segments_cross, segments_intersect,
    Orientation,
};
pub use span::AngularSpan;

use num_traits::Float;

/// Default distance tolerance for collinearity, contact and deduplication.
pub const EPSILON: f64 = 1e-7;

/// Default angular offset, in degrees, of the rays cast just past a corner.
pub const OFFSET_ANGLE: f64 = 1e-3;

/// Converts an `f64` setting into the working float type.
#[inline]
pub(crate) fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap()
}
