//! Angles around a point and movement along a heading.
//!
//! Angles are in degrees, counter-clockwise from the +x axis, in `[0, 360)`.
//! Sorting points by [`angle`] around a common origin therefore yields a
//! counter-clockwise sweep starting east.

use super::{Point2, Vec2};
use crate::error::SightError;
use num_traits::Float;

/// Angle of the directed vector from `from` to `to`, in `[0, 360)` degrees.
///
/// Coincident points report `0`.
///
/// # Example
///
/// ```
/// use sightline::primitives::{angle, Point2};
///
/// let o: Point2<f64> = Point2::new(1.0, 1.0);
/// assert_eq!(angle(o, Point2::new(1.0, 5.0)), 90.0);
/// assert_eq!(angle(o, Point2::new(1.0, -5.0)), 270.0);
/// ```
#[inline]
pub fn angle<F: Float>(from: Point2<F>, to: Point2<F>) -> F {
    (to - from).degrees()
}

/// Where a [`move_along`] step is pointed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading<F> {
    /// Towards a target point; the angle is derived from it.
    Toward(Point2<F>),
    /// An explicit angle in degrees.
    Angle(F),
}

impl<F: Float> Heading<F> {
    /// Builds a heading from an optional target and an optional angle.
    ///
    /// The target wins when both are given. Fails with
    /// [`SightError::InvalidArgument`] when neither is.
    pub fn from_parts(target: Option<Point2<F>>, angle: Option<F>) -> Result<Self, SightError> {
        match (target, angle) {
            (Some(target), _) => Ok(Heading::Toward(target)),
            (None, Some(angle)) => Ok(Heading::Angle(angle)),
            (None, None) => Err(SightError::InvalidArgument(
                "a heading needs either a target point or an angle",
            )),
        }
    }

    /// The heading angle as seen from `start`, in degrees.
    #[inline]
    pub fn degrees_from(self, start: Point2<F>) -> F {
        match self {
            Heading::Toward(target) => angle(start, target),
            Heading::Angle(deg) => deg,
        }
    }
}

/// Projects `start` by `velocity` units along `heading`.
///
/// # Example
///
/// ```
/// use sightline::primitives::{move_along, Heading, Point2};
///
/// let end = move_along(Point2::new(0.0_f64, 0.0), 2.0, Heading::Angle(90.0));
/// assert!((end.x - 0.0).abs() < 1e-12);
/// assert!((end.y - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn move_along<F: Float>(start: Point2<F>, velocity: F, heading: Heading<F>) -> Point2<F> {
    start + Vec2::from_degrees(heading.degrees_from(start)) * velocity
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_is_counter_clockwise_from_east() {
        let o: Point2<f64> = Point2::new(0.0, 0.0);
        assert_relative_eq!(angle(o, Point2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(angle(o, Point2::new(1.0, 1.0)), 45.0);
        assert_relative_eq!(angle(o, Point2::new(-1.0, 1.0)), 135.0);
        assert_relative_eq!(angle(o, Point2::new(-1.0, -1.0)), 225.0);
        assert_relative_eq!(angle(o, Point2::new(1.0, -1.0)), 315.0);
    }

    #[test]
    fn test_angle_coincident_points() {
        let p: Point2<f64> = Point2::new(3.0, 3.0);
        assert_eq!(angle(p, p), 0.0);
    }

    #[test]
    fn test_move_along_toward_target() {
        let start: Point2<f64> = Point2::new(0.0, 0.0);
        let end = move_along(start, 5.0, Heading::Toward(Point2::new(30.0, 40.0)));
        assert_relative_eq!(end.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_move_along_angle() {
        let start: Point2<f64> = Point2::new(10.0, 10.0);
        let end = move_along(start, 10.0, Heading::Angle(180.0));
        assert_relative_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heading_from_parts() {
        let target: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(
            Heading::from_parts(Some(target), Some(45.0)).unwrap(),
            Heading::Toward(target)
        );
        assert_eq!(
            Heading::from_parts(None, Some(45.0)).unwrap(),
            Heading::Angle(45.0)
        );
        assert!(matches!(
            Heading::<f64>::from_parts(None, None),
            Err(SightError::InvalidArgument(_))
        ));
    }
}
