//! Screen window onto the world.

use super::Aabb2;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// The part of the world currently shown on screen.
///
/// Screen coordinates have their origin at the lower-left corner of the
/// window; `left` and `bottom` are the world coordinates of that corner.
/// Pass a `Viewport` explicitly to anything that needs to translate cursor
/// positions or test on-screen membership.
///
/// # Example
///
/// ```
/// use sightline::bounds::Viewport;
/// use sightline::Point2;
///
/// let view: Viewport<f64> = Viewport::new(100.0, 50.0, 800.0, 600.0);
/// assert_eq!(view.to_world(Point2::new(10.0, 10.0)), Point2::new(110.0, 60.0));
/// assert!(view.contains(Point2::new(500.0, 300.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport<F> {
    pub left: F,
    pub bottom: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Viewport<F> {
    /// Creates a viewport whose lower-left corner sits at `(left, bottom)`.
    #[inline]
    pub fn new(left: F, bottom: F, width: F, height: F) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[inline]
    fn offset(self) -> Vec2<F> {
        Vec2::new(self.left, self.bottom)
    }

    /// Converts a screen position into world coordinates.
    #[inline]
    pub fn to_world(self, screen: Point2<F>) -> Point2<F> {
        screen + self.offset()
    }

    /// Converts a world position into screen coordinates.
    #[inline]
    pub fn to_screen(self, world: Point2<F>) -> Point2<F> {
        world - self.offset()
    }

    /// World-space rectangle covered by the viewport.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::new(
            Point2::new(self.left, self.bottom),
            Point2::new(self.left + self.width, self.bottom + self.height),
        )
    }

    /// Returns `true` if the world point is on screen (edges included).
    #[inline]
    pub fn contains(self, world: Point2<F>) -> bool {
        self.bounds().contains_point(world)
    }
}
