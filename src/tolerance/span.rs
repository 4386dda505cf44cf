//! Angular intervals around a point, tested without comparing angles.
//!
//! Membership is decided with orientation tests only, so a span that
//! straddles the 0/360 degree direction needs no special handling.

use super::predicates::{orientation, Orientation};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// The wedge of directions swept counter-clockwise from `from` to `to`, as
/// seen from `origin`.
///
/// A span is always narrower than a half turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSpan<F> {
    origin: Point2<F>,
    from: Point2<F>,
    to: Point2<F>,
    eps: F,
}

impl<F: Float> AngularSpan<F> {
    /// The directions under which `segment` is seen from `origin`.
    ///
    /// Returns `None` when the segment is seen edge-on (its endpoints are
    /// collinear with `origin`), which includes segments through `origin`.
    pub fn of_segment(origin: Point2<F>, segment: Segment2<F>, eps: F) -> Option<Self> {
        let (from, to) = match orientation(origin, segment.start, segment.end, eps) {
            Orientation::CounterClockwise => (segment.start, segment.end),
            Orientation::Clockwise => (segment.end, segment.start),
            Orientation::Collinear => return None,
        };
        Some(Self {
            origin,
            from,
            to,
            eps,
        })
    }

    /// The first boundary direction (clockwise-most).
    #[inline]
    pub fn from(&self) -> Point2<F> {
        self.from
    }

    /// The last boundary direction (counter-clockwise-most).
    #[inline]
    pub fn to(&self) -> Point2<F> {
        self.to
    }

    /// Returns `true` if the direction towards `p` lies in the span, its
    /// boundary directions included.
    pub fn contains(&self, p: Point2<F>) -> bool {
        orientation(self.origin, self.from, p, self.eps) != Orientation::Clockwise
            && orientation(self.origin, self.to, p, self.eps) != Orientation::CounterClockwise
            && self.same_half(p)
    }

    /// Returns `true` if the direction towards `p` lies strictly inside the
    /// span, away from both boundary directions.
    pub fn strictly_contains(&self, p: Point2<F>) -> bool {
        orientation(self.origin, self.from, p, self.eps) == Orientation::CounterClockwise
            && orientation(self.origin, self.to, p, self.eps) == Orientation::Clockwise
    }

    // Rejects directions pointing away from the span, which pass both
    // orientation tests when they are collinear with a boundary.
    #[inline]
    fn same_half(&self, p: Point2<F>) -> bool {
        let dir = p - self.origin;
        dir.dot(self.from - self.origin) >= F::zero() || dir.dot(self.to - self.origin) >= F::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn span(origin: (f64, f64), a: (f64, f64), b: (f64, f64)) -> AngularSpan<f64> {
        AngularSpan::of_segment(
            origin.into(),
            Segment2::new(a.into(), b.into()),
            EPS,
        )
        .unwrap()
    }

    #[test]
    fn test_endpoints_sorted_counter_clockwise() {
        let s = span((0.0, 0.0), (1.0, 1.0), (1.0, -1.0));
        assert_eq!(s.from(), Point2::new(1.0, -1.0));
        assert_eq!(s.to(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_contains_across_zero_degrees() {
        // Wall straddling the +x axis, i.e. the 0/360 seam
        let s = span((0.0, 0.0), (5.0, -2.0), (5.0, 2.0));

        assert!(s.contains(Point2::new(10.0, 0.0)));
        assert!(s.contains(Point2::new(10.0, -3.9)));
        assert!(s.contains(Point2::new(10.0, 3.9)));
        assert!(!s.contains(Point2::new(10.0, 4.1)));
        assert!(!s.contains(Point2::new(-10.0, 0.0)));
    }

    #[test]
    fn test_boundary_directions() {
        let s = span((0.0, 0.0), (5.0, 0.0), (0.0, 5.0));

        assert!(s.contains(Point2::new(20.0, 0.0)));
        assert!(!s.strictly_contains(Point2::new(20.0, 0.0)));
        assert!(s.strictly_contains(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_opposite_direction_rejected() {
        let s = span((0.0, 0.0), (5.0, 0.0), (0.0, 5.0));
        assert!(!s.contains(Point2::new(-3.0, 0.0)));
        assert!(!s.contains(Point2::new(0.0, -3.0)));
        assert!(!s.contains(Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_edge_on_segment_has_no_span() {
        let wall = Segment2::new(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
        assert!(AngularSpan::of_segment(Point2::new(0.0, 0.0), wall, EPS).is_none());

        let through_origin = Segment2::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        assert!(AngularSpan::of_segment(Point2::new(0.0, 0.0), through_origin, EPS).is_none());
    }
}
