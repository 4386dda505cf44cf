//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

impl Orientation {
    /// The orientation seen from the other side of the line.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Computes the orientation of `c` relative to the directed line `a -> b`.
///
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right
/// - `Collinear` if `c` lies on the segment `ab`, or within `eps` of the
///   infinite line through `a` and `b`
///
/// `eps` is a distance, so the result does not depend on how long `ab` is.
/// A degenerate line (`a == b`) reports `Collinear`.
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let ab = b - a;
    let cross = ab.cross(c - a);

    if point_on_segment(c, Segment2::new(a, b), eps) || cross.abs() <= eps * ab.magnitude() {
        Orientation::Collinear
    } else if cross > F::zero() {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Checks if a point lies on a line segment within tolerance.
///
/// Returns `true` if the point `p` is within distance `eps` of the segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_to_point(p) <= eps
}

/// Tests whether two segments touch or cross.
///
/// Segments whose bounding boxes do not overlap are rejected first. An
/// endpoint lying on the other segment (within `eps`) counts as an
/// intersection, as do collinear overlaps.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    if !s1.bounding_box().inflated(eps).intersects(s2.bounding_box()) {
        return false;
    }

    if point_on_segment(s2.start, s1, eps)
        || point_on_segment(s2.end, s1, eps)
        || point_on_segment(s1.start, s2, eps)
        || point_on_segment(s1.end, s2, eps)
    {
        return true;
    }

    let o1 = orientation(s1.start, s1.end, s2.start, eps);
    let o2 = orientation(s1.start, s1.end, s2.end, eps);
    let o3 = orientation(s2.start, s2.end, s1.start, eps);
    let o4 = orientation(s2.start, s2.end, s1.end, eps);

    o1 != o2 && o3 != o4
}

/// Tests whether two segments properly cross.
///
/// Each segment must have its endpoints strictly on opposite sides of the
/// other; touching, grazing and collinear contact do not count.
pub fn segments_cross<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    if !s1.bounding_box().intersects(s2.bounding_box()) {
        return false;
    }

    let o1 = orientation(s1.start, s1.end, s2.start, eps);
    let o2 = orientation(s1.start, s1.end, s2.end, eps);
    if o1 == Orientation::Collinear || o1.flipped() != o2 {
        return false;
    }

    let o3 = orientation(s2.start, s2.end, s1.start, eps);
    let o4 = orientation(s2.start, s2.end, s1.end, eps);
    o3 != Orientation::Collinear && o3.flipped() == o4
}

/// Intersection of the infinite lines through two segments.
///
/// Returns the point on `s1`'s line, or `None` when the lines are parallel
/// (or either segment is degenerate). Call [`segments_intersect`] first if
/// the point must also lie on both segments.
pub fn intersection_point<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> Option<Point2<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);

    if cross.abs() <= F::epsilon() * d1.magnitude() * d2.magnitude() {
        return None;
    }

    let t = (s2.start - s1.start).cross(d2) / cross;
    Some(s1.start + d1 * t)
}
