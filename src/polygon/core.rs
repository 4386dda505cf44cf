//! Core polygon types and basic operations.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Anything that exposes an ordered, implicitly closed vertex list.
///
/// Obstacles are owned by the caller; the visibility pipeline only reads
/// their outlines through this trait while building walls.
pub trait Outline<F> {
    /// The vertices in order; the last one connects back to the first.
    fn vertices(&self) -> &[Point2<F>];
}

impl<F> Outline<F> for [Point2<F>] {
    fn vertices(&self) -> &[Point2<F>] {
        self
    }
}

impl<F> Outline<F> for Vec<Point2<F>> {
    fn vertices(&self) -> &[Point2<F>] {
        self
    }
}

impl<F> Outline<F> for Polygon<F> {
    fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }
}

/// A simple polygon represented as a sequence of vertices.
///
/// Obstacles are expected in counter-clockwise order. The polygon is
/// implicitly closed (the last vertex connects to the first).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Axis-aligned rectangle with its lower-left corner at `min`, listed
    /// counter-clockwise.
    pub fn rectangle(min: Point2<F>, width: F, height: F) -> Self {
        Self::new(vec![
            min,
            Point2::new(min.x + width, min.y),
            Point2::new(min.x + width, min.y + height),
            Point2::new(min.x, min.y + height),
        ])
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// The closed sequence of edges, including the one from the last vertex
    /// back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        polygon_edges(&self.vertices)
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }
}

impl<F: Float> Default for Polygon<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Edges of the closed polygon through `vertices`, wrapping around.
pub fn polygon_edges<F: Float>(vertices: &[Point2<F>]) -> impl Iterator<Item = Segment2<F>> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment2::new(vertices[i], vertices[(i + 1) % n]))
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
