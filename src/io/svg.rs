//! SVG path export.
//!
//! Writes path data (the `d` attribute) for visibility polygons and for
//! debug overlays of the sight lines they were built from.
//!
//! # Example
//!
//! ```
//! use sightline::io::{polygon_to_svg_path, rays_to_svg_path};
//! use sightline::visibility::{Arena, Observer};
//! use sightline::polygon::Polygon;
//! use sightline::Point2;
//!
//! let arena = Arena::new(10.0_f64, 10.0).unwrap();
//! let observer = Observer::new(arena, &Vec::<Polygon<f64>>::new(), Point2::new(5.0, 5.0)).unwrap();
//!
//! assert_eq!(
//!     polygon_to_svg_path(observer.polygon()),
//!     "M 10 10 L 0 10 L 0 0 L 10 0 Z"
//! );
//! assert_eq!(rays_to_svg_path(observer.rays()).matches('M').count(), 4);
//! ```

use crate::polygon::Polygon;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::fmt::{self, Write};

/// Converts a polyline to an SVG path string.
///
/// Returns an empty string for no points.
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    let _ = write!(result, "M {} {}", points[0].x, points[0].y);
    for p in &points[1..] {
        let _ = write!(result, " L {} {}", p.x, p.y);
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
///
/// An empty polygon gives an empty string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(&polygon.vertices, true)
}

/// Converts segments, such as an observer's sight lines, into one SVG path
/// with a separate subpath per segment.
pub fn rays_to_svg_path<F: Float + fmt::Display>(segments: &[Segment2<F>]) -> String {
    let mut result = String::new();
    for seg in segments {
        if !result.is_empty() {
            result.push(' ');
        }
        let _ = write!(
            result,
            "M {} {} L {} {}",
            seg.start.x, seg.start.y, seg.end.x, seg.end.y
        );
    }
    result
}
