//! Turns resolved rays into the visibility polygon.

use super::rays::Ray;
use super::Sweep;
use crate::polygon::Polygon;
use crate::primitives::{angle, Point2, Segment2};
use crate::tolerance::{cast, orientation, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// The polygon and the sight lines it was built from.
#[derive(Debug, Clone)]
pub struct Assembly<F> {
    pub polygon: Polygon<F>,
    /// One segment per surviving ray, in angular order.
    pub sight_lines: Vec<Segment2<F>>,
}

/// Builds the polygon from the endpoints of the rays that are not occluded.
///
/// Endpoints are pulled back to `max_range` when given, sorted
/// counter-clockwise around `origin` (ties nearest first) and collapsed
/// so that each direction keeps only its nearest point. Two endpoints share
/// a direction when they are collinear with `origin` within `sweep.eps` and
/// less than half the offset angle apart, so an offset ray is never folded
/// into its own corner however close that corner is. Fewer than three
/// remaining vertices produce an empty polygon.
pub fn assemble_polygon<F: Float>(
    rays: &[Ray<F>],
    origin: Point2<F>,
    sweep: &Sweep<F>,
    max_range: Option<F>,
) -> Assembly<F> {
    let eps = sweep.eps;
    let spread = (sweep.offset_angle.to_radians() / cast(2.0)).sin();
    let mut ends: Vec<(F, F, Point2<F>)> = rays
        .iter()
        .filter(|r| !r.occluded)
        .map(|r| {
            let end = clamp_to_range(origin, r.target, max_range);
            (angle(origin, end), origin.distance(end), end)
        })
        .collect();
    ends.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });

    let sight_lines = ends
        .iter()
        .map(|&(_, _, end)| Segment2::new(origin, end))
        .collect();

    let mut vertices: Vec<(F, Point2<F>)> = Vec::with_capacity(ends.len());
    for (_, dist, end) in ends {
        match vertices.last_mut() {
            Some(last) if same_direction(origin, last.1, end, eps, spread) => {
                if dist < last.0 {
                    *last = (dist, end);
                }
            }
            _ => vertices.push((dist, end)),
        }
    }

    // The first and last groups can share the direction across 0 degrees
    if vertices.len() > 1 {
        let (first, last) = (vertices[0], vertices[vertices.len() - 1]);
        if same_direction(origin, first.1, last.1, eps, spread) {
            if last.0 < first.0 {
                vertices[0] = last;
            }
            vertices.pop();
        }
    }

    let polygon = if vertices.len() < 3 {
        Polygon::empty()
    } else {
        Polygon::new(vertices.into_iter().map(|(_, p)| p).collect())
    };

    Assembly {
        polygon,
        sight_lines,
    }
}

/// Pulls `p` towards `origin` along their line so it is at most `range`
/// away.
fn clamp_to_range<F: Float>(origin: Point2<F>, p: Point2<F>, range: Option<F>) -> Point2<F> {
    match range {
        Some(range) => {
            let dist = origin.distance(p);
            if dist > range {
                origin + (p - origin) * (range / dist)
            } else {
                p
            }
        }
        None => p,
    }
}

/// Whether `p` and `q` lie on the same half-line out of `origin`.
///
/// `spread` is the sine of the widest angle still treated as one direction.
#[inline]
fn same_direction<F: Float>(origin: Point2<F>, p: Point2<F>, q: Point2<F>, eps: F, spread: F) -> bool {
    let (u, v) = (p - origin, q - origin);
    orientation(origin, p, q, eps) == Orientation::Collinear
        && u.dot(v) > F::zero()
        && u.cross(v).abs() <= spread * u.magnitude() * v.magnitude()
}
