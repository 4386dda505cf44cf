//! Shortens rays at the first wall they hit.
//!
//! Walls are visited in [`WallSet::nearest_first`] order. A ray that
//! properly meets a wall is marked occluded and replaced by a clipped copy
//! ending at the hit point; the copy is then tested against the remaining
//! walls. Since a ray only ever gets shorter, each surviving ray ends at
//! its nearest hit whatever order the walls are visited in.

use super::rays::{Ray, RayId};
use super::walls::{WallSet, WallView};
use crate::tolerance::{intersection_point, segments_intersect};
use num_traits::Float;

/// Clips every ray in `rays` against the walls in `order`.
///
/// Returns the number of clipped rays appended. Rays are never removed;
/// occluded ones stay in place with their flag set.
pub fn resolve_occlusion<F: Float>(
    rays: &mut Vec<Ray<F>>,
    walls: &WallSet<F>,
    order: &[WallView<F>],
    eps: F,
) -> usize {
    let initial = rays.len();

    for view in order {
        // Edge-on walls and walls through the observer block nothing
        let span = match view.span {
            Some(span) if view.distance > eps => span,
            _ => continue,
        };
        let wall = walls.wall(view.id).segment;

        let pending = rays.len();
        for i in 0..pending {
            let ray = rays[i];
            if ray.occluded || ray.allows(view.id) || !span.contains(ray.target) {
                continue;
            }
            if !segments_intersect(ray.segment(), wall, eps) {
                continue;
            }
            // Parallel contact is not a hit
            let hit = match intersection_point(ray.segment(), wall) {
                Some(hit) => hit,
                None => continue,
            };
            // Clipping may only shorten; a touch where the ray already
            // ends is not a hit
            let ahead = (hit - ray.origin).dot(ray.target - ray.origin) > F::zero();
            if !ahead || ray.origin.distance(hit) >= ray.length() - eps {
                continue;
            }

            rays[i].occluded = true;
            rays.push(ray.clipped(RayId(i), hit, view.id));
        }
    }

    rays.len() - initial
}
