//! Rays cast from the observer towards corners.
//!
//! Every visible corner gets a direct ray. Obstacle corners that form a
//! silhouette also get offset rays, rotated a small angle past the corner
//! on each side that is not blocked by the corner's own walls, so that the
//! region behind the corner is swept.

use super::walls::{CornerId, WallId, WallSet, WallView};
use super::Sweep;
use crate::primitives::{angle, move_along, Heading, Point2, Segment2};
use crate::tolerance::{orientation, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// Index of a ray in the list built for one recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RayId(pub usize);

/// Which side of its corner an offset ray was rotated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Clockwise,
    CounterClockwise,
}

/// How a ray came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayKind {
    /// Straight at a corner.
    Direct { corner: CornerId },
    /// Just past a corner, long enough to leave the arena.
    Offset { corner: CornerId, side: Side },
    /// A shortened copy of `parent`, ending where it hits `wall`.
    Clipped { parent: RayId, wall: WallId },
}

/// A segment from the observer towards `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<F> {
    pub origin: Point2<F>,
    pub target: Point2<F>,
    pub kind: RayKind,
    /// Walls this ray may touch without being blocked.
    pub allowed: [Option<WallId>; 2],
    /// Set once a nearer hit has replaced this ray.
    pub occluded: bool,
}

impl<F: Float> Ray<F> {
    fn new(origin: Point2<F>, target: Point2<F>, kind: RayKind, allowed: [Option<WallId>; 2]) -> Self {
        Self {
            origin,
            target,
            kind,
            allowed,
            occluded: false,
        }
    }

    /// The ray cut short at `hit`, where it meets `wall`.
    pub fn clipped(&self, id: RayId, hit: Point2<F>, wall: WallId) -> Self {
        Self::new(
            self.origin,
            hit,
            RayKind::Clipped { parent: id, wall },
            [Some(wall), None],
        )
    }

    #[inline]
    pub fn segment(&self) -> Segment2<F> {
        Segment2::new(self.origin, self.target)
    }

    #[inline]
    pub fn length(&self) -> F {
        self.origin.distance(self.target)
    }

    /// Direction in degrees, in `[0, 360)`.
    #[inline]
    pub fn angle(&self) -> F {
        angle(self.origin, self.target)
    }

    #[inline]
    pub fn allows(&self, wall: WallId) -> bool {
        self.allowed.contains(&Some(wall))
    }
}

/// Rays generated for one observer position.
#[derive(Debug, Clone, Default)]
pub struct RayBatch<F> {
    pub rays: Vec<Ray<F>>,
    /// Corners skipped because a nearer wall hides them.
    pub culled: usize,
}

/// Casts rays from `origin` at every corner in `walls`, in angular order.
///
/// `order` is the nearest-first wall list for this origin; its obstacle
/// prefix is used to skip corners that are certainly hidden. Corners closer
/// to `origin` than the tolerance are ignored.
pub fn generate_rays<F: Float>(
    walls: &WallSet<F>,
    order: &[WallView<F>],
    origin: Point2<F>,
    sweep: &Sweep<F>,
) -> RayBatch<F> {
    let eps = sweep.eps;
    let blockers: Vec<&WallView<F>> = order
        .iter()
        .filter(|view| !walls.wall(view.id).is_border())
        .collect();

    let mut targets: Vec<(F, F, CornerId)> = walls
        .corners()
        .iter()
        .enumerate()
        .map(|(i, corner)| {
            (
                angle(origin, corner.position),
                origin.distance(corner.position),
                CornerId(i),
            )
        })
        .filter(|&(_, dist, _)| dist > eps)
        .collect();
    targets.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
    });

    let mut batch = RayBatch {
        rays: Vec::with_capacity(targets.len() * 3),
        culled: 0,
    };

    for (theta, dist, id) in targets {
        let corner = walls.corner(id);
        let allowed = [Some(corner.opens), Some(corner.ends)];
        let direct = Ray::new(origin, corner.position, RayKind::Direct { corner: id }, allowed);

        if corner.border {
            batch.rays.push(direct);
            continue;
        }
        if is_shadowed(walls, &blockers, origin, corner.position, dist, eps) {
            batch.culled += 1;
            continue;
        }

        let before = walls.wall(corner.ends).segment.start;
        let after = walls.wall(corner.opens).segment.end;
        let sides = [
            orientation(origin, corner.position, before, eps),
            orientation(origin, corner.position, after, eps),
        ];
        let offset = |side: Side, degrees: F| {
            let target = move_along(origin, sweep.reach, Heading::Angle(degrees));
            Ray::new(origin, target, RayKind::Offset { corner: id, side }, allowed)
        };

        if !sides.contains(&Orientation::Clockwise) {
            batch
                .rays
                .push(offset(Side::Clockwise, theta - sweep.offset_angle));
        }
        batch.rays.push(direct);
        if !sides.contains(&Orientation::CounterClockwise) {
            batch
                .rays
                .push(offset(Side::CounterClockwise, theta + sweep.offset_angle));
        }
    }

    log::trace!(
        "cast {} rays, culled {} hidden corners",
        batch.rays.len(),
        batch.culled
    );
    batch
}

/// A corner is hidden when a wall not touching it, nearer than the corner,
/// covers its direction strictly and has it strictly on the far side.
fn is_shadowed<F: Float>(
    walls: &WallSet<F>,
    blockers: &[&WallView<F>],
    origin: Point2<F>,
    corner: Point2<F>,
    dist: F,
    eps: F,
) -> bool {
    for view in blockers {
        if view.distance >= dist {
            break;
        }
        let span = match view.span {
            Some(span) => span,
            None => continue,
        };
        let wall = walls.wall(view.id);
        if wall.has_endpoint(corner, eps) || !span.strictly_contains(corner) {
            continue;
        }
        let (a, b) = (wall.segment.start, wall.segment.end);
        let far = orientation(a, b, corner, eps);
        let near = orientation(a, b, origin, eps);
        if far != Orientation::Collinear && near != Orientation::Collinear && far != near {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use crate::visibility::walls::Arena;
    use approx::assert_relative_eq;

    fn scene(obstacles: &[Polygon<f64>]) -> WallSet<f64> {
        WallSet::build(Arena::new(100.0, 100.0).unwrap(), obstacles).unwrap()
    }

    fn sweep() -> Sweep<f64> {
        Sweep {
            eps: 1e-7,
            offset_angle: 1e-3,
            reach: 300.0,
        }
    }

    fn cast(walls: &WallSet<f64>, origin: Point2<f64>) -> RayBatch<f64> {
        let order = walls.nearest_first(origin, 1e-7);
        generate_rays(walls, &order, origin, &sweep())
    }

    #[test]
    fn test_empty_arena_casts_one_ray_per_corner() {
        let walls = scene(&[]);
        let batch = cast(&walls, Point2::new(30.0, 20.0));

        assert_eq!(batch.rays.len(), 4);
        assert_eq!(batch.culled, 0);
        let targets: Vec<_> = batch.rays.iter().map(|r| r.target).collect();
        assert_eq!(
            targets,
            vec![
                Point2::new(100.0, 100.0),
                Point2::new(0.0, 100.0),
                Point2::new(0.0, 0.0),
                Point2::new(100.0, 0.0),
            ]
        );
        assert!(batch.rays.iter().all(|r| matches!(r.kind, RayKind::Direct { .. })));
    }

    #[test]
    fn test_silhouette_corners_get_offsets_on_free_side() {
        let walls = scene(&[Polygon::rectangle(Point2::new(70.0, 45.0), 10.0, 10.0)]);
        let origin = Point2::new(50.0, 50.0);
        let batch = cast(&walls, origin);

        // Far corners (80, 45) and (80, 55) are hidden behind the front face
        assert_eq!(batch.culled, 2);
        assert_eq!(batch.rays.len(), 4 + 4);

        let offsets: Vec<_> = batch
            .rays
            .iter()
            .filter_map(|r| match r.kind {
                RayKind::Offset { side, .. } => Some((side, r)),
                _ => None,
            })
            .collect();
        assert_eq!(offsets.len(), 2);

        for (side, ray) in offsets {
            assert_relative_eq!(ray.length(), 300.0, epsilon = 1e-9);
            match side {
                // Below (70, 45)
                Side::Clockwise => assert!(ray.target.y < 45.0),
                // Above (70, 55)
                Side::CounterClockwise => assert!(ray.target.y > 55.0),
            }
        }
    }

    #[test]
    fn test_rays_sorted_by_angle() {
        let walls = scene(&[
            Polygon::rectangle(Point2::new(10.0, 10.0), 5.0, 5.0),
            Polygon::rectangle(Point2::new(60.0, 70.0), 8.0, 3.0),
        ]);
        let batch = cast(&walls, Point2::new(40.0, 40.0));

        let angles: Vec<f64> = batch
            .rays
            .iter()
            .filter(|r| matches!(r.kind, RayKind::Direct { .. }))
            .map(Ray::angle)
            .collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_direct_rays_allow_their_corner_walls() {
        let walls = scene(&[Polygon::rectangle(Point2::new(70.0, 45.0), 10.0, 10.0)]);
        let batch = cast(&walls, Point2::new(50.0, 50.0));

        for ray in &batch.rays {
            if let RayKind::Direct { corner } = ray.kind {
                let corner = walls.corner(corner);
                assert!(ray.allows(corner.opens));
                assert!(ray.allows(corner.ends));
            }
        }
    }

    #[test]
    fn test_clipped_ray_keeps_direction() {
        let ray = Ray::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            RayKind::Direct {
                corner: CornerId(0),
            },
            [None, None],
        );
        let cut = ray.clipped(RayId(3), Point2::new(4.0, 4.0), WallId(7));

        assert_relative_eq!(cut.angle(), ray.angle());
        assert!(cut.allows(WallId(7)));
        assert_eq!(
            cut.kind,
            RayKind::Clipped {
                parent: RayId(3),
                wall: WallId(7)
            }
        );
    }
}
