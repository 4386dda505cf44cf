//! Walls and corners derived from the arena and the obstacle outlines.
//!
//! Built once per obstacle change, in time linear in the number of
//! vertices. Walls and corners are addressed by index ([`WallId`],
//! [`CornerId`]) into the owning [`WallSet`].

use std::collections::HashMap;

use crate::bounds::Aabb2;
use crate::error::SightError;
use crate::polygon::{polygon_contains, Outline, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{point_on_segment, AngularSpan};
use num_traits::Float;

/// Index of a wall in its [`WallSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub usize);

/// Index of a corner in its [`WallSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CornerId(pub usize);

/// The rectangular play area `[0, width] x [0, height]`.
///
/// Nothing outside it can be seen; its four edges are always walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena<F> {
    width: F,
    height: F,
}

impl<F: Float> Arena<F> {
    /// Creates an arena; both dimensions must be finite and positive.
    pub fn new(width: F, height: F) -> Result<Self, SightError> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(SightError::NonFinite("arena dimensions"));
        }
        if width <= F::zero() || height <= F::zero() {
            return Err(SightError::InvalidArgument(
                "arena width and height must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> F {
        self.width
    }

    #[inline]
    pub fn height(&self) -> F {
        self.height
    }

    /// The arena as a box.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        Aabb2::new(Point2::origin(), Point2::new(self.width, self.height))
    }

    /// The four corners, counter-clockwise from the origin.
    pub fn corners(&self) -> [Point2<F>; 4] {
        let zero = F::zero();
        [
            Point2::new(zero, zero),
            Point2::new(self.width, zero),
            Point2::new(self.width, self.height),
            Point2::new(zero, self.height),
        ]
    }
}

/// What a wall belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallKind {
    /// One of the four arena edges.
    Border,
    /// An edge of the obstacle at this position in the supplied list.
    Obstacle(usize),
}

/// A directed opaque segment.
///
/// `segment.start` is the opening end and `segment.end` the closing end,
/// following the counter-clockwise winding of the outline it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall<F> {
    pub segment: Segment2<F>,
    pub kind: WallKind,
}

impl<F: Float> Wall<F> {
    /// Returns `true` for arena edges.
    #[inline]
    pub fn is_border(&self) -> bool {
        self.kind == WallKind::Border
    }

    /// Returns `true` if `p` coincides with either end of the wall.
    #[inline]
    pub fn has_endpoint(&self, p: Point2<F>, eps: F) -> bool {
        self.segment.start.distance(p) <= eps || self.segment.end.distance(p) <= eps
    }
}

/// A distinct wall endpoint and the two walls meeting there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner<F> {
    pub position: Point2<F>,
    /// The wall that starts at this corner.
    pub opens: WallId,
    /// The wall that ends at this corner.
    pub ends: WallId,
    /// Arena corners always get a single direct ray and are never culled.
    pub border: bool,
}

/// A wall as seen from one observer position, for a single recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallView<F> {
    pub id: WallId,
    /// Distance from the observer to the nearest point of the wall.
    pub distance: F,
    /// Directions covered by the wall; `None` when it is seen edge-on.
    pub span: Option<AngularSpan<F>>,
}

/// Every wall and corner of one scene.
#[derive(Debug, Clone)]
pub struct WallSet<F> {
    arena: Arena<F>,
    walls: Vec<Wall<F>>,
    corners: Vec<Corner<F>>,
    outlines: Vec<Polygon<F>>,
}

/// Number of border walls; they always occupy the first slots.
const BORDER_WALLS: usize = 4;

impl<F: Float> WallSet<F> {
    /// Builds walls and corners for `arena` and `obstacles`.
    ///
    /// Each obstacle needs at least three distinct vertices. Outlines given
    /// clockwise are reversed so every obstacle winds counter-clockwise;
    /// repeated consecutive vertices are dropped.
    pub fn build<O: Outline<F>>(arena: Arena<F>, obstacles: &[O]) -> Result<Self, SightError> {
        let mut outlines = Vec::with_capacity(obstacles.len());
        for (index, obstacle) in obstacles.iter().enumerate() {
            outlines.push(normalized_outline(index, obstacle.vertices())?);
        }

        let vertex_count: usize = outlines.iter().map(Polygon::len).sum();
        let mut walls = Vec::with_capacity(BORDER_WALLS + vertex_count);

        let rect = arena.corners();
        for i in 0..BORDER_WALLS {
            walls.push(Wall {
                segment: Segment2::new(rect[i], rect[(i + 1) % BORDER_WALLS]),
                kind: WallKind::Border,
            });
        }
        for (index, outline) in outlines.iter().enumerate() {
            walls.extend(outline.edges().map(|segment| Wall {
                segment,
                kind: WallKind::Obstacle(index),
            }));
        }

        let (corners, shared) = index_corners(&walls);
        if shared > 0 {
            log::debug!("{} obstacle vertices coincide with another wall endpoint", shared);
        }
        log::debug!(
            "built {} walls ({} border) and {} corners from {} obstacles",
            walls.len(),
            BORDER_WALLS,
            corners.len(),
            outlines.len()
        );

        Ok(Self {
            arena,
            walls,
            corners,
            outlines,
        })
    }

    #[inline]
    pub fn arena(&self) -> &Arena<F> {
        &self.arena
    }

    /// All walls, border walls first.
    #[inline]
    pub fn walls(&self) -> &[Wall<F>] {
        &self.walls
    }

    /// The four arena edges.
    #[inline]
    pub fn border_walls(&self) -> &[Wall<F>] {
        &self.walls[..BORDER_WALLS]
    }

    /// Walls belonging to obstacles.
    #[inline]
    pub fn obstacle_walls(&self) -> &[Wall<F>] {
        &self.walls[BORDER_WALLS..]
    }

    /// Distinct corners, in first-seen order.
    #[inline]
    pub fn corners(&self) -> &[Corner<F>] {
        &self.corners
    }

    /// Counter-clockwise copies of the obstacle outlines.
    #[inline]
    pub fn outlines(&self) -> &[Polygon<F>] {
        &self.outlines
    }

    #[inline]
    pub fn wall(&self, id: WallId) -> &Wall<F> {
        &self.walls[id.0]
    }

    #[inline]
    pub fn corner(&self, id: CornerId) -> &Corner<F> {
        &self.corners[id.0]
    }

    /// Returns `true` if `p` is inside an obstacle or on one of its walls.
    pub fn obstructs(&self, p: Point2<F>, eps: F) -> bool {
        self.outlines.iter().any(|o| polygon_contains(&o.vertices, p))
            || self
                .obstacle_walls()
                .iter()
                .any(|w| point_on_segment(p, w.segment, eps))
    }

    /// Walls in the order occlusion is resolved: obstacle walls nearest
    /// first, then the border walls, also nearest first.
    ///
    /// Border walls go last so they never pre-empt a nearer obstacle.
    pub fn nearest_first(&self, origin: Point2<F>, eps: F) -> Vec<WallView<F>> {
        let view = |(i, wall): (usize, &Wall<F>)| WallView {
            id: WallId(i),
            distance: wall.segment.distance_to_point(origin),
            span: AngularSpan::of_segment(origin, wall.segment, eps),
        };
        let by_distance = |a: &WallView<F>, b: &WallView<F>| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        };

        let mut obstacles: Vec<_> = self
            .walls
            .iter()
            .enumerate()
            .skip(BORDER_WALLS)
            .map(view)
            .collect();
        obstacles.sort_by(by_distance);

        let mut border: Vec<_> = self
            .walls
            .iter()
            .enumerate()
            .take(BORDER_WALLS)
            .map(view)
            .collect();
        border.sort_by(by_distance);

        obstacles.extend(border);
        obstacles
    }
}

/// Validates one outline and returns it wound counter-clockwise.
fn normalized_outline<F: Float>(index: usize, vertices: &[Point2<F>]) -> Result<Polygon<F>, SightError> {
    if vertices.iter().any(|v| !v.is_finite()) {
        return Err(SightError::NonFinite("obstacle vertex"));
    }

    let mut cleaned: Vec<Point2<F>> = Vec::with_capacity(vertices.len());
    for &v in vertices {
        if cleaned.last() != Some(&v) {
            cleaned.push(v);
        }
    }
    while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
        cleaned.pop();
    }

    if cleaned.len() < 3 {
        return Err(SightError::DegenerateObstacle {
            index,
            vertices: cleaned.len(),
        });
    }
    let mut outline = Polygon::new(cleaned);
    outline.ensure_ccw();
    Ok(outline)
}

/// Hashable identity of a vertex position; `-0.0` and `0.0` collapse.
type PositionKey = ((u64, i16, i8), (u64, i16, i8));

fn position_key<F: Float>(p: Point2<F>) -> PositionKey {
    ((p.x + F::zero()).integer_decode(), (p.y + F::zero()).integer_decode())
}

/// Deduplicates wall endpoints into corners and records which wall opens
/// and which ends at each. Returns the corners and how many endpoints were
/// shared beyond the expected pair.
fn index_corners<F: Float>(walls: &[Wall<F>]) -> (Vec<Corner<F>>, usize) {
    let mut corners: Vec<Corner<F>> = Vec::with_capacity(walls.len());
    let mut by_position: HashMap<PositionKey, CornerId> = HashMap::with_capacity(walls.len());
    let mut opened: Vec<bool> = Vec::with_capacity(walls.len());
    let mut ended: Vec<bool> = Vec::with_capacity(walls.len());
    let mut shared = 0;

    for (i, wall) in walls.iter().enumerate() {
        let id = WallId(i);
        for (position, opening) in [(wall.segment.start, true), (wall.segment.end, false)] {
            let corner = *by_position.entry(position_key(position)).or_insert_with(|| {
                corners.push(Corner {
                    position,
                    opens: id,
                    ends: id,
                    border: wall.is_border(),
                });
                opened.push(false);
                ended.push(false);
                CornerId(corners.len() - 1)
            });

            let slot = if opening { &mut opened[corner.0] } else { &mut ended[corner.0] };
            if *slot {
                shared += 1;
                continue;
            }
            *slot = true;
            if opening {
                corners[corner.0].opens = id;
            } else {
                corners[corner.0].ends = id;
            }
        }
    }

    (corners, shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena<f64> {
        Arena::new(100.0, 80.0).unwrap()
    }

    fn square(x: f64, y: f64, size: f64) -> Vec<Point2<f64>> {
        Polygon::rectangle(Point2::new(x, y), size, size).vertices
    }

    #[test]
    fn test_arena_rejects_bad_dimensions() {
        assert!(matches!(
            Arena::new(0.0, 10.0),
            Err(SightError::InvalidArgument(_))
        ));
        assert!(matches!(
            Arena::new(10.0, f64::NAN),
            Err(SightError::NonFinite(_))
        ));
    }

    #[test]
    fn test_border_walls_come_first() {
        let set = WallSet::<f64>::build(arena(), &[square(10.0, 10.0, 5.0)]).unwrap();

        assert_eq!(set.walls().len(), 8);
        assert!(set.border_walls().iter().all(Wall::is_border));
        assert!(set
            .obstacle_walls()
            .iter()
            .all(|w| w.kind == WallKind::Obstacle(0)));
        assert_eq!(set.corners().len(), 8);
        assert_eq!(set.corners().iter().filter(|c| c.border).count(), 4);
    }

    #[test]
    fn test_obstacle_walls_wrap_around() {
        let verts = square(10.0, 10.0, 5.0);
        let set = WallSet::build(arena(), &[verts.clone()]).unwrap();
        let walls = set.obstacle_walls();

        assert_eq!(walls[0].segment, Segment2::new(verts[0], verts[1]));
        assert_eq!(walls[3].segment, Segment2::new(verts[3], verts[0]));
    }

    #[test]
    fn test_every_corner_opens_and_ends_a_wall() {
        let set = WallSet::build(arena(), &[square(10.0, 10.0, 5.0), square(50.0, 20.0, 8.0)]).unwrap();

        for corner in set.corners() {
            let opens = set.wall(corner.opens);
            let ends = set.wall(corner.ends);
            assert_eq!(opens.segment.start, corner.position);
            assert_eq!(ends.segment.end, corner.position);
            assert_ne!(corner.opens, corner.ends);
        }
    }

    #[test]
    fn test_clockwise_outline_is_reversed() {
        let mut verts = square(10.0, 10.0, 5.0);
        verts.reverse();
        let set = WallSet::build(arena(), &[verts]).unwrap();

        assert!(set.outlines()[0].signed_area() > 0.0);
    }

    #[test]
    fn test_degenerate_obstacle_rejected() {
        let line = vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
        let err = WallSet::build(arena(), &[square(10.0, 10.0, 5.0), line]).unwrap_err();
        assert_eq!(
            err,
            SightError::DegenerateObstacle {
                index: 1,
                vertices: 2
            }
        );

        // Repeated vertices do not count
        let pinched = vec![
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        assert!(matches!(
            WallSet::build(arena(), &[pinched]),
            Err(SightError::DegenerateObstacle { vertices: 2, .. })
        ));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let bad = vec![
            Point2::new(1.0, 1.0),
            Point2::new(f64::NAN, 2.0),
            Point2::new(2.0, 1.0),
        ];
        assert!(matches!(
            WallSet::build(arena(), &[bad]),
            Err(SightError::NonFinite(_))
        ));
    }

    #[test]
    fn test_obstructs() {
        let set = WallSet::build(arena(), &[square(10.0, 10.0, 5.0)]).unwrap();
        assert!(set.obstructs(Point2::new(12.0, 12.0), 1e-9));
        assert!(set.obstructs(Point2::new(10.0, 12.0), 1e-9));
        assert!(!set.obstructs(Point2::new(30.0, 30.0), 1e-9));
    }

    #[test]
    fn test_nearest_first_puts_border_last() {
        let set = WallSet::build(arena(), &[square(60.0, 40.0, 5.0), square(20.0, 40.0, 5.0)]).unwrap();
        let order = set.nearest_first(Point2::new(15.0, 42.0), 1e-9);

        assert_eq!(order.len(), 12);
        assert!(order[..8].iter().all(|v| !set.wall(v.id).is_border()));
        assert!(order[8..].iter().all(|v| set.wall(v.id).is_border()));
        assert!(order[..8].windows(2).all(|w| w[0].distance <= w[1].distance));
        assert_eq!(set.wall(order[0].id).kind, WallKind::Obstacle(1));
        // Border edge nearest to (15, 42) is the left one
        assert_eq!(set.wall(order[8].id).segment.start, Point2::new(0.0, 80.0));
    }
}
