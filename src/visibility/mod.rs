//! 2D visibility polygons by corner ray casting.
//!
//! An [`Observer`] owns the walls and corners derived from an arena and a
//! set of obstacles. Each recompute runs four stages:
//!
//! 1. [`walls`] orders the walls nearest-first for the current origin.
//! 2. [`rays`] casts rays at every corner that is not certainly hidden,
//!    plus offset rays just past silhouette corners.
//! 3. [`occlusion`] clips each ray at the first wall it hits.
//! 4. [`assemble`] sorts the surviving endpoints into a polygon.
//!
//! The result is star-shaped around the origin and never extends past a
//! wall. Nothing is carried over between recomputes.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::visibility::{Arena, Observer};
//! use sightline::Point2;
//!
//! let arena = Arena::new(100.0_f64, 100.0).unwrap();
//! let pillar = Polygon::rectangle(Point2::new(70.0, 45.0), 10.0, 10.0);
//! let observer = Observer::new(arena, &[pillar], Point2::new(50.0, 50.0)).unwrap();
//!
//! let visible = observer.polygon();
//! assert_eq!(visible.len(), 8);
//! assert!(visible.vertices.contains(&Point2::new(70.0, 55.0)));
//! assert!(!visible.vertices.contains(&Point2::new(80.0, 55.0)));
//! ```

pub mod assemble;
pub mod occlusion;
pub mod rays;
pub mod walls;

pub use assemble::{assemble_polygon, Assembly};
pub use occlusion::resolve_occlusion;
pub use rays::{generate_rays, Ray, RayBatch, RayId, RayKind, Side};
pub use walls::{Arena, Corner, CornerId, Wall, WallId, WallKind, WallSet, WallView};

use crate::bounds::Viewport;
use crate::config::VisibilityConfig;
use crate::error::SightError;
use crate::polygon::{Outline, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::cast;
use num_traits::Float;
use std::time::{Duration, Instant};

/// Per-recompute settings in the working float type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep<F> {
    /// Distance tolerance.
    pub eps: F,
    /// Offset of the rays cast past a corner, in degrees.
    pub offset_angle: F,
    /// Length of offset rays; longer than any segment inside the arena.
    pub reach: F,
}

impl<F: Float> Sweep<F> {
    pub fn new(config: &VisibilityConfig, arena: &Arena<F>) -> Self {
        Self {
            eps: cast(config.tolerance),
            offset_angle: cast(config.offset_angle),
            reach: arena.bounds().diagonal() * cast(2.0) + F::one(),
        }
    }
}

/// Counts from the most recent recompute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Corners considered (all corners of the scene).
    pub corners: usize,
    /// Rays cast at corners and past them.
    pub generated: usize,
    /// Corners skipped as certainly hidden.
    pub culled: usize,
    /// Clipped rays created by occlusion.
    pub clipped: usize,
    /// Vertices in the resulting polygon.
    pub vertices: usize,
    pub elapsed: Duration,
}

/// A light source or viewer and the region it currently sees.
#[derive(Debug, Clone)]
pub struct Observer<F> {
    walls: WallSet<F>,
    config: VisibilityConfig,
    origin: Point2<F>,
    polygon: Polygon<F>,
    sight_lines: Vec<Segment2<F>>,
    stats: FrameStats,
}

impl<F: Float> Observer<F> {
    /// Creates an observer at `origin` with the default configuration and
    /// computes its first polygon.
    pub fn new<O: Outline<F>>(arena: Arena<F>, obstacles: &[O], origin: Point2<F>) -> Result<Self, SightError> {
        Self::with_config(arena, obstacles, origin, VisibilityConfig::default())
    }

    /// Like [`Observer::new`] with explicit settings.
    pub fn with_config<O: Outline<F>>(
        arena: Arena<F>,
        obstacles: &[O],
        origin: Point2<F>,
        config: VisibilityConfig,
    ) -> Result<Self, SightError> {
        config.validate()?;
        if !origin.is_finite() {
            return Err(SightError::NonFinite("observer origin"));
        }
        let walls = WallSet::build(arena, obstacles)?;

        let mut observer = Self {
            walls,
            config,
            origin,
            polygon: Polygon::empty(),
            sight_lines: Vec::new(),
            stats: FrameStats::default(),
        };
        observer.update();
        Ok(observer)
    }

    /// Replaces the obstacles, rebuilds walls and corners, and recomputes.
    pub fn set_obstacles<O: Outline<F>>(&mut self, obstacles: &[O]) -> Result<(), SightError> {
        self.walls = WallSet::build(*self.walls.arena(), obstacles)?;
        self.update();
        Ok(())
    }

    /// Moves the observer and recomputes.
    pub fn move_to(&mut self, origin: Point2<F>) -> Result<(), SightError> {
        if !origin.is_finite() {
            return Err(SightError::NonFinite("observer origin"));
        }
        self.origin = origin;
        self.update();
        Ok(())
    }

    /// Moves the observer to a screen position, such as the cursor.
    pub fn move_to_screen(&mut self, screen: Point2<F>, viewport: &Viewport<F>) -> Result<(), SightError> {
        self.move_to(viewport.to_world(screen))
    }

    /// Recomputes the polygon at the current origin.
    pub fn update(&mut self) {
        let start = Instant::now();
        let sweep = Sweep::new(&self.config, self.walls.arena());
        let origin = self.origin;

        let inside = self.walls.arena().bounds().strictly_contains(origin, sweep.eps);
        if !inside || self.walls.obstructs(origin, sweep.eps) {
            self.polygon = Polygon::empty();
            self.sight_lines.clear();
            self.stats = FrameStats {
                corners: self.walls.corners().len(),
                elapsed: start.elapsed(),
                ..FrameStats::default()
            };
            log::trace!("observer blocked or outside the arena, nothing visible");
            return;
        }

        let order = self.walls.nearest_first(origin, sweep.eps);
        let batch = generate_rays(&self.walls, &order, origin, &sweep);
        let generated = batch.rays.len();
        let mut rays = batch.rays;
        let clipped = resolve_occlusion(&mut rays, &self.walls, &order, sweep.eps);

        let max_range = self.config.max_range.map(cast);
        let assembly = assemble_polygon(&rays, origin, &sweep, max_range);

        self.polygon = assembly.polygon;
        self.sight_lines = if self.config.keep_rays {
            assembly.sight_lines
        } else {
            Vec::new()
        };
        self.stats = FrameStats {
            corners: self.walls.corners().len(),
            generated,
            culled: batch.culled,
            clipped,
            vertices: self.polygon.len(),
            elapsed: start.elapsed(),
        };

        log::trace!(
            "visibility: {} rays ({} corners culled, {} clipped) -> {} vertices in {:?}",
            generated,
            batch.culled,
            clipped,
            self.stats.vertices,
            self.stats.elapsed
        );
    }

    #[inline]
    pub fn origin(&self) -> Point2<F> {
        self.origin
    }

    /// The current visibility polygon, counter-clockwise; empty when the
    /// origin is outside the arena or inside an obstacle.
    #[inline]
    pub fn polygon(&self) -> &Polygon<F> {
        &self.polygon
    }

    /// Resolved sight lines from the origin, in angular order. Empty when
    /// `keep_rays` is off.
    #[inline]
    pub fn rays(&self) -> &[Segment2<F>] {
        &self.sight_lines
    }

    #[inline]
    pub fn walls(&self) -> &WallSet<F> {
        &self.walls
    }

    #[inline]
    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

/// Computes a single visibility polygon without keeping an observer.
pub fn compute_visibility<F: Float, O: Outline<F>>(
    arena: Arena<F>,
    obstacles: &[O],
    origin: Point2<F>,
    config: VisibilityConfig,
) -> Result<Polygon<F>, SightError> {
    let observer = Observer::with_config(arena, obstacles, origin, config.with_keep_rays(false))?;
    Ok(observer.polygon)
}

/// Recomputes every observer, in parallel when the `parallel` feature is on.
#[cfg(feature = "parallel")]
pub fn update_all<F: Float + Send + Sync>(observers: &mut [Observer<F>]) {
    use rayon::prelude::*;

    observers.par_iter_mut().for_each(Observer::update);
}

/// Recomputes every observer, in parallel when the `parallel` feature is on.
#[cfg(not(feature = "parallel"))]
pub fn update_all<F: Float>(observers: &mut [Observer<F>]) {
    observers.iter_mut().for_each(Observer::update);
}
