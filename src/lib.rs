//! sightline - 2D visibility polygons
//!
//! Computes the region a point observer (a light, a guard, the player) can
//! see inside a rectangular arena cluttered with polygonal obstacles. Rays
//! are cast at obstacle corners and just past them, clipped at the first
//! wall they hit, and their endpoints sorted into a star-shaped polygon.
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::visibility::{Arena, Observer};
//! use sightline::Point2;
//!
//! let arena = Arena::new(800.0_f64, 600.0).unwrap();
//! let crates = vec![
//!     Polygon::rectangle(Point2::new(300.0, 250.0), 40.0, 40.0),
//!     Polygon::rectangle(Point2::new(500.0, 100.0), 60.0, 20.0),
//! ];
//! let mut light = Observer::new(arena, &crates, Point2::new(100.0, 300.0)).unwrap();
//! assert!(light.polygon().len() > 4);
//!
//! light.move_to(Point2::new(700.0, 500.0)).unwrap();
//! assert!(light.polygon().area() < 800.0 * 600.0);
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod tolerance;
pub mod visibility;

pub use bounds::{Aabb2, Viewport};
pub use config::VisibilityConfig;
pub use error::SightError;
pub use polygon::{Outline, Polygon};
pub use primitives::{angle, move_along, Heading, Point2, Segment2, Vec2};
pub use tolerance::{orientation, segments_intersect, Orientation};
pub use visibility::{compute_visibility, update_all, Arena, FrameStats, Observer};
