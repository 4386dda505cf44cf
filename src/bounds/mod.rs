//! Rectangular bounds: boxes and the on-screen viewport.

mod aabb;
mod viewport;

pub use aabb::Aabb2;
pub use viewport::Viewport;
