//! Export of visibility results for rendering and debugging.

mod svg;

pub use svg::{polygon_to_svg_path, polyline_to_svg_path, rays_to_svg_path};
