//! Polygons: obstacle outlines and computed visibility regions.
//!
//! # Example
//!
//! ```
//! use sightline::polygon::Polygon;
//! use sightline::Point2;
//!
//! let crate_box = Polygon::rectangle(Point2::new(10.0_f64, 10.0), 4.0, 2.0);
//! assert_eq!(crate_box.area(), 8.0);
//! assert!(crate_box.contains(Point2::new(12.0, 11.0)));
//! ```

mod core;

pub use core::{
    polygon_area, polygon_contains, polygon_edges, polygon_signed_area, Outline, Polygon,
};
