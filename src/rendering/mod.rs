//! Logo rasterizer
//!
//! `geometry` computes the parametric shapes, `paint` lowers them to an ordered
//! command list, and `raster` executes that list on a tiny-skia canvas.

pub mod geometry;
pub mod paint;

#[cfg(feature = "raster")]
pub mod raster;

pub use geometry::{LogoGeometry, Point};
pub use paint::{PaintCommand, Rgba};

#[cfg(feature = "raster")]
pub use raster::render;
