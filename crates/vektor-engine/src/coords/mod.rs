//! Coordinate types and the authored-space → clip-space mapping.
//!
//! Shapes are authored in canvas pixels on a fixed-size canvas
//! ([`CanvasExtents`]). Before upload every mesh is rewritten into normalized
//! device coordinates (`[-1, 1]` on both axes). The mapping from clip space to
//! physical framebuffer pixels is the device viewport's job, not this module's.

mod canvas;
mod vec2;

pub use canvas::{CanvasExtents, CanvasOrigin};
pub use vec2::Vec2;
