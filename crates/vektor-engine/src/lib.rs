//! Vektor engine crate.
//!
//! 2D vector shapes (lines, rectangles, quadratic and cubic Bézier curves)
//! are tessellated into triangle meshes, normalized from an authored pixel
//! canvas into clip space, and submitted shape by shape through a
//! [`RenderDevice`](device::RenderDevice) once per frame tick.

pub mod config;
pub mod coords;
pub mod device;
pub mod logging;
pub mod paint;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod tessellate;
pub mod time;
pub mod window;
