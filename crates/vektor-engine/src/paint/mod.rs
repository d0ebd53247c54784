//! Paint attributes carried by shapes.
//!
//! Scope:
//! - straight-alpha color
//! - stroke (color + width) for lines and curves
//! - fill (color) for closed shapes

pub mod color;
mod stroke;

pub use color::Color;
pub use stroke::{Fill, Stroke};
