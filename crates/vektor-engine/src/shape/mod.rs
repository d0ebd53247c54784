//! Shape value types.
//!
//! Shapes hold authored canvas coordinates plus paint. They are closed over
//! four kinds; tessellation dispatches on the [`Shape`] tag.
//!
//! All constructors validate their input and return [`ShapeError`] for NaN or
//! infinite coordinates, negative stroke widths, negative rect sizes, and
//! color channels outside `[0, 1]`.

mod curve;
mod error;
mod line;
mod rect;

pub use curve::{CubicCurve, QuadraticCurve};
pub use error::ShapeError;
pub use line::Line;
pub use rect::Rect;

use crate::coords::Vec2;
use crate::paint::{Color, Stroke};

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rect(Rect),
    QuadraticCurve(QuadraticCurve),
    CubicCurve(CubicCurve),
}

impl Shape {
    /// Short lowercase name of the shape kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rect(_) => "rect",
            Shape::QuadraticCurve(_) => "quadratic",
            Shape::CubicCurve(_) => "cubic",
        }
    }
}

impl From<Line> for Shape {
    fn from(v: Line) -> Self {
        Shape::Line(v)
    }
}

impl From<Rect> for Shape {
    fn from(v: Rect) -> Self {
        Shape::Rect(v)
    }
}

impl From<QuadraticCurve> for Shape {
    fn from(v: QuadraticCurve) -> Self {
        Shape::QuadraticCurve(v)
    }
}

impl From<CubicCurve> for Shape {
    fn from(v: CubicCurve) -> Self {
        Shape::CubicCurve(v)
    }
}

fn check_point(what: &'static str, p: Vec2) -> Result<(), ShapeError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite { what })
    }
}

fn check_color(color: Color) -> Result<(), ShapeError> {
    match color.out_of_range_channel() {
        None => Ok(()),
        Some((channel, value)) => Err(ShapeError::ColorOutOfRange { channel, value }),
    }
}

fn check_stroke(stroke: Stroke) -> Result<(), ShapeError> {
    if !stroke.width.is_finite() {
        return Err(ShapeError::NonFinite { what: "stroke width" });
    }
    if stroke.width < 0.0 {
        return Err(ShapeError::NegativeStrokeWidth(stroke.width));
    }
    check_color(stroke.color)
}
