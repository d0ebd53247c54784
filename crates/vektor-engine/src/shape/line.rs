use crate::coords::Vec2;
use crate::paint::Stroke;

use super::{check_point, check_stroke, ShapeError};

/// Straight segment stroked with a constant width.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Vec2,
    p2: Vec2,
    stroke: Stroke,
}

impl Line {
    pub fn new(p1: Vec2, p2: Vec2, stroke: Stroke) -> Result<Self, ShapeError> {
        check_point("line start", p1)?;
        check_point("line end", p2)?;
        check_stroke(stroke)?;
        Ok(Self { p1, p2, stroke })
    }

    #[inline]
    pub fn p1(&self) -> Vec2 {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Vec2 {
        self.p2
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.p2 - self.p1).length()
    }
}
