use crate::coords::Vec2;
use crate::paint::Stroke;

use super::{check_point, check_stroke, ShapeError};

/// Quadratic Bézier curve `B(t) = (1-t)²·P0 + 2(1-t)t·C + t²·P1`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticCurve {
    start: Vec2,
    control: Vec2,
    end: Vec2,
    stroke: Stroke,
}

impl QuadraticCurve {
    pub fn new(start: Vec2, control: Vec2, end: Vec2, stroke: Stroke) -> Result<Self, ShapeError> {
        check_point("curve start", start)?;
        check_point("curve control point", control)?;
        check_point("curve end", end)?;
        check_stroke(stroke)?;
        Ok(Self {
            start,
            control,
            end,
            stroke,
        })
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn control(&self) -> Vec2 {
        self.control
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Evaluates the curve at `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }
}

/// Cubic Bézier curve `B(t) = (1-t)³·P0 + 3(1-t)²t·C1 + 3(1-t)t²·C2 + t³·P1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicCurve {
    start: Vec2,
    control1: Vec2,
    control2: Vec2,
    end: Vec2,
    stroke: Stroke,
}

impl CubicCurve {
    pub fn new(
        start: Vec2,
        control1: Vec2,
        control2: Vec2,
        end: Vec2,
        stroke: Stroke,
    ) -> Result<Self, ShapeError> {
        check_point("curve start", start)?;
        check_point("curve control point", control1)?;
        check_point("curve control point", control2)?;
        check_point("curve end", end)?;
        check_stroke(stroke)?;
        Ok(Self {
            start,
            control1,
            control2,
            end,
            stroke,
        })
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn control1(&self) -> Vec2 {
        self.control1
    }

    #[inline]
    pub fn control2(&self) -> Vec2 {
        self.control2
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Evaluates the curve at `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.start * (u * u * u)
            + self.control1 * (3.0 * u * u * t)
            + self.control2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    fn stroke() -> Stroke {
        Stroke::new(Color::BLUE, 2.0)
    }

    #[test]
    fn quadratic_hits_endpoints_and_midpoint() {
        let q = QuadraticCurve::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(100.0, 0.0),
            stroke(),
        )
        .unwrap();
        assert!(approx(q.point_at(0.0), q.start()));
        assert!(approx(q.point_at(1.0), q.end()));
        // 0.25*P0 + 0.5*C + 0.25*P1
        assert!(approx(q.point_at(0.5), Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn cubic_hits_endpoints_and_midpoint() {
        let c = CubicCurve::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 80.0),
            Vec2::new(80.0, 80.0),
            Vec2::new(80.0, 0.0),
            stroke(),
        )
        .unwrap();
        assert!(approx(c.point_at(0.0), c.start()));
        assert!(approx(c.point_at(1.0), c.end()));
        // 0.125*P0 + 0.375*C1 + 0.375*C2 + 0.125*P1
        assert!(approx(c.point_at(0.5), Vec2::new(40.0, 60.0)));
    }

    #[test]
    fn rejects_infinite_control_point() {
        let err = QuadraticCurve::new(
            Vec2::zero(),
            Vec2::new(f32::INFINITY, 0.0),
            Vec2::new(1.0, 1.0),
            stroke(),
        )
        .unwrap_err();
        assert_eq!(err, ShapeError::NonFinite { what: "curve control point" });
    }
}
