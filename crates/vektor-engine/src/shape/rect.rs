use crate::coords::Vec2;
use crate::paint::Fill;

use super::{check_color, check_point, ShapeError};

/// Axis-aligned filled rectangle.
///
/// `origin` is the corner closest to the canvas origin; `size` extends along +X and +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    origin: Vec2,
    size: Vec2,
    fill: Fill,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, fill: Fill) -> Result<Self, ShapeError> {
        let origin = Vec2::new(x, y);
        let size = Vec2::new(width, height);
        check_point("rect origin", origin)?;
        check_point("rect size", size)?;
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize { width, height });
        }
        check_color(fill.color)?;
        Ok(Self { origin, size, fill })
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Corner opposite `origin`.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn fill(&self) -> Fill {
        self.fill
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn rejects_negative_size() {
        let err = Rect::new(0.0, 0.0, -1.0, 4.0, Fill::new(Color::GREEN)).unwrap_err();
        assert_eq!(err, ShapeError::NegativeSize { width: -1.0, height: 4.0 });
    }

    #[test]
    fn rejects_bad_fill() {
        let err = Rect::new(0.0, 0.0, 1.0, 1.0, Fill::new(Color::new(0.0, 0.0, 0.0, 1.2)))
            .unwrap_err();
        assert_eq!(err, ShapeError::ColorOutOfRange { channel: 'a', value: 1.2 });
    }

    #[test]
    fn max_corner() {
        let r = Rect::new(100.0, 150.0, 200.0, 100.0, Fill::new(Color::GREEN)).unwrap();
        assert_eq!(r.max(), Vec2::new(300.0, 250.0));
    }
}
