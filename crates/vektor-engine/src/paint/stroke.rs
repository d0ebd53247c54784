use super::Color;

/// Outline paint: color plus stroke width in authored pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Interior paint of a closed shape.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}
