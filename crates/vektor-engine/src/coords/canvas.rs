use crate::config::ConfigError;

use super::Vec2;

/// Where the authored canvas puts its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum CanvasOrigin {
    /// Origin at the top-left corner, +Y down. NDC Y is flipped.
    #[default]
    TopLeft,
    /// Origin at the bottom-left corner, +Y up. Both axes map directly.
    BottomLeft,
}

/// Size of the authored canvas that shape coordinates are expressed in.
///
/// This is configuration, not per-frame state: the physical framebuffer may be
/// any size, the device viewport scales clip space to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasExtents {
    width: f32,
    height: f32,
    origin: CanvasOrigin,
}

impl CanvasExtents {
    pub const DEFAULT_WIDTH: f32 = 1920.0;
    pub const DEFAULT_HEIGHT: f32 = 1080.0;

    /// Creates extents with a top-left origin.
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            origin: CanvasOrigin::TopLeft,
        })
    }

    #[inline]
    pub fn with_origin(mut self, origin: CanvasOrigin) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn origin(&self) -> CanvasOrigin {
        self.origin
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Maps an authored position into normalized device coordinates.
    ///
    /// Per axis: `ndc = value * 2 / extent - 1`, with Y negated for
    /// [`CanvasOrigin::TopLeft`] so authored "down" is screen down.
    #[inline]
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        let x = p.x * 2.0 / self.width - 1.0;
        let y = p.y * 2.0 / self.height - 1.0;
        match self.origin {
            CanvasOrigin::TopLeft => Vec2::new(x, -y),
            CanvasOrigin::BottomLeft => Vec2::new(x, y),
        }
    }
}

impl Default for CanvasExtents {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            origin: CanvasOrigin::TopLeft,
        }
    }
}
