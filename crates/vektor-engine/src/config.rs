//! Renderer configuration.
//!
//! Everything here is fixed for the lifetime of a [`FrameDriver`](crate::renderer::FrameDriver);
//! none of it is mutated while frames are being produced.

use std::fmt;
use std::time::Duration;

use crate::coords::CanvasExtents;
use crate::paint::Color;
use crate::tessellate::TessellatorConfig;

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Canvas extents must be finite and strictly positive.
    InvalidCanvas { width: f32, height: f32 },
    /// Curve segment count must be in `1..=TessellatorConfig::MAX_CURVE_SEGMENTS`.
    InvalidCurveSegments(u32),
    /// Frame interval must be non-zero.
    ZeroFrameInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCanvas { width, height } => {
                write!(f, "invalid canvas extents {width}x{height}")
            }
            ConfigError::InvalidCurveSegments(n) => write!(
                f,
                "curve segment count {n} outside 1..={}",
                TessellatorConfig::MAX_CURVE_SEGMENTS
            ),
            ConfigError::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// Authored canvas that shape coordinates live in.
    pub canvas: CanvasExtents,

    /// Tessellation quality.
    pub tessellator: TessellatorConfig,

    /// Color the target is cleared to at the start of every frame.
    pub clear_color: Color,

    /// Target interval between frame ticks.
    pub frame_interval: Duration,
}

impl RendererConfig {
    /// 60 Hz.
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

    pub fn with_canvas(mut self, canvas: CanvasExtents) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_tessellator(mut self, tessellator: TessellatorConfig) -> Self {
        self.tessellator = tessellator;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        self.frame_interval = interval;
        Ok(self)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasExtents::default(),
            tessellator: TessellatorConfig::default(),
            clear_color: Color::GRAY,
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
        }
    }
}
