//! Shape → triangle mesh conversion.
//!
//! Tessellation is a pure function of the shape parameters and the curve
//! segment count. The render device is consulted only for an optional quality
//! hint ([`RenderDevice::curve_segments_hint`]); no GPU work happens here.
//!
//! Output is in authored canvas space. Call [`Mesh::normalize`] before upload.

mod curve;
mod line;
mod mesh;
mod rect;

pub use mesh::{Mesh, Vertex};

use crate::config::ConfigError;
use crate::device::RenderDevice;
use crate::shape::Shape;

/// Tessellation quality settings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TessellatorConfig {
    curve_segments: u32,
}

impl TessellatorConfig {
    pub const DEFAULT_CURVE_SEGMENTS: u32 = 20;

    /// Largest segment count whose `2 * (n + 1)` vertices still fit 16-bit indices.
    pub const MAX_CURVE_SEGMENTS: u32 = (u16::MAX as u32 - 1) / 2 - 1;

    pub fn new(curve_segments: u32) -> Result<Self, ConfigError> {
        if !Self::segments_valid(curve_segments) {
            return Err(ConfigError::InvalidCurveSegments(curve_segments));
        }
        Ok(Self { curve_segments })
    }

    #[inline]
    pub fn curve_segments(&self) -> u32 {
        self.curve_segments
    }

    #[inline]
    fn segments_valid(n: u32) -> bool {
        (1..=Self::MAX_CURVE_SEGMENTS).contains(&n)
    }
}

impl Default for TessellatorConfig {
    fn default() -> Self {
        Self {
            curve_segments: Self::DEFAULT_CURVE_SEGMENTS,
        }
    }
}

/// Converts shapes into meshes.
#[derive(Debug, Clone, Default)]
pub struct Tessellator {
    config: TessellatorConfig,
}

impl Tessellator {
    pub fn new(config: TessellatorConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &TessellatorConfig {
        &self.config
    }

    /// Tessellates `shape` into a fresh mesh.
    ///
    /// Deterministic: the same shape and segment count always give bit-identical output.
    pub fn tessellate(&self, shape: &Shape, device: &dyn RenderDevice) -> Mesh {
        match shape {
            Shape::Line(l) => line::tessellate(l),
            Shape::Rect(r) => rect::tessellate(r),
            Shape::QuadraticCurve(c) => {
                curve::stroke_strip(self.curve_segments(device), c.stroke(), |t| c.point_at(t))
            }
            Shape::CubicCurve(c) => {
                curve::stroke_strip(self.curve_segments(device), c.stroke(), |t| c.point_at(t))
            }
        }
    }

    /// Segment count for curves, honoring a valid device hint.
    fn curve_segments(&self, device: &dyn RenderDevice) -> u32 {
        match device.curve_segments_hint() {
            Some(n) if TessellatorConfig::segments_valid(n) => n,
            Some(n) => {
                log::debug!("ignoring out-of-range curve segment hint {n}");
                self.config.curve_segments
            }
            None => self.config.curve_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::device::RecordingDevice;
    use crate::paint::{Color, Fill, Stroke};
    use crate::shape::{CubicCurve, Line, QuadraticCurve, Rect};

    fn quad() -> Shape {
        QuadraticCurve::new(
            Vec2::new(960.0, 540.0),
            Vec2::new(480.0, 1010.0),
            Vec2::new(0.0, 1080.0),
            Stroke::new(Color::GREEN, 5.0),
        )
        .unwrap()
        .into()
    }

    fn cubic() -> Shape {
        CubicCurve::new(
            Vec2::new(960.0, 540.0),
            Vec2::new(1200.0, 205.0),
            Vec2::new(1440.0, 335.0),
            Vec2::new(1920.0, 0.0),
            Stroke::new(Color::BLUE, 5.0),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn max_segments_fit_u16_indices() {
        let n = TessellatorConfig::MAX_CURVE_SEGMENTS as usize;
        assert!(2 * (n + 1) <= u16::MAX as usize);
        assert!(TessellatorConfig::new(TessellatorConfig::MAX_CURVE_SEGMENTS).is_ok());
        assert_eq!(
            TessellatorConfig::new(TessellatorConfig::MAX_CURVE_SEGMENTS + 1),
            Err(ConfigError::InvalidCurveSegments(TessellatorConfig::MAX_CURVE_SEGMENTS + 1))
        );
        assert!(TessellatorConfig::new(0).is_err());
    }

    #[test]
    fn curve_counts_depend_only_on_segments() {
        let device = RecordingDevice::new();
        let t = Tessellator::default();
        for shape in [quad(), cubic()] {
            let mesh = t.tessellate(&shape, &device);
            assert_eq!(mesh.vertex_count(), 2 * 21);
            assert_eq!(mesh.index_count(), 6 * 20);
            assert!(mesh.is_well_formed());
        }

        let t = Tessellator::new(TessellatorConfig::new(7).unwrap());
        assert_eq!(t.tessellate(&cubic(), &device).vertex_count(), 16);
    }

    #[test]
    fn device_hint_overrides_config() {
        let device = RecordingDevice::new().with_curve_segments_hint(Some(8));
        let mesh = Tessellator::default().tessellate(&quad(), &device);
        assert_eq!(mesh.index_count(), 6 * 8);

        let device = RecordingDevice::new().with_curve_segments_hint(Some(0));
        let mesh = Tessellator::default().tessellate(&quad(), &device);
        assert_eq!(mesh.index_count(), 6 * 20);
    }

    #[test]
    fn retessellation_is_bit_identical() {
        let device = RecordingDevice::new();
        let t = Tessellator::default();
        let shapes: Vec<Shape> = vec![
            Line::new(Vec2::new(1.5, 2.25), Vec2::new(77.0, 13.0), Stroke::new(Color::RED, 3.3))
                .unwrap()
                .into(),
            Rect::new(0.1, 0.2, 30.7, 40.9, Fill::new(Color::WHITE)).unwrap().into(),
            quad(),
            cubic(),
        ];
        for shape in &shapes {
            let a = t.tessellate(shape, &device);
            let b = t.tessellate(shape, &device);
            assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&a.vertices), bytemuck::cast_slice::<Vertex, u8>(&b.vertices));
            assert_eq!(a.indices, b.indices);
        }
    }
}
