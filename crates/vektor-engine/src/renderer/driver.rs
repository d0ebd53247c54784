use crate::config::RendererConfig;
use crate::device::{DeviceError, RenderDevice, SurfaceHandle};
use crate::scene::Scene;
use crate::shape::Shape;
use crate::tessellate::{Mesh, Tessellator};

use super::FrameError;

/// Totals for one presented frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub shapes: usize,
    pub draw_calls: usize,
    pub vertices: usize,
    pub indices: usize,
}

/// Drives frames over a [`Scene`] through a [`RenderDevice`].
///
/// All calls happen on the thread that owns the driver. Scene mutation and
/// frame production never interleave because both need `&mut self`.
#[derive(Debug)]
pub struct FrameDriver<D: RenderDevice> {
    device: D,
    scene: Scene,
    tessellator: Tessellator,
    config: RendererConfig,
}

impl<D: RenderDevice> FrameDriver<D> {
    pub fn new(device: D, config: RendererConfig) -> Self {
        Self {
            device,
            scene: Scene::new(),
            tessellator: Tessellator::new(config.tessellator),
            config,
        }
    }

    // ── scene authoring ─────────────────────────────────────────────────

    /// Appends a shape; returns its draw-order index.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> usize {
        self.scene.add(shape)
    }

    pub fn clear_shapes(&mut self) {
        self.scene.clear();
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    // ── accessors ───────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn device(&self) -> &D {
        &self.device
    }

    #[inline]
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ── lifecycle ───────────────────────────────────────────────────────

    pub fn initialize(
        &mut self,
        surface: SurfaceHandle,
        width: u32,
        height: u32,
    ) -> Result<(), DeviceError> {
        self.device.initialize(surface, width, height)
    }

    /// Forwards a host resize. The scene is untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), DeviceError> {
        self.device.resize(width, height)
    }

    pub fn shutdown(&mut self) {
        self.device.shutdown();
    }

    // ── frame ───────────────────────────────────────────────────────────

    /// Produces and presents one frame.
    ///
    /// On any device failure the frame is discarded, nothing is presented and
    /// the remaining shapes are skipped.
    pub fn on_tick(&mut self) -> Result<FrameStats, FrameError> {
        self.device
            .pre_render(self.config.clear_color)
            .map_err(FrameError::frame)?;

        let stats = match self.submit_scene() {
            Ok(stats) => stats,
            Err(err) => {
                log::warn!("{err}");
                self.device.discard_frame();
                return Err(err);
            }
        };

        if let Err(e) = self.device.render() {
            self.device.discard_frame();
            return Err(FrameError::frame(e));
        }

        log::trace!(
            "frame: {} shapes, {} draws, {} vertices, {} indices",
            stats.shapes,
            stats.draw_calls,
            stats.vertices,
            stats.indices
        );
        Ok(stats)
    }

    fn submit_scene(&mut self) -> Result<FrameStats, FrameError> {
        let mut stats = FrameStats {
            shapes: self.scene.len(),
            ..FrameStats::default()
        };

        for (index, shape) in self.scene.iter().enumerate() {
            let mut mesh = self.tessellator.tessellate(shape, &self.device);
            mesh.normalize(&self.config.canvas);

            submit_mesh(&mut self.device, &mesh).map_err(|e| FrameError::shape(index, e))?;

            stats.draw_calls += 1;
            stats.vertices += mesh.vertex_count();
            stats.indices += mesh.index_count();
        }

        Ok(stats)
    }
}

fn submit_mesh<D: RenderDevice>(device: &mut D, mesh: &Mesh) -> Result<(), DeviceError> {
    device.upload_vertices(&mesh.vertices)?;
    device.upload_indices(&mesh.indices)?;
    device.bind_geometry()?;
    device.draw_indexed_triangles(mesh.index_count() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CanvasExtents, Vec2};
    use crate::device::{DeviceCall, DeviceState, FailPoint, RecordingDevice};
    use crate::paint::{Color, Fill, Stroke};
    use crate::shape::{Line, QuadraticCurve, Rect};

    fn driver(device: RecordingDevice) -> FrameDriver<RecordingDevice> {
        let config = RendererConfig::default().with_canvas(CanvasExtents::new(800.0, 600.0).unwrap());
        let mut d = FrameDriver::new(device, config);
        d.initialize(SurfaceHandle::headless(), 800, 600).unwrap();
        d
    }

    fn rect() -> Rect {
        Rect::new(100.0, 150.0, 200.0, 100.0, Fill::new(Color::GREEN)).unwrap()
    }

    fn line() -> Line {
        Line::new(Vec2::new(50.0, 100.0), Vec2::new(300.0, 100.0), Stroke::new(Color::RED, 5.0))
            .unwrap()
    }

    #[test]
    fn empty_scene_still_clears_and_presents() {
        let mut d = driver(RecordingDevice::new());
        let stats = d.on_tick().unwrap();
        assert_eq!(stats, FrameStats::default());
        assert_eq!(
            &d.device().calls()[1..],
            &[DeviceCall::PreRender { clear: Color::GRAY }, DeviceCall::Render]
        );
    }

    #[test]
    fn one_upload_bind_draw_per_shape_in_order() {
        let mut d = driver(RecordingDevice::new());
        d.add_shape(rect());
        d.add_shape(line());
        let stats = d.on_tick().unwrap();

        assert_eq!(stats.shapes, 2);
        assert_eq!(stats.draw_calls, 2);
        assert_eq!(stats.vertices, 8);
        assert_eq!(stats.indices, 12);

        let kinds: Vec<&str> = d
            .device()
            .calls()
            .iter()
            .map(|c| match c {
                DeviceCall::Initialize { .. } => "init",
                DeviceCall::PreRender { .. } => "pre",
                DeviceCall::UploadVertices(_) => "vb",
                DeviceCall::UploadIndices(_) => "ib",
                DeviceCall::BindGeometry => "bind",
                DeviceCall::DrawIndexedTriangles { .. } => "draw",
                DeviceCall::Render => "present",
                _ => "other",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "init", "pre", "vb", "ib", "bind", "draw", "vb", "ib", "bind", "draw", "present"
            ]
        );

        let draws = d.device().draws();
        assert_eq!(draws[0].vertices[0].color, Color::GREEN.to_array());
        assert_eq!(draws[1].vertices[0].color, Color::RED.to_array());
    }

    #[test]
    fn failure_halts_frame_without_present() {
        let mut d = driver(RecordingDevice::new().failing_at(FailPoint::Draw(1)));
        d.add_shape(rect());
        d.add_shape(line());
        d.add_shape(rect());

        let err = d.on_tick().unwrap_err();
        assert_eq!(err.shape_index(), Some(1));
        assert!(!err.is_fatal());

        let dev = d.device();
        assert_eq!(dev.draws().len(), 1);
        assert_eq!(dev.count(|c| *c == DeviceCall::Render), 0);
        assert_eq!(dev.calls().last(), Some(&DeviceCall::DiscardFrame));

        // The scene survives and the next frame starts clean.
        assert_eq!(d.scene().len(), 3);
        assert!(d.on_tick().is_ok());
    }

    #[test]
    fn tick_before_initialize_reports_setup_failure() {
        let mut d = FrameDriver::new(RecordingDevice::new(), RendererConfig::default());
        d.add_shape(rect());
        let err = d.on_tick().unwrap_err();
        assert_eq!(err.shape_index(), None);
        assert!(matches!(err.device_error(), DeviceError::NotInitialized));
        assert!(d.device().calls().is_empty());
    }

    #[test]
    fn resize_keeps_the_scene() {
        let mut d = driver(RecordingDevice::new());
        d.add_shape(rect());
        d.resize(1024, 768).unwrap();
        assert_eq!(d.scene().len(), 1);
        assert_eq!(d.on_tick().unwrap().draw_calls, 1);
    }

    #[test]
    fn clear_shapes_empties_next_frame() {
        let mut d = driver(RecordingDevice::new());
        d.add_shape(rect());
        d.add_shape(
            QuadraticCurve::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(50.0, 50.0),
                Vec2::new(100.0, 0.0),
                Stroke::new(Color::BLUE, 2.0),
            )
            .unwrap(),
        );
        assert_eq!(d.on_tick().unwrap().draw_calls, 2);

        d.clear_shapes();
        assert_eq!(d.on_tick().unwrap().draw_calls, 0);
    }

    #[test]
    fn shutdown_then_tick_is_fatal() {
        let mut d = driver(RecordingDevice::new());
        d.shutdown();
        d.shutdown();
        assert_eq!(d.device().state(), DeviceState::ShutDown);
        let err = d.on_tick().unwrap_err();
        assert!(err.is_fatal());
    }
}
