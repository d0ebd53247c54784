//! Headless [`RenderDevice`] that records calls instead of issuing GPU work.
//!
//! Used by tests and by tools that want to inspect exactly what a frame
//! submits. It enforces the same state machine and frame rules as the wgpu
//! backend, so contract violations surface here first.

use crate::paint::Color;
use crate::tessellate::Vertex;

use super::{DeviceError, DeviceState, RenderDevice, SurfaceHandle};

/// One recorded device call.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Initialize { width: u32, height: u32 },
    Resize { width: u32, height: u32 },
    PreRender { clear: Color },
    UploadVertices(Vec<Vertex>),
    UploadIndices(Vec<u16>),
    BindGeometry,
    DrawIndexedTriangles { index_count: u32 },
    Render,
    DiscardFrame,
    Shutdown,
}

/// A draw call paired with the geometry that was bound for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub index_count: u32,
}

/// Failure injection points.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FailPoint {
    Initialize,
    /// The n-th (0-based) draw call since the device was created.
    Draw(usize),
}

/// Recording device.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    state: DeviceState,
    size: (u32, u32),
    in_frame: bool,
    calls: Vec<DeviceCall>,

    pending_vertices: Option<Vec<Vertex>>,
    pending_indices: Option<Vec<u16>>,
    bound: Option<(Vec<Vertex>, Vec<u16>)>,

    draws: Vec<RecordedDraw>,
    draws_issued: usize,
    presented_frames: usize,

    fail_at: Option<FailPoint>,
    curve_segments_hint: Option<u32>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given operation fail with a backend error.
    pub fn failing_at(mut self, point: FailPoint) -> Self {
        self.fail_at = Some(point);
        self
    }

    pub fn with_curve_segments_hint(mut self, hint: Option<u32>) -> Self {
        self.curve_segments_hint = hint;
        self
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    /// Draws recorded in presented frames and the frame in progress.
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    pub fn presented_frames(&self) -> usize {
        self.presented_frames
    }

    /// Current drawable size.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&DeviceCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Forgets recorded calls and draws (useful between test steps).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.draws.clear();
    }

    fn check_in_frame(&self) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        if !self.in_frame {
            return Err(DeviceError::NoFrame);
        }
        Ok(())
    }

    fn reset_geometry(&mut self) {
        self.pending_vertices = None;
        self.pending_indices = None;
        self.bound = None;
    }
}

impl RenderDevice for RecordingDevice {
    fn initialize(
        &mut self,
        surface: SurfaceHandle,
        width: u32,
        height: u32,
    ) -> Result<(), DeviceError> {
        match self.state {
            DeviceState::Initialized => return Err(DeviceError::AlreadyInitialized),
            DeviceState::ShutDown => return Err(DeviceError::ShutDown),
            DeviceState::Uninitialized => {}
        }
        if self.fail_at == Some(FailPoint::Initialize) {
            return Err(DeviceError::Initialization(anyhow::anyhow!(
                "injected initialize failure"
            )));
        }

        log::debug!(
            "recording device initialized {width}x{height} (headless: {})",
            surface.is_headless()
        );
        self.size = (width, height);
        self.state = DeviceState::Initialized;
        self.calls.push(DeviceCall::Initialize { width, height });
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        if self.size == (width, height) {
            log::trace!("resize to {width}x{height} is a no-op");
            return Ok(());
        }
        self.size = (width, height);
        self.calls.push(DeviceCall::Resize { width, height });
        Ok(())
    }

    fn pre_render(&mut self, clear: Color) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        self.reset_geometry();
        self.in_frame = true;
        self.calls.push(DeviceCall::PreRender { clear });
        Ok(())
    }

    fn render(&mut self) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        self.in_frame = false;
        self.reset_geometry();
        self.presented_frames += 1;
        self.calls.push(DeviceCall::Render);
        Ok(())
    }

    fn discard_frame(&mut self) {
        if !self.in_frame {
            return;
        }
        self.in_frame = false;
        self.reset_geometry();
        self.calls.push(DeviceCall::DiscardFrame);
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        if vertices.is_empty() {
            return Err(DeviceError::EmptyBuffer);
        }
        self.pending_vertices = Some(vertices.to_vec());
        self.calls.push(DeviceCall::UploadVertices(vertices.to_vec()));
        Ok(())
    }

    fn upload_indices(&mut self, indices: &[u16]) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        if indices.is_empty() {
            return Err(DeviceError::EmptyBuffer);
        }
        self.pending_indices = Some(indices.to_vec());
        self.calls.push(DeviceCall::UploadIndices(indices.to_vec()));
        Ok(())
    }

    fn bind_geometry(&mut self) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        match (self.pending_vertices.take(), self.pending_indices.take()) {
            (Some(v), Some(i)) => {
                self.bound = Some((v, i));
                self.calls.push(DeviceCall::BindGeometry);
                Ok(())
            }
            (v, i) => {
                self.pending_vertices = v;
                self.pending_indices = i;
                Err(DeviceError::NoGeometry)
            }
        }
    }

    fn draw_indexed_triangles(&mut self, index_count: u32) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        let Some((vertices, indices)) = self.bound.as_ref() else {
            return Err(DeviceError::NoGeometry);
        };
        let available = indices.len() as u32;
        if index_count > available {
            return Err(DeviceError::IndexOutOfRange {
                requested: index_count,
                available,
            });
        }

        let draw_no = self.draws_issued;
        self.draws_issued += 1;
        if self.fail_at == Some(FailPoint::Draw(draw_no)) {
            return Err(DeviceError::Backend(anyhow::anyhow!(
                "injected failure on draw {draw_no}"
            )));
        }

        self.draws.push(RecordedDraw {
            vertices: vertices.clone(),
            indices: indices.clone(),
            index_count,
        });
        self.calls.push(DeviceCall::DrawIndexedTriangles { index_count });
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.state == DeviceState::ShutDown {
            return;
        }
        self.in_frame = false;
        self.reset_geometry();
        self.state = DeviceState::ShutDown;
        self.calls.push(DeviceCall::Shutdown);
    }

    fn state(&self) -> DeviceState {
        self.state
    }

    fn curve_segments_hint(&self) -> Option<u32> {
        self.curve_segments_hint
    }
}

impl Drop for RecordingDevice {
    fn drop(&mut self) {
        self.shutdown();
    }
}
