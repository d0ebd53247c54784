use std::fmt;
use std::sync::Arc;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::paint::Color;
use crate::tessellate::Vertex;

use super::DeviceError;

/// Anything a GPU surface can be created from (in practice: a window).
pub trait SurfaceSource: HasWindowHandle + HasDisplayHandle + Send + Sync {}

impl<T> SurfaceSource for T where T: HasWindowHandle + HasDisplayHandle + Send + Sync {}

/// Opaque reference to the platform surface a device renders into.
///
/// The device treats it as opaque; a windowed backend reads the raw handles,
/// a headless backend ignores it.
#[derive(Clone, Default)]
pub struct SurfaceHandle {
    source: Option<Arc<dyn SurfaceSource>>,
}

impl SurfaceHandle {
    /// Wraps a window (or any raw-window-handle provider).
    pub fn new<S: SurfaceSource + 'static>(source: Arc<S>) -> Self {
        let source: Arc<dyn SurfaceSource> = source;
        Self {
            source: Some(source),
        }
    }

    /// A handle with no platform surface behind it.
    pub fn headless() -> Self {
        Self { source: None }
    }

    #[inline]
    pub fn is_headless(&self) -> bool {
        self.source.is_none()
    }

    pub(crate) fn source(&self) -> Option<Arc<dyn SurfaceSource>> {
        self.source.clone()
    }
}

impl fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("headless", &self.is_headless())
            .finish()
    }
}

/// Device lifecycle.
///
/// `Uninitialized → Initialized → ShutDown`. Resizing keeps the device
/// `Initialized`; `ShutDown` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum DeviceState {
    #[default]
    Uninitialized,
    Initialized,
    ShutDown,
}

impl DeviceState {
    /// `Ok` only in `Initialized`.
    pub fn ensure_initialized(self) -> Result<(), DeviceError> {
        match self {
            DeviceState::Initialized => Ok(()),
            DeviceState::Uninitialized => Err(DeviceError::NotInitialized),
            DeviceState::ShutDown => Err(DeviceError::ShutDown),
        }
    }
}

/// Backend-agnostic render device.
///
/// A frame is bracketed by [`pre_render`](Self::pre_render) and
/// [`render`](Self::render). Between them, each shape is drawn with one
/// `upload_vertices` → `upload_indices` → `bind_geometry` →
/// `draw_indexed_triangles` sequence. Uploads replace the previous contents;
/// there is no append.
///
/// Every operation except `shutdown` fails with
/// [`DeviceError::NotInitialized`] before `initialize` and
/// [`DeviceError::ShutDown`] after `shutdown`.
pub trait RenderDevice {
    /// Acquires GPU resources bound to `surface`.
    fn initialize(
        &mut self,
        surface: SurfaceHandle,
        width: u32,
        height: u32,
    ) -> Result<(), DeviceError>;

    /// Recreates surface-bound resources for a new drawable size.
    ///
    /// Resizing to the current size is a no-op.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), DeviceError>;

    /// Starts a frame and clears the target to `clear`.
    fn pre_render(&mut self, clear: Color) -> Result<(), DeviceError>;

    /// Ends the frame and presents it.
    ///
    /// Blocks as needed so presentation keeps to the display cadence.
    fn render(&mut self) -> Result<(), DeviceError>;

    /// Drops the frame in progress without presenting it. No-op outside a frame.
    fn discard_frame(&mut self);

    /// Replaces the pending vertex buffer.
    fn upload_vertices(&mut self, vertices: &[Vertex]) -> Result<(), DeviceError>;

    /// Replaces the pending index buffer.
    fn upload_indices(&mut self, indices: &[u16]) -> Result<(), DeviceError>;

    /// Makes the most recently uploaded buffers the draw source.
    fn bind_geometry(&mut self) -> Result<(), DeviceError>;

    /// Draws `index_count` bound indices as a triangle list.
    fn draw_indexed_triangles(&mut self, index_count: u32) -> Result<(), DeviceError>;

    /// Releases all GPU resources. Safe to call any number of times.
    fn shutdown(&mut self);

    fn state(&self) -> DeviceState;

    /// Preferred curve segment count for this device, if it has one.
    fn curve_segments_hint(&self) -> Option<u32> {
        None
    }
}
