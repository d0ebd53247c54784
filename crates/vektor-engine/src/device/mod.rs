//! Render device abstraction and backends.
//!
//! [`RenderDevice`] is the narrow contract the frame driver submits through:
//! lifecycle (`initialize` / `resize` / `shutdown`), frame bracketing
//! (`pre_render` / `render`), geometry upload and indexed triangle draws.
//!
//! Backends:
//! - [`WgpuDevice`]: the GPU backend, presenting to a window surface
//! - [`RecordingDevice`]: headless, records calls for inspection

mod backend;
mod contract;
mod error;
mod frame;
mod gpu;
mod init;
mod pipeline;
pub mod recording;
mod surface;

pub use backend::{GraphicsBackend, UnknownBackend};
pub use contract::{DeviceState, RenderDevice, SurfaceHandle, SurfaceSource};
pub use error::{DeviceError, SurfaceErrorAction};
pub use gpu::WgpuDevice;
pub use init::GpuInit;
pub use recording::{DeviceCall, FailPoint, RecordedDraw, RecordingDevice};
