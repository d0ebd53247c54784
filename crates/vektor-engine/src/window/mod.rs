//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window, binds the window to a
//! [`WgpuDevice`](crate::device::WgpuDevice) and paces a
//! [`FrameDriver`](crate::renderer::FrameDriver) with a
//! [`FrameTicker`](crate::time::FrameTicker).

mod app;
mod runtime;

pub use app::{App, AppControl};
pub use runtime::{Runtime, RuntimeConfig};
