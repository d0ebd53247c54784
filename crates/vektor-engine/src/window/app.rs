use winit::event::WindowEvent;

use crate::device::WgpuDevice;
use crate::renderer::{FrameDriver, FrameStats};
use crate::time::FrameTick;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by binaries.
pub trait App {
    /// Called once, after the device is bound to the window and before the
    /// first frame. Populate the scene here.
    fn setup(&mut self, driver: &mut FrameDriver<WgpuDevice>);

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called after each presented frame.
    fn on_frame(&mut self, tick: FrameTick, stats: &FrameStats) -> AppControl {
        let _ = (tick, stats);
        AppControl::Continue
    }
}
