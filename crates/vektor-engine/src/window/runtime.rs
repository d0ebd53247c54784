use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{GpuInit, SurfaceHandle, WgpuDevice};
use crate::renderer::{FrameDriver, RendererConfig};
use crate::time::FrameTicker;

use super::app::{App, AppControl};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vektor".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives frames until it closes.
    pub fn run<A>(
        window: RuntimeConfig,
        renderer: RendererConfig,
        gpu_init: GpuInit,
        app: A,
    ) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(window, renderer, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.failure.map_or(Ok(()), Err)
    }
}

struct AppState<A: App> {
    config: RuntimeConfig,
    app: A,

    window: Option<Arc<Window>>,
    driver: FrameDriver<WgpuDevice>,
    ticker: FrameTicker,

    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A: App> AppState<A> {
    fn new(config: RuntimeConfig, renderer: RendererConfig, gpu_init: GpuInit, app: A) -> Self {
        let ticker = FrameTicker::new(renderer.frame_interval);
        Self {
            config,
            app,
            window: None,
            driver: FrameDriver::new(WgpuDevice::new(gpu_init), renderer),
            ticker,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure.get_or_insert(err);
        self.request_exit(event_loop);
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let PhysicalSize { width, height } = window.inner_size();
        self.driver
            .initialize(SurfaceHandle::new(window.clone()), width, height)
            .context("failed to initialize render device")?;

        self.app.setup(&mut self.driver);
        log::debug!("scene ready: {} shapes", self.driver.scene().len());

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        if let Err(e) = self.driver.resize(size.width, size.height) {
            log::warn!("resize to {}x{} failed: {e}", size.width, size.height);
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(tick) = self.ticker.poll(Instant::now()) else {
            return;
        };

        if let Some(window) = &self.window {
            window.pre_present_notify();
        }

        match self.driver.on_tick() {
            Ok(stats) => {
                if self.app.on_frame(tick, &stats) == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }
            Err(e) if e.is_fatal() => {
                self.fail(event_loop, anyhow::Error::new(e).context("rendering stopped"));
            }
            Err(e) => log::debug!("frame {} skipped: {e}", tick.frame_index),
        }
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(window) = &self.window else {
            return;
        };

        let now = Instant::now();
        if self.ticker.is_due(now) {
            window.request_redraw();
        }

        match self.ticker.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.driver.shutdown();
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.driver.shutdown();
    }
}
