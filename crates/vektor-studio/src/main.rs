use anyhow::{Context, Result};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use vektor_engine::device::{GpuInit, GraphicsBackend, WgpuDevice};
use vektor_engine::logging::{init_logging, LoggingConfig};
use vektor_engine::renderer::{FrameDriver, FrameStats, RendererConfig};
use vektor_engine::time::FrameTick;
use vektor_engine::window::{App, AppControl, Runtime, RuntimeConfig};

mod demo;

/// Logs a stats line roughly once per second at 60 Hz.
const STATS_EVERY: u64 = 60;

struct Studio;

impl App for Studio {
    fn setup(&mut self, driver: &mut FrameDriver<WgpuDevice>) {
        match demo::build(driver) {
            Ok(n) => log::info!("demo scene: {n} shapes"),
            Err(e) => log::error!("demo scene rejected: {e}"),
        }
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, tick: FrameTick, stats: &FrameStats) -> AppControl {
        if tick.frame_index % STATS_EVERY == 0 {
            log::debug!(
                "frame {}: {} draws, {} vertices, {} indices (dt {:?})",
                tick.frame_index,
                stats.draw_calls,
                stats.vertices,
                stats.indices,
                tick.dt
            );
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let backend = match std::env::var("VEKTOR_BACKEND") {
        Ok(name) => name
            .parse::<GraphicsBackend>()
            .with_context(|| format!("VEKTOR_BACKEND={name}"))?,
        Err(_) => GraphicsBackend::Auto,
    };
    log::info!("graphics backend: {backend}");

    let window = RuntimeConfig {
        title: "Vector Renderer".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(
        window,
        RendererConfig::default(),
        GpuInit::default().with_backend(backend),
        Studio,
    )
}
