use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::tessellate::Vertex;

use super::frame::{ActiveFrame, BoundGeometry, PendingGeometry};
use super::surface::{self, ResizePlan};
use super::{
    pipeline, DeviceError, DeviceState, GpuInit, RenderDevice, SurfaceErrorAction, SurfaceHandle,
    SurfaceSource,
};

/// wgpu objects that live from `initialize` to `shutdown`.
///
/// Dropping this releases the surface, device, queue and pipeline together,
/// so a failed initialize never leaves half-built state behind.
struct GpuCore {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    /// Last requested drawable size; may be zero while minimized.
    size: (u32, u32),
    pipeline: wgpu::RenderPipeline,
}

impl GpuCore {
    /// Adapter/device acquisition is asynchronous under wgpu.
    async fn new(
        source: Arc<dyn SurfaceSource>,
        width: u32,
        height: u32,
        init: &GpuInit,
    ) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "surface has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backend.to_wgpu(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(source)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .with_context(|| format!("no suitable GPU adapter for backend '{}'", init.backend))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("vektor device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps, init.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = surface::choose_alpha_mode(&caps, init.alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        let pipeline = pipeline::create_mesh_pipeline(&device, format);

        let info = adapter.get_info();
        log::info!(
            "gpu initialized: {} ({:?}), surface {:?}, {}x{}",
            info.name,
            info.backend,
            format,
            width,
            height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size: (width, height),
            pipeline,
        })
    }

    /// Acquires the next surface texture and creates an encoder.
    fn begin_frame(&self) -> std::result::Result<ActiveFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("vektor frame encoder"),
            });

        Ok(ActiveFrame {
            surface_texture,
            view,
            encoder,
            retained: Vec::new(),
        })
    }

    fn upload(&self, label: &str, contents: &[u8], usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            })
    }
}

/// [`RenderDevice`] backed by wgpu.
///
/// Each `draw_indexed_triangles` records its own render pass that loads the
/// target, so draws composite in call order. Buffers referenced by recorded
/// passes stay alive until the frame is submitted or discarded.
pub struct WgpuDevice {
    init: GpuInit,
    state: DeviceState,
    core: Option<GpuCore>,
    frame: Option<ActiveFrame>,
    pending: PendingGeometry,
    bound: Option<BoundGeometry>,
}

impl WgpuDevice {
    pub fn new(init: GpuInit) -> Self {
        Self {
            init,
            state: DeviceState::Uninitialized,
            core: None,
            frame: None,
            pending: PendingGeometry::default(),
            bound: None,
        }
    }

    /// Active surface format, once initialized.
    pub fn surface_format(&self) -> Option<wgpu::TextureFormat> {
        self.core.as_ref().map(|c| c.config.format)
    }

    /// Current drawable size in physical pixels, once initialized.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.core.as_ref().map(|c| c.size)
    }

    /// Errors unless initialized and inside a frame.
    fn check_in_frame(&self) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        if self.frame.is_none() {
            return Err(DeviceError::NoFrame);
        }
        Ok(())
    }

    fn core(&self) -> Result<&GpuCore, DeviceError> {
        self.core.as_ref().ok_or(DeviceError::NotInitialized)
    }

    fn reset_geometry(&mut self) {
        self.pending = PendingGeometry::default();
        self.bound = None;
    }
}

impl RenderDevice for WgpuDevice {
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

        let Some(source) = surface.source() else {
            return Err(DeviceError::Initialization(anyhow::anyhow!(
                "wgpu backend needs a window surface, got a headless handle"
            )));
        };

        let core = pollster::block_on(GpuCore::new(source, width, height, &self.init))
            .map_err(DeviceError::Initialization)?;

        self.core = Some(core);
        self.state = DeviceState::Initialized;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        let Some(core) = self.core.as_mut() else {
            return Err(DeviceError::NotInitialized);
        };

        match surface::plan_resize(core.size, (width, height)) {
            ResizePlan::Unchanged => {
                log::trace!("resize to {width}x{height} is a no-op");
            }
            ResizePlan::Deferred => {
                // wgpu cannot configure a 0-sized surface; wait for a real size.
                core.size = (width, height);
                log::debug!("surface size {width}x{height}; configure deferred");
            }
            ResizePlan::Reconfigure => {
                if self.frame.take().is_some() {
                    log::warn!("resize during a frame; frame discarded");
                }
                core.size = (width, height);
                core.config.width = width;
                core.config.height = height;
                core.surface.configure(&core.device, &core.config);
                log::debug!("surface resized to {width}x{height}");
            }
        }
        Ok(())
    }

    fn pre_render(&mut self, clear: Color) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        if self.frame.take().is_some() {
            log::warn!("previous frame was never presented; discarded");
        }
        self.reset_geometry();

        let core = self.core()?;
        if core.size.0 == 0 || core.size.1 == 0 {
            return Err(DeviceError::Surface {
                action: SurfaceErrorAction::SkipFrame,
                reason: "surface has zero size".to_string(),
            });
        }

        let mut frame = match core.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = surface::map_surface_error(
                    &core.surface,
                    &core.device,
                    &core.config,
                    core.size,
                    &err,
                );
                return Err(DeviceError::Surface {
                    action,
                    reason: err.to_string(),
                });
            }
        };

        // Clear pass; must end before the frame is stored.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vektor clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.frame = Some(frame);
        Ok(())
    }

    fn render(&mut self) -> Result<(), DeviceError> {
        self.state.ensure_initialized()?;
        let Some(frame) = self.frame.take() else {
            return Err(DeviceError::NoFrame);
        };
        self.reset_geometry();

        let core = self.core()?;
        let ActiveFrame {
            surface_texture,
            view,
            encoder,
            retained,
        } = frame;

        core.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        // FIFO present mode blocks here until the display is ready.
        surface_texture.present();
        drop(retained);
        Ok(())
    }

    fn discard_frame(&mut self) {
        if self.frame.take().is_some() {
            log::debug!("frame discarded without presenting");
        }
        self.reset_geometry();
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        if vertices.is_empty() {
            return Err(DeviceError::EmptyBuffer);
        }
        let buffer = self.core()?.upload(
            "vektor mesh vbo",
            bytemuck::cast_slice(vertices),
            wgpu::BufferUsages::VERTEX,
        );
        self.pending.vertices = Some(buffer);
        Ok(())
    }

    fn upload_indices(&mut self, indices: &[u16]) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        if indices.is_empty() {
            return Err(DeviceError::EmptyBuffer);
        }
        let buffer = self.core()?.upload(
            "vektor mesh ibo",
            bytemuck::cast_slice(indices),
            wgpu::BufferUsages::INDEX,
        );
        self.pending.indices = Some((buffer, indices.len() as u32));
        Ok(())
    }

    fn bind_geometry(&mut self) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        let (vertices, indices) = match (self.pending.vertices.take(), self.pending.indices.take())
        {
            (Some(v), Some(i)) => (v, i),
            (v, i) => {
                self.pending = PendingGeometry {
                    vertices: v,
                    indices: i,
                };
                return Err(DeviceError::NoGeometry);
            }
        };

        let (indices, index_count) = indices;
        let previous = self.bound.replace(BoundGeometry {
            vertices,
            indices,
            index_count,
        });

        // Earlier draws may still reference the old buffers.
        if let (Some(old), Some(frame)) = (previous, self.frame.as_mut()) {
            frame.retained.push(old.vertices);
            frame.retained.push(old.indices);
        }
        Ok(())
    }

    fn draw_indexed_triangles(&mut self, index_count: u32) -> Result<(), DeviceError> {
        self.check_in_frame()?;
        let Some(bound) = self.bound.as_ref() else {
            return Err(DeviceError::NoGeometry);
        };
        if index_count > bound.index_count {
            return Err(DeviceError::IndexOutOfRange {
                requested: index_count,
                available: bound.index_count,
            });
        }
        if index_count % 3 != 0 {
            log::debug!("draw of {index_count} indices leaves a partial triangle");
        }

        let Some(core) = self.core.as_ref() else {
            return Err(DeviceError::NotInitialized);
        };
        let Some(ActiveFrame { encoder, view, .. }) = self.frame.as_mut() else {
            return Err(DeviceError::NoFrame);
        };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vektor mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        // Clip space → physical pixels over the whole configured surface.
        rpass.set_viewport(
            0.0,
            0.0,
            core.config.width as f32,
            core.config.height as f32,
            0.0,
            1.0,
        );
        rpass.set_pipeline(&core.pipeline);
        rpass.set_vertex_buffer(0, bound.vertices.slice(..));
        rpass.set_index_buffer(bound.indices.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..index_count, 0, 0..1);
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.state == DeviceState::ShutDown {
            return;
        }
        // Frame first: the surface texture must go before the surface.
        self.frame = None;
        self.reset_geometry();
        if self.core.take().is_some() {
            log::debug!("wgpu device shut down");
        }
        self.state = DeviceState::ShutDown;
    }

    fn state(&self) -> DeviceState {
        self.state
    }

    fn curve_segments_hint(&self) -> Option<u32> {
        self.init.curve_segments_hint
    }
}

impl Drop for WgpuDevice {
    fn drop(&mut self) {
        self.shutdown();
    }
}
