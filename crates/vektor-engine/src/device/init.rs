use super::GraphicsBackend;

/// Initialization parameters for the wgpu backend.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Native API selection.
    pub backend: GraphicsBackend,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO waits for vertical sync, which keeps presentation at the display cadence.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface. A hint.
    pub desired_maximum_frame_latency: u32,

    /// Curve segment count this device asks the tessellator for, if any.
    pub curve_segments_hint: Option<u32>,
}

impl GpuInit {
    pub fn with_backend(mut self, backend: GraphicsBackend) -> Self {
        self.backend = backend;
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backend: GraphicsBackend::Auto,
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            curve_segments_hint: None,
        }
    }
}
