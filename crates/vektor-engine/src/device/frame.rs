/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub(super) struct ActiveFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,

    /// Buffers referenced by recorded draws, kept until submission.
    pub retained: Vec<wgpu::Buffer>,
}

/// Buffers uploaded but not yet bound.
#[derive(Default)]
pub(super) struct PendingGeometry {
    pub vertices: Option<wgpu::Buffer>,
    pub indices: Option<(wgpu::Buffer, u32)>,
}

/// Buffers the next draw reads from.
pub(super) struct BoundGeometry {
    pub vertices: wgpu::Buffer,
    pub indices: wgpu::Buffer,
    pub index_count: u32,
}
