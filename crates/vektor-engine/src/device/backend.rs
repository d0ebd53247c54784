use std::fmt;
use std::str::FromStr;

/// Which native graphics API the wgpu backend may use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum GraphicsBackend {
    /// Let wgpu pick the best available API for the platform.
    #[default]
    Auto,
    Vulkan,
    Metal,
    Dx12,
    Gl,
}

impl GraphicsBackend {
    pub fn to_wgpu(self) -> wgpu::Backends {
        match self {
            GraphicsBackend::Auto => wgpu::Backends::all(),
            GraphicsBackend::Vulkan => wgpu::Backends::VULKAN,
            GraphicsBackend::Metal => wgpu::Backends::METAL,
            GraphicsBackend::Dx12 => wgpu::Backends::DX12,
            GraphicsBackend::Gl => wgpu::Backends::GL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GraphicsBackend::Auto => "auto",
            GraphicsBackend::Vulkan => "vulkan",
            GraphicsBackend::Metal => "metal",
            GraphicsBackend::Dx12 => "dx12",
            GraphicsBackend::Gl => "gl",
        }
    }
}

impl fmt::Display for GraphicsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized backend name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend(pub String);

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown graphics backend '{}' (expected auto, vulkan, metal, dx12 or gl)",
            self.0
        )
    }
}

impl std::error::Error for UnknownBackend {}

impl FromStr for GraphicsBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(GraphicsBackend::Auto),
            "vulkan" | "vk" => Ok(GraphicsBackend::Vulkan),
            "metal" => Ok(GraphicsBackend::Metal),
            "dx12" | "directx" | "d3d12" => Ok(GraphicsBackend::Dx12),
            "gl" | "opengl" | "gles" => Ok(GraphicsBackend::Gl),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("auto".parse(), Ok(GraphicsBackend::Auto));
        assert_eq!(" Vulkan ".parse(), Ok(GraphicsBackend::Vulkan));
        assert_eq!("DirectX".parse(), Ok(GraphicsBackend::Dx12));
        assert_eq!("opengl".parse(), Ok(GraphicsBackend::Gl));
        assert_eq!(
            "glide".parse::<GraphicsBackend>(),
            Err(UnknownBackend("glide".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for b in [
            GraphicsBackend::Auto,
            GraphicsBackend::Vulkan,
            GraphicsBackend::Metal,
            GraphicsBackend::Dx12,
            GraphicsBackend::Gl,
        ] {
            assert_eq!(b.to_string().parse(), Ok(b));
        }
    }

    #[test]
    fn auto_enables_every_backend() {
        assert_eq!(GraphicsBackend::Auto.to_wgpu(), wgpu::Backends::all());
        assert_eq!(GraphicsBackend::Gl.to_wgpu(), wgpu::Backends::GL);
    }
}
