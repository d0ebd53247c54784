use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if caps.formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(caps.formats[0])
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Outcome of a resize request against the current configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ResizePlan {
    /// Same size as configured; nothing to do.
    Unchanged,
    /// At least one dimension is zero; remember it, configure later.
    Deferred,
    /// Reconfigure the surface.
    Reconfigure,
}

pub(crate) fn plan_resize(current: (u32, u32), requested: (u32, u32)) -> ResizePlan {
    if current == requested {
        ResizePlan::Unchanged
    } else if requested.0 == 0 || requested.1 == 0 {
        ResizePlan::Deferred
    } else {
        ResizePlan::Reconfigure
    }
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: (u32, u32),
    err: &wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.0 > 0 && size.1 > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_plans() {
        assert_eq!(plan_resize((800, 600), (800, 600)), ResizePlan::Unchanged);
        assert_eq!(plan_resize((800, 600), (0, 600)), ResizePlan::Deferred);
        assert_eq!(plan_resize((800, 600), (1024, 768)), ResizePlan::Reconfigure);
        assert_eq!(plan_resize((0, 0), (0, 0)), ResizePlan::Unchanged);
    }
}
