use std::fmt;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Failure reported by a [`RenderDevice`](super::RenderDevice).
#[derive(Debug)]
pub enum DeviceError {
    /// Called before `initialize`.
    NotInitialized,
    /// Called after `shutdown`.
    ShutDown,
    /// `initialize` called on an initialized device.
    AlreadyInitialized,
    /// Upload/draw/present outside a `pre_render` .. `render` bracket.
    NoFrame,
    /// Draw issued with no bound geometry, or bind issued before both uploads.
    NoGeometry,
    /// Upload of an empty vertex or index slice.
    EmptyBuffer,
    /// Draw asked for more indices than the bound index buffer holds.
    IndexOutOfRange { requested: u32, available: u32 },
    /// Device or surface binding could not be created.
    Initialization(anyhow::Error),
    /// The next surface texture could not be acquired.
    Surface {
        action: SurfaceErrorAction,
        reason: String,
    },
    /// Any other backend failure.
    Backend(anyhow::Error),
}

impl DeviceError {
    /// Whether the owner should stop rendering altogether.
    pub fn is_fatal(&self) -> bool {
        match self {
            DeviceError::Initialization(_) | DeviceError::ShutDown => true,
            DeviceError::Surface { action, .. } => *action == SurfaceErrorAction::Fatal,
            _ => false,
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NotInitialized => write!(f, "render device used before initialize"),
            DeviceError::ShutDown => write!(f, "render device used after shutdown"),
            DeviceError::AlreadyInitialized => write!(f, "render device already initialized"),
            DeviceError::NoFrame => write!(f, "no frame in progress (missing pre_render)"),
            DeviceError::NoGeometry => write!(f, "no geometry uploaded and bound"),
            DeviceError::EmptyBuffer => write!(f, "empty buffer upload"),
            DeviceError::IndexOutOfRange {
                requested,
                available,
            } => write!(f, "draw of {requested} indices exceeds bound {available}"),
            DeviceError::Initialization(e) => write!(f, "device initialization failed: {e:#}"),
            DeviceError::Surface { action, reason } => {
                write!(f, "surface error ({action:?}): {reason}")
            }
            DeviceError::Backend(e) => write!(f, "backend error: {e:#}"),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Initialization(e) | DeviceError::Backend(e) => Some(&**e),
            _ => None,
        }
    }
}
