use std::fmt;

use crate::device::DeviceError;

/// A frame that could not be completed.
///
/// The device has already discarded the frame when this is returned; nothing
/// was presented.
#[derive(Debug)]
pub enum FrameError {
    /// A device call failed. `shape` is the scene index being drawn, or
    /// `None` when the failure was in frame setup or present.
    Device {
        shape: Option<usize>,
        source: DeviceError,
    },
}

impl FrameError {
    pub(crate) fn frame(source: DeviceError) -> Self {
        FrameError::Device {
            shape: None,
            source,
        }
    }

    pub(crate) fn shape(index: usize, source: DeviceError) -> Self {
        FrameError::Device {
            shape: Some(index),
            source,
        }
    }

    /// Scene index of the shape that failed, if any.
    pub fn shape_index(&self) -> Option<usize> {
        match self {
            FrameError::Device { shape, .. } => *shape,
        }
    }

    pub fn device_error(&self) -> &DeviceError {
        match self {
            FrameError::Device { source, .. } => source,
        }
    }

    /// Whether the owner should stop driving frames.
    pub fn is_fatal(&self) -> bool {
        self.device_error().is_fatal()
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Device {
                shape: Some(i),
                source,
            } => write!(f, "frame halted at shape {i}: {source}"),
            FrameError::Device {
                shape: None,
                source,
            } => write!(f, "frame failed: {source}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Device { source, .. } => Some(source),
        }
    }
}
