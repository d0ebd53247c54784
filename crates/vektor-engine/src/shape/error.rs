use std::fmt;

/// A shape parameter rejected at construction.
///
/// The tessellator never validates its input; every shape that reaches it has
/// passed through one of the checked constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A coordinate or size component is NaN or infinite.
    NonFinite { what: &'static str },
    /// Stroke width must be `>= 0`.
    NegativeStrokeWidth(f32),
    /// A color channel lies outside `[0, 1]`.
    ColorOutOfRange { channel: char, value: f32 },
    /// Rect width and height must be `>= 0`.
    NegativeSize { width: f32, height: f32 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NonFinite { what } => write!(f, "{what} is not finite"),
            ShapeError::NegativeStrokeWidth(w) => write!(f, "negative stroke width {w}"),
            ShapeError::ColorOutOfRange { channel, value } => {
                write!(f, "color channel '{channel}' = {value} outside [0, 1]")
            }
            ShapeError::NegativeSize { width, height } => {
                write!(f, "negative rect size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
