//! Frame driver.
//!
//! Owns the scene and a render device. Each tick clears the target, submits
//! every shape in insertion order (tessellate, normalize, upload, bind, draw)
//! and presents. Later shapes paint over earlier ones; there is no depth test.

mod driver;
mod error;

pub use crate::config::RendererConfig;
pub use driver::{FrameDriver, FrameStats};
pub use error::FrameError;
