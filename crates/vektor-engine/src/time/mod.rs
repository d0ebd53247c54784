//! Time subsystem.
//!
//! Fixed-interval frame pacing without coupling to the runtime.
//! Intended usage:
//! - one `FrameTicker` per render loop
//! - park the event loop until `next_deadline()`
//! - call `poll(now)` on wake; a `Some` result means a frame is due

mod ticker;

pub use ticker::{FrameTick, FrameTicker};
