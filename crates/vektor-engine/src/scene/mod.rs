//! Scene list: the ordered set of shapes drawn every frame.

mod list;

pub use list::Scene;
