use crate::coords::Vec2;
use crate::paint::Stroke;

use super::Mesh;

/// Samples a curve at `segments + 1` evenly spaced parameters and strokes it
/// as a strip of quads.
///
/// Each sample emits the on-curve point followed by the same point shifted by
/// `stroke.width` along +Y. The shift is a fixed axis offset, not a normal
/// offset, so steep segments render thinner than `stroke.width`.
///
/// Output: `2 * (segments + 1)` vertices, `6 * segments` indices.
pub(super) fn stroke_strip<F>(segments: u32, stroke: Stroke, point_at: F) -> Mesh
where
    F: Fn(f32) -> Vec2,
{
    let n = segments as usize;
    let offset = Vec2::new(0.0, stroke.width);
    let mut mesh = Mesh::with_capacity(2 * (n + 1), 6 * n);

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let p = point_at(t);
        mesh.push_vertex(p, stroke.color);
        mesh.push_vertex(p + offset, stroke.color);

        if i > 0 {
            let a = (2 * (i - 1)) as u16;
            mesh.indices
                .extend_from_slice(&[a, a + 1, a + 2, a + 1, a + 3, a + 2]);
        }
    }

    mesh
}
