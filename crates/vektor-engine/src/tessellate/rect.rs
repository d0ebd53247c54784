use crate::coords::Vec2;
use crate::shape::Rect;

use super::Mesh;

pub(super) const RECT_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Four corners wound `(x,y) → (x+w,y) → (x+w,y+h) → (x,y+h)`, two triangles, fill color.
pub(super) fn tessellate(rect: &Rect) -> Mesh {
    let color = rect.fill().color;
    let min = rect.origin();
    let max = rect.max();

    let mut mesh = Mesh::with_capacity(4, RECT_INDICES.len());
    mesh.push_vertex(min, color);
    mesh.push_vertex(Vec2::new(max.x, min.y), color);
    mesh.push_vertex(max, color);
    mesh.push_vertex(Vec2::new(min.x, max.y), color);
    mesh.indices.extend_from_slice(&RECT_INDICES);
    mesh
}
