use crate::coords::Vec2;
use crate::shape::Line;

use super::Mesh;

/// Vertex order is `[p1+n, p1-n, p2+n, p2-n]`.
pub(super) const LINE_INDICES: [u16; 6] = [0, 1, 2, 1, 3, 2];

/// Builds a quad `stroke.width` wide centered on the segment.
///
/// A zero-length line has no direction; it collapses to four coincident
/// vertices (zero area) instead of dividing by zero.
pub(super) fn tessellate(line: &Line) -> Mesh {
    let stroke = line.stroke();
    let (p1, p2) = (line.p1(), line.p2());

    let d = p2 - p1;
    let len = d.length();
    let n = if len > 0.0 {
        (d / len).perp() * (stroke.width * 0.5)
    } else {
        Vec2::zero()
    };

    let mut mesh = Mesh::with_capacity(4, LINE_INDICES.len());
    mesh.push_vertex(p1 + n, stroke.color);
    mesh.push_vertex(p1 - n, stroke.color);
    mesh.push_vertex(p2 + n, stroke.color);
    mesh.push_vertex(p2 - n, stroke.color);
    mesh.indices.extend_from_slice(&LINE_INDICES);
    mesh
}
