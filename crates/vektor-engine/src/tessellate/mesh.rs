use bytemuck::{Pod, Zeroable};

use crate::coords::{CanvasExtents, Vec2};
use crate::paint::Color;

/// One mesh vertex: position + straight-alpha color.
///
/// Layout is `repr(C)` so a `&[Vertex]` uploads as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub fn new(p: Vec2, color: Color) -> Self {
        Self {
            position: [p.x, p.y, 0.0],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }
}

/// Tessellation output: vertices plus a flat triangle list of 16-bit indices.
///
/// A mesh is rebuilt every frame and owned by whoever tessellated it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks that indices form whole triangles and never point past the vertex list.
    pub fn is_well_formed(&self) -> bool {
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }

    /// Iterates triangles as vertex position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].xy(),
                self.vertices[tri[1] as usize].xy(),
                self.vertices[tri[2] as usize].xy(),
            ]
        })
    }

    /// Rewrites every vertex position from authored canvas space into NDC, in place.
    pub fn normalize(&mut self, canvas: &CanvasExtents) {
        for v in &mut self.vertices {
            let ndc = canvas.to_ndc(v.xy());
            v.position[0] = ndc.x;
            v.position[1] = ndc.y;
        }
    }

    #[inline]
    pub(super) fn push_vertex(&mut self, p: Vec2, color: Color) {
        self.vertices.push(Vertex::new(p, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_seven_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * 4);
        let v = Vertex::new(Vec2::new(1.0, 2.0), Color::RED);
        let raw: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(raw, &[1.0, 2.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn well_formed_rejects_dangling_index() {
        let mut mesh = Mesh::default();
        mesh.push_vertex(Vec2::zero(), Color::RED);
        mesh.push_vertex(Vec2::new(1.0, 0.0), Color::RED);
        mesh.indices = vec![0, 1, 2];
        assert!(!mesh.is_well_formed());
        mesh.push_vertex(Vec2::new(0.0, 1.0), Color::RED);
        assert!(mesh.is_well_formed());
        mesh.indices.push(0);
        assert!(!mesh.is_well_formed());
    }

    #[test]
    fn normalize_keeps_z_and_color() {
        let canvas = CanvasExtents::new(800.0, 600.0).unwrap();
        let mut mesh = Mesh::default();
        mesh.push_vertex(Vec2::new(400.0, 300.0), Color::BLUE);
        mesh.normalize(&canvas);
        let v = mesh.vertices[0];
        assert_eq!(v.position, [0.0, 0.0, 0.0]);
        assert_eq!(v.color, Color::BLUE.to_array());
    }
}
