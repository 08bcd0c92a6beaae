//! Triangulated surface of a unit at one fold state.
//!
//! Each of the `n` cells is a skewed quad between the two polygon rings; the
//! quad is split along its valley diagonal, which is where the physical
//! panel actually folds. Renderers consume the triangles and the crease
//! polylines directly.

use glam::DVec3;

use super::{FoldState, KreslingUnit};

/// Triangle mesh plus crease edges for one unit.
pub struct UnitMesh {
    /// Bottom ring vertices (indices `0..n`) followed by top ring
    /// vertices (indices `n..2n`)
    pub vertices: Vec<DVec3>,
    /// Triangle indices, 3 per triangle, 2 triangles per cell
    pub indices: Vec<u32>,
    /// Mountain crease segments, one per cell: `[bottom_i, top_i]`
    pub mountain_creases: Vec<[u32; 2]>,
    /// Valley crease segments, one per cell: `[bottom_i, top_(i+1)]`
    pub valley_creases: Vec<[u32; 2]>,
}

impl UnitMesh {
    /// Build the mesh for `unit` at `state`.
    pub fn from_unit(unit: &KreslingUnit, state: FoldState) -> Self {
        let coords = unit.vertex_coordinates(state.h, state.phi);
        let n = unit.n();

        let mut vertices = Vec::with_capacity(2 * n as usize);
        vertices.extend_from_slice(&coords.bottom);
        vertices.extend_from_slice(&coords.top);

        let mut indices = Vec::with_capacity(6 * n as usize);
        let mut mountain_creases = Vec::with_capacity(n as usize);
        let mut valley_creases = Vec::with_capacity(n as usize);

        for i in 0..n {
            let bottom_curr = i;
            let bottom_next = (i + 1) % n;
            let top_curr = n + i;
            let top_next = n + (i + 1) % n;

            // Split along the valley diagonal bottom_i -- top_(i+1)
            indices.extend_from_slice(&[bottom_curr, bottom_next, top_next]);
            indices.extend_from_slice(&[bottom_curr, top_next, top_curr]);

            mountain_creases.push([bottom_curr, top_curr]);
            valley_creases.push([bottom_curr, top_next]);
        }

        Self {
            vertices,
            indices,
            mountain_creases,
            valley_creases,
        }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Total surface area of the triangulated side panels.
    pub fn surface_area(&self) -> f64 {
        let mut area = 0.0;

        for chunk in self.indices.chunks(3) {
            let v1 = self.vertices[chunk[0] as usize];
            let v2 = self.vertices[chunk[1] as usize];
            let v3 = self.vertices[chunk[2] as usize];

            area += (v2 - v1).cross(v3 - v1).length() / 2.0;
        }

        area
    }
}
