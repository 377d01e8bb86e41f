/// Mesh data as delivered by a mesh-format loader.
///
/// Parsing is an external concern; the engine only consumes the flattened
/// arrays. Positions and normals are xyz triples, texture coordinates are uv
/// pairs, indices refer to vertices.

use crate::error::Result;
use crate::engine_bail;

/// Flattened mesh arrays consumed by `RenderableObject::from_mesh`
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions, xyz per vertex
    pub positions: Vec<f32>,
    /// Vertex normals, xyz per vertex
    pub normals: Vec<f32>,
    /// Texture coordinates, uv per vertex
    pub texcoords: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(
        positions: Vec<f32>,
        normals: Vec<f32>,
        texcoords: Vec<f32>,
        indices: Vec<u32>,
    ) -> Self {
        Self { positions, normals, texcoords, indices }
    }

    /// Number of vertices described by the position array
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Check the arrays are mutually consistent
    ///
    /// Positions and normals must come in xyz triples for the same vertex
    /// count, texture coordinates in uv pairs for that count, and at least
    /// one index must be present.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() || self.positions.len() % 3 != 0 {
            engine_bail!(
                "aurora3d::MeshData",
                "position array length {} is not a positive multiple of 3",
                self.positions.len()
            );
        }
        let vertex_count = self.positions.len() / 3;
        if self.normals.len() != vertex_count * 3 {
            engine_bail!(
                "aurora3d::MeshData",
                "normal array length {} does not match {} vertices",
                self.normals.len(),
                vertex_count
            );
        }
        if self.texcoords.len() != vertex_count * 2 {
            engine_bail!(
                "aurora3d::MeshData",
                "texcoord array length {} does not match {} vertices",
                self.texcoords.len(),
                vertex_count
            );
        }
        if self.indices.is_empty() {
            engine_bail!("aurora3d::MeshData", "index array is empty");
        }
        if let Some(&out_of_range) =
            self.indices.iter().find(|&&i| i as usize >= vertex_count)
        {
            engine_bail!(
                "aurora3d::MeshData",
                "index {} out of range for {} vertices",
                out_of_range,
                vertex_count
            );
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
