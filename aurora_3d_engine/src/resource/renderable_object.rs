/// Renderable object model: GPU vertex array + CPU-side buffer set.
///
/// A `RenderableObject` couples one vertex-array handle with the four buffer
/// handles it was built from. Copies share the GPU objects; the backend
/// resources are torn down when the last copy drops. Identity — and with it
/// equality and hashing — is the vertex array, so two objects wrapping the
/// same GPU data batch together regardless of where they were constructed.

use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::graphics::{
    AttributeMask, Buffer, BufferDesc, Handle, RenderingContext, VertexArray,
};
use crate::resource::MeshData;

// ===== VERTICE SET =====

/// The four buffers a renderable draws from
#[derive(Clone, Debug)]
pub struct VerticeSet {
    /// Vertex positions (attribute 0)
    pub positions: Handle<dyn Buffer>,
    /// Vertex normals (attribute 1)
    pub normals: Handle<dyn Buffer>,
    /// Texture coordinates (attribute 2)
    pub textures: Handle<dyn Buffer>,
    /// Triangle indices
    pub indices: Handle<dyn Buffer>,
}

impl VerticeSet {
    pub fn new(
        positions: Handle<dyn Buffer>,
        normals: Handle<dyn Buffer>,
        textures: Handle<dyn Buffer>,
        indices: Handle<dyn Buffer>,
    ) -> Self {
        Self { positions, normals, textures, indices }
    }
}

// ===== RENDERABLE OBJECT =====

/// A drawable object: vertex array identity + vertice set.
///
/// Drawing is a three-phase contract: callers invoke
/// [`pre_render`](Self::pre_render), then [`render`](Self::render) (once per
/// instance), then [`post_render`](Self::post_render) — in that order, fully,
/// before moving to another object, so no bound state leaks into the next
/// object's draw.
pub struct RenderableObject {
    vertex_array: Handle<dyn VertexArray>,
    vertices: VerticeSet,
    attributes: AttributeMask,
}

impl RenderableObject {
    /// Build a renderable from parsed mesh data.
    ///
    /// Creates one vertex array and four buffers through `ctx`, uploads the
    /// mesh arrays and records the attribute layout (positions at 0, normals
    /// at 1, texture coordinates at 2).
    pub fn from_mesh(ctx: &mut dyn RenderingContext, mesh: &MeshData) -> Result<Self> {
        mesh.validate()?;

        let vertex_array = ctx.create_vertex_array()?;
        let positions = ctx.create_buffer(&BufferDesc::vertex())?;
        let normals = ctx.create_buffer(&BufferDesc::vertex())?;
        let textures = ctx.create_buffer(&BufferDesc::vertex())?;
        let indices = ctx.create_buffer(&BufferDesc::index())?;

        let vertex_count = mesh.vertex_count();

        vertex_array.bind();

        positions.bind();
        positions.fill(vertex_count, bytemuck::cast_slice(&mesh.positions))?;
        vertex_array.set_attribute(0, 3)?;

        normals.bind();
        normals.fill(vertex_count, bytemuck::cast_slice(&mesh.normals))?;
        vertex_array.set_attribute(1, 3)?;

        textures.bind();
        textures.fill(vertex_count, bytemuck::cast_slice(&mesh.texcoords))?;
        vertex_array.set_attribute(2, 2)?;

        indices.bind();
        indices.fill(mesh.indices.len() as u32, bytemuck::cast_slice(&mesh.indices))?;

        vertex_array.unbind();

        Ok(Self {
            vertex_array,
            vertices: VerticeSet::new(positions, normals, textures, indices),
            attributes: AttributeMask::POSITIONS | AttributeMask::NORMALS | AttributeMask::TEXCOORDS,
        })
    }

    /// Wrap existing GPU data into a renderable.
    ///
    /// The handles are shared; an object built this way is equal to every
    /// other object wrapping the same vertex array.
    pub fn new(
        vertex_array: Handle<dyn VertexArray>,
        vertices: VerticeSet,
        attributes: AttributeMask,
    ) -> Self {
        Self { vertex_array, vertices, attributes }
    }

    /// Bind the vertex array and enable the object's attributes
    pub fn pre_render(&self) {
        self.vertex_array.bind();
        for index in self.attributes.indices() {
            self.vertex_array.enable_attribute(index);
        }
    }

    /// Issue one indexed draw
    pub fn render(&self) -> Result<()> {
        self.vertices.indices.draw_indexed()
    }

    /// Disable the attributes (reverse order) and unbind the vertex array
    pub fn post_render(&self) {
        let indices: Vec<u32> = self.attributes.indices().collect();
        for index in indices.into_iter().rev() {
            self.vertex_array.disable_attribute(index);
        }
        self.vertex_array.unbind();
    }

    // ===== ACCESSORS =====

    /// The vertex array handle defining this object's identity
    pub fn vertex_array(&self) -> &Handle<dyn VertexArray> {
        &self.vertex_array
    }

    /// The buffer set this object draws from
    pub fn vertice_set(&self) -> &VerticeSet {
        &self.vertices
    }

    /// Attributes enabled around draws
    pub fn attributes(&self) -> AttributeMask {
        self.attributes
    }
}

impl Clone for RenderableObject {
    fn clone(&self) -> Self {
        Self {
            vertex_array: self.vertex_array.clone(),
            vertices: self.vertices.clone(),
            attributes: self.attributes,
        }
    }
}

impl PartialEq for RenderableObject {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_array.ptr_eq(&other.vertex_array)
    }
}

impl Eq for RenderableObject {}

impl Hash for RenderableObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex_array.hash(state);
    }
}

impl std::fmt::Debug for RenderableObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderableObject")
            .field("vertex_array", &self.vertex_array)
            .field("attributes", &self.attributes)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "renderable_object_tests.rs"]
mod tests;
