/// VertexArray trait and the attribute mask

use std::any::Any;

use bitflags::bitflags;

use crate::error::Result;

bitflags! {
    /// Which vertex attributes a renderable enables around its draws.
    ///
    /// The bit position doubles as the attribute index: positions bind to
    /// attribute 0, normals to 1, texture coordinates to 2.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AttributeMask: u32 {
        const POSITIONS = 1 << 0;
        const NORMALS   = 1 << 1;
        const TEXCOORDS = 1 << 2;
    }
}

impl AttributeMask {
    /// Attribute indices for the set bits, ascending
    pub fn indices(self) -> impl Iterator<Item = u32> {
        (0..32).filter(move |i| self.bits() & (1 << i) != 0)
    }
}

/// Vertex array resource trait
///
/// Captures attribute layout over the buffers bound while it is set up.
/// The backend object is destroyed when the last handle drops.
pub trait VertexArray {
    /// Bind the vertex array
    fn bind(&self);

    /// Unbind the vertex array
    fn unbind(&self);

    /// Describe the currently bound array buffer as a float attribute
    ///
    /// # Arguments
    ///
    /// * `index` - Attribute index
    /// * `components` - Components per vertex (2 for UVs, 3 for positions)
    fn set_attribute(&self, index: u32, components: i32) -> Result<()>;

    /// Enable an attribute for drawing
    fn enable_attribute(&self, index: u32);

    /// Disable an attribute after drawing
    fn disable_attribute(&self, index: u32);

    /// Backend type recovery
    fn as_any(&self) -> &dyn Any;
}
