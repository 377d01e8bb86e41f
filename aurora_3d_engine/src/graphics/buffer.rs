/// Buffer trait and buffer descriptor

use std::any::Any;

use crate::error::Result;

/// What the buffer stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Vertex attribute data
    Array,
    /// Index data
    ElementArray,
    /// Uniform/constant data
    Uniform,
}

/// Expected update frequency, forwarded to the backend allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Filled once, drawn many times
    StaticDraw,
    /// Refilled occasionally
    DynamicDraw,
    /// Refilled every frame
    StreamDraw,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// What the buffer stores
    pub kind: BufferKind,
    /// Expected update frequency
    pub usage: BufferUsage,
}

impl BufferDesc {
    pub fn new(kind: BufferKind, usage: BufferUsage) -> Self {
        Self { kind, usage }
    }

    /// Static vertex attribute buffer
    pub fn vertex() -> Self {
        Self::new(BufferKind::Array, BufferUsage::StaticDraw)
    }

    /// Static index buffer
    pub fn index() -> Self {
        Self::new(BufferKind::ElementArray, BufferUsage::StaticDraw)
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The backend object is
/// destroyed when the last [`super::Handle`] to the buffer drops.
pub trait Buffer {
    /// Bind the buffer to its target
    fn bind(&self);

    /// Unbind the buffer's target
    fn unbind(&self);

    /// Upload data, replacing the buffer contents
    ///
    /// # Arguments
    ///
    /// * `element_count` - Number of logical elements (vertices or indices)
    /// * `data` - Raw bytes to upload
    fn fill(&self, element_count: u32, data: &[u8]) -> Result<()>;

    /// Issue a non-indexed draw of `element_count()` vertices
    fn draw(&self) -> Result<()>;

    /// Issue an indexed draw of `element_count()` indices
    ///
    /// Only meaningful for [`BufferKind::ElementArray`] buffers; the vertex
    /// array the indices refer to must currently be bound.
    fn draw_indexed(&self) -> Result<()>;

    /// Number of logical elements uploaded by the last `fill`
    fn element_count(&self) -> u32;

    /// What the buffer stores
    fn kind(&self) -> BufferKind;

    /// Backend type recovery
    fn as_any(&self) -> &dyn Any;
}
