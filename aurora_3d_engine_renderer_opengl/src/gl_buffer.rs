/// GlBuffer - OpenGL implementation of the Buffer trait

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{Buffer, BufferKind, BufferUsage};
use aurora_3d_engine::aurora3d::{Error, Result};
use glow::HasContext;

use crate::gl_context::GlShared;

/// Map a buffer kind to its GL binding target
pub(crate) fn gl_buffer_target(kind: BufferKind) -> u32 {
    match kind {
        BufferKind::Array => glow::ARRAY_BUFFER,
        BufferKind::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        BufferKind::Uniform => glow::UNIFORM_BUFFER,
    }
}

/// Map a usage hint to its GL usage enum
pub(crate) fn gl_buffer_usage(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
    }
}

/// OpenGL buffer object
pub struct GlBuffer {
    shared: Arc<GlShared>,
    /// Backend object id; None once torn down
    id: Cell<Option<glow::NativeBuffer>>,
    kind: BufferKind,
    target: u32,
    usage: u32,
    element_count: Cell<u32>,
}

impl GlBuffer {
    pub(crate) fn new(
        shared: Arc<GlShared>,
        id: glow::NativeBuffer,
        kind: BufferKind,
        usage: BufferUsage,
    ) -> Self {
        Self {
            shared,
            id: Cell::new(Some(id)),
            kind,
            target: gl_buffer_target(kind),
            usage: gl_buffer_usage(usage),
            element_count: Cell::new(0),
        }
    }

    fn live_id(&self) -> Result<glow::NativeBuffer> {
        self.id
            .get()
            .ok_or_else(|| Error::InvalidResource("buffer already torn down".to_string()))
    }
}

impl Buffer for GlBuffer {
    fn bind(&self) {
        if let Some(id) = self.id.get() {
            unsafe {
                self.shared.gl.bind_buffer(self.target, Some(id));
            }
        }
    }

    fn unbind(&self) {
        unsafe {
            self.shared.gl.bind_buffer(self.target, None);
        }
    }

    fn fill(&self, element_count: u32, data: &[u8]) -> Result<()> {
        let id = self.live_id()?;
        unsafe {
            self.shared.gl.bind_buffer(self.target, Some(id));
            self.shared.gl.buffer_data_u8_slice(self.target, data, self.usage);
        }
        self.element_count.set(element_count);
        Ok(())
    }

    fn draw(&self) -> Result<()> {
        self.live_id()?;
        unsafe {
            self.shared
                .gl
                .draw_arrays(glow::TRIANGLES, 0, self.element_count.get() as i32);
        }
        Ok(())
    }

    fn draw_indexed(&self) -> Result<()> {
        self.live_id()?;
        unsafe {
            self.shared.gl.draw_elements(
                glow::TRIANGLES,
                self.element_count.get() as i32,
                glow::UNSIGNED_INT,
                0,
            );
        }
        Ok(())
    }

    fn element_count(&self) -> u32 {
        self.element_count.get()
    }

    fn kind(&self) -> BufferKind {
        self.kind
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlBuffer {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            unsafe {
                self.shared.gl.delete_buffer(id);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "gl_mapping_tests.rs"]
mod tests;
