/// GlVertexArray - OpenGL implementation of the VertexArray trait

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::VertexArray;
use aurora_3d_engine::aurora3d::{Error, Result};
use glow::HasContext;

use crate::gl_context::GlShared;

/// OpenGL vertex array object
pub struct GlVertexArray {
    shared: Arc<GlShared>,
    /// Backend object id; None once torn down
    id: Cell<Option<glow::NativeVertexArray>>,
}

impl GlVertexArray {
    pub(crate) fn new(shared: Arc<GlShared>, id: glow::NativeVertexArray) -> Self {
        Self { shared, id: Cell::new(Some(id)) }
    }
}

impl VertexArray for GlVertexArray {
    fn bind(&self) {
        if let Some(id) = self.id.get() {
            unsafe {
                self.shared.gl.bind_vertex_array(Some(id));
            }
        }
    }

    fn unbind(&self) {
        unsafe {
            self.shared.gl.bind_vertex_array(None);
        }
    }

    fn set_attribute(&self, index: u32, components: i32) -> Result<()> {
        if self.id.get().is_none() {
            return Err(Error::InvalidResource("vertex array already torn down".to_string()));
        }
        // Describes the array buffer currently bound, tightly packed floats
        unsafe {
            self.shared
                .gl
                .vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, 0, 0);
        }
        Ok(())
    }

    fn enable_attribute(&self, index: u32) {
        unsafe {
            self.shared.gl.enable_vertex_attrib_array(index);
        }
    }

    fn disable_attribute(&self, index: u32) {
        unsafe {
            self.shared.gl.disable_vertex_attrib_array(index);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            unsafe {
                self.shared.gl.delete_vertex_array(id);
            }
        }
    }
}
