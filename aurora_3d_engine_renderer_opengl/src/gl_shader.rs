/// GlShader - OpenGL implementation of the Shader trait
///
/// Shaders are created attached to their owning program; on drop they detach
/// from it (if it is still alive) and delete their backend object. The
/// sentinel `Cell<Option<_>>` id makes teardown single-shot.

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{Handle, Program, Shader, ShaderStage};
use aurora_3d_engine::aurora3d::{Error, Result};
use glow::HasContext;

use crate::gl_context::GlShared;
use crate::gl_program::GlProgram;

/// Map an abstract stage to the GL shader type enum
pub(crate) fn gl_shader_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Geometry => glow::GEOMETRY_SHADER,
        ShaderStage::TessellationControl => glow::TESS_CONTROL_SHADER,
        ShaderStage::TessellationEvaluation => glow::TESS_EVALUATION_SHADER,
        ShaderStage::Compute => glow::COMPUTE_SHADER,
    }
}

/// OpenGL shader object
pub struct GlShader {
    shared: Arc<GlShared>,
    /// Backend object id; None once torn down
    id: Cell<Option<glow::NativeShader>>,
    stage: ShaderStage,
    /// Owning program, kept alive for detachment on drop
    program: Handle<dyn Program>,
}

impl GlShader {
    pub(crate) fn new(
        shared: Arc<GlShared>,
        id: glow::NativeShader,
        stage: ShaderStage,
        program: Handle<dyn Program>,
    ) -> Self {
        Self {
            shared,
            id: Cell::new(Some(id)),
            stage,
            program,
        }
    }

    /// Backend shader id, if not torn down
    pub(crate) fn id(&self) -> Option<glow::NativeShader> {
        self.id.get()
    }

    pub(crate) fn live_id(&self) -> Result<glow::NativeShader> {
        self.id
            .get()
            .ok_or_else(|| Error::InvalidResource("shader already torn down".to_string()))
    }
}

impl Shader for GlShader {
    fn stage(&self) -> ShaderStage {
        self.stage
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            // Detach only while the owning program's backend object exists
            if let Some(gl_program) = self.program.as_any().downcast_ref::<GlProgram>() {
                if let Some(program_id) = gl_program.id.get() {
                    unsafe {
                        self.shared.gl.detach_shader(program_id, id);
                    }
                }
            }
            unsafe {
                self.shared.gl.delete_shader(id);
            }
        }
    }
}
