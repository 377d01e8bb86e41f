/// GlProgram - OpenGL implementation of the Program trait
///
/// `link_and_validate` is the two-phase machine: link, then driver
/// validation. Either failure retrieves the info log, reports it at Trace
/// severity, deletes the backend program and leaves the object in a terminal
/// failure state.

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{Handle, LinkState, Program, Shader};
use aurora_3d_engine::aurora3d::utils::Uid;
use aurora_3d_engine::aurora3d::{Error, Result};
use aurora_3d_engine::engine_trace;
use aurora_3d_engine::glam::Mat4;
use glow::HasContext;

use crate::gl_context::GlShared;
use crate::gl_shader::GlShader;

/// Name of the model-matrix uniform the batching renderer feeds
const MODEL_MATRIX_UNIFORM: &str = "u_model";

/// OpenGL shader program object
pub struct GlProgram {
    shared: Arc<GlShared>,
    /// Backend object id; None once torn down
    pub(crate) id: Cell<Option<glow::NativeProgram>>,
    uid: Uid,
    state: Cell<LinkState>,
}

impl GlProgram {
    pub(crate) fn new(shared: Arc<GlShared>, id: glow::NativeProgram) -> Self {
        Self {
            shared,
            id: Cell::new(Some(id)),
            uid: Uid::fresh(),
            state: Cell::new(LinkState::Created),
        }
    }

    fn live_id(&self) -> Result<glow::NativeProgram> {
        self.id
            .get()
            .ok_or_else(|| Error::InvalidResource("program already torn down".to_string()))
    }

    /// Fetch the info log, report it, delete the program, enter `state`.
    fn fail_stage(&self, id: glow::NativeProgram, state: LinkState, stage: &str) -> String {
        let log = unsafe { self.shared.gl.get_program_info_log(id) };
        let diagnostic = if log.is_empty() {
            format!("OpenGL failed to {} program, no diagnostic generated", stage)
        } else {
            log
        };
        engine_trace!("aurora3d::gl::Program", "{} diagnostic: {}", stage, diagnostic);
        unsafe {
            self.shared.gl.delete_program(id);
        }
        self.id.set(None);
        self.state.set(state);
        diagnostic
    }
}

impl Program for GlProgram {
    fn uid(&self) -> Uid {
        self.uid
    }

    fn attach(&self, shader: &Handle<dyn Shader>) -> Result<()> {
        let program_id = self.live_id()?;
        let gl_shader = shader
            .as_any()
            .downcast_ref::<GlShader>()
            .ok_or_else(|| Error::InvalidResource("shader from a different backend".to_string()))?;
        let shader_id = gl_shader.live_id()?;
        unsafe {
            self.shared.gl.attach_shader(program_id, shader_id);
        }
        Ok(())
    }

    fn detach(&self, shader: &Handle<dyn Shader>) {
        let (Some(program_id), Some(gl_shader)) =
            (self.id.get(), shader.as_any().downcast_ref::<GlShader>())
        else {
            return;
        };
        if let Some(shader_id) = gl_shader.id() {
            unsafe {
                self.shared.gl.detach_shader(program_id, shader_id);
            }
        }
    }

    fn link_and_validate(&self) -> Result<()> {
        let id = self.live_id()?;

        unsafe {
            self.shared.gl.link_program(id);
        }
        if !unsafe { self.shared.gl.get_program_link_status(id) } {
            let diagnostic = self.fail_stage(id, LinkState::LinkFailed, "link");
            return Err(Error::LinkFailed(diagnostic));
        }
        self.state.set(LinkState::Linked);

        unsafe {
            self.shared.gl.validate_program(id);
        }
        if !unsafe { self.shared.gl.get_program_validate_status(id) } {
            let diagnostic = self.fail_stage(id, LinkState::ValidateFailed, "validate");
            return Err(Error::ValidateFailed(diagnostic));
        }
        self.state.set(LinkState::Validated);
        Ok(())
    }

    fn activate(&self) {
        if let Some(id) = self.id.get() {
            unsafe {
                self.shared.gl.use_program(Some(id));
            }
        }
    }

    fn deactivate(&self) {
        unsafe {
            self.shared.gl.use_program(None);
        }
    }

    fn upload_model_matrix(&self, matrix: &Mat4) -> Result<()> {
        let id = self.live_id()?;
        unsafe {
            // A program without the uniform ignores the upload, matching
            // glUniform* semantics for location -1.
            if let Some(location) = self.shared.gl.get_uniform_location(id, MODEL_MATRIX_UNIFORM) {
                self.shared.gl.uniform_matrix_4_f32_slice(
                    Some(&location),
                    false,
                    &matrix.to_cols_array(),
                );
            }
        }
        Ok(())
    }

    fn state(&self) -> LinkState {
        self.state.get()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            unsafe {
                self.shared.gl.delete_program(id);
            }
        }
    }
}
