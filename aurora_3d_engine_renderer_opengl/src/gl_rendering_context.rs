/// GlRenderingContext - OpenGL implementation of the RenderingContext trait
///
/// Loads the GL function table through the window collaborator's
/// `proc_address` and owns the shared state every GL resource object holds.

use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{
    Buffer, BufferDesc, GraphicsConfig, Handle, Program, RenderingContext, RenderingMode, Shader,
    ShaderDesc, ShaderSource, Texture, TextureDesc, VertexArray, WindowContext,
};
use aurora_3d_engine::aurora3d::{Error, Result};
use aurora_3d_engine::{engine_error, engine_info, engine_trace, engine_warn};
use glow::HasContext;

use crate::gl_buffer::GlBuffer;
use crate::gl_context::GlShared;
use crate::gl_program::GlProgram;
use crate::gl_shader::{gl_shader_stage, GlShader};
use crate::gl_texture::GlTexture;
use crate::gl_vertex_array::GlVertexArray;

/// OpenGL rendering context
pub struct GlRenderingContext {
    shared: Arc<GlShared>,
    window: Arc<dyn WindowContext>,
    clear_color: [f32; 4],
}

impl GlRenderingContext {
    /// Create a context against an activated window.
    ///
    /// Makes the window's native context current, loads the GL function
    /// table and applies the initial viewport from the surface size.
    pub fn new(window: Arc<dyn WindowContext>, config: &GraphicsConfig) -> Result<Self> {
        if config.mode != RenderingMode::OpenGL {
            return Err(Error::InitializationFailed(format!(
                "OpenGL backend cannot build a {} context",
                config.mode
            )));
        }

        window.activate()?;
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| window.proc_address(symbol))
        };

        let shared = Arc::new(GlShared { gl, gl_version: config.gl_version });
        let (width, height) = window.surface_size();
        unsafe {
            shared.gl.viewport(0, 0, width as i32, height as i32);
        }

        engine_info!(
            "aurora3d::gl::Context",
            "OpenGL context created ({}.{} requested, {}x{} surface)",
            config.gl_version.0,
            config.gl_version.1,
            width,
            height
        );

        Ok(Self {
            shared,
            window,
            clear_color: [0.0, 0.0, 0.0, 1.0],
        })
    }
}

impl RenderingContext for GlRenderingContext {
    fn mode(&self) -> RenderingMode {
        RenderingMode::OpenGL
    }

    fn activate_context(&mut self) -> Result<()> {
        self.window.activate()
    }

    fn deactivate_context(&mut self) {
        self.window.deactivate();
    }

    fn begin_frame(&mut self) -> Result<()> {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            self.shared.gl.clear_color(r, g, b, a);
            self.shared.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        unsafe {
            self.shared.gl.flush();
        }
        Ok(())
    }

    fn swap_frame(&mut self) -> Result<()> {
        self.window.swap_buffers()
    }

    fn update_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        unsafe {
            self.shared.gl.viewport(x as i32, y as i32, width as i32, height as i32);
        }
    }

    fn clear_screen(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        let [r, g, b, a] = color;
        unsafe {
            self.shared.gl.clear_color(r, g, b, a);
            self.shared.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_face_winding(&mut self, clockwise: bool) {
        unsafe {
            self.shared.gl.front_face(if clockwise { glow::CW } else { glow::CCW });
        }
    }

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Handle<dyn Buffer>> {
        let id = unsafe { self.shared.gl.create_buffer() }.map_err(|e| {
            engine_error!("aurora3d::gl::Context", "buffer allocation failed: {}", e);
            Error::BackendError(e)
        })?;
        Ok(Handle::from(Arc::new(GlBuffer::new(
            Arc::clone(&self.shared),
            id,
            desc.kind,
            desc.usage,
        )) as Arc<dyn Buffer>))
    }

    fn create_vertex_array(&mut self) -> Result<Handle<dyn VertexArray>> {
        let id = unsafe { self.shared.gl.create_vertex_array() }.map_err(|e| {
            engine_error!("aurora3d::gl::Context", "vertex array allocation failed: {}", e);
            Error::BackendError(e)
        })?;
        Ok(Handle::from(
            Arc::new(GlVertexArray::new(Arc::clone(&self.shared), id)) as Arc<dyn VertexArray>,
        ))
    }

    fn create_program(&mut self) -> Result<Handle<dyn Program>> {
        let id = unsafe { self.shared.gl.create_program() }.map_err(|e| {
            engine_error!("aurora3d::gl::Context", "program allocation failed: {}", e);
            Error::BackendError(e)
        })?;
        Ok(Handle::from(
            Arc::new(GlProgram::new(Arc::clone(&self.shared), id)) as Arc<dyn Program>,
        ))
    }

    fn create_shader(
        &mut self,
        desc: &ShaderDesc,
        program: &Handle<dyn Program>,
    ) -> Result<Handle<dyn Shader>> {
        // Stage gate before any backend allocation
        if !desc.stage.supported_by_gl(self.shared.gl_version) {
            let (major, minor) = desc.stage.min_gl_version();
            engine_warn!(
                "aurora3d::gl::Shader",
                "{} stage requires GL {}.{}, context is {}.{}",
                desc.stage,
                major,
                minor,
                self.shared.gl_version.0,
                self.shared.gl_version.1
            );
            return Err(Error::UnsupportedShaderStage(format!(
                "{} stage requires GL {}.{}",
                desc.stage, major, minor
            )));
        }

        let id = unsafe { self.shared.gl.create_shader(gl_shader_stage(desc.stage)) }.map_err(
            |e| {
                engine_error!("aurora3d::gl::Shader", "shader allocation failed: {}", e);
                Error::BackendError(e)
            },
        )?;

        // Source text: read the file or take the in-memory string
        let source = match &desc.source {
            ShaderSource::Memory(text) => text.clone(),
            ShaderSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                unsafe {
                    self.shared.gl.delete_shader(id);
                }
                engine_error!(
                    "aurora3d::gl::Shader",
                    "failed to read shader source {}: {}",
                    path.display(),
                    e
                );
                Error::InvalidResource(format!("unreadable shader source {}", path.display()))
            })?,
        };

        unsafe {
            self.shared.gl.shader_source(id, &source);
            self.shared.gl.compile_shader(id);
        }
        if !unsafe { self.shared.gl.get_shader_compile_status(id) } {
            let log = unsafe { self.shared.gl.get_shader_info_log(id) };
            let diagnostic = if log.is_empty() {
                format!("OpenGL failed to compile {} shader, no diagnostic generated", desc.stage)
            } else {
                log
            };
            engine_trace!("aurora3d::gl::Shader", "compile diagnostic: {}", diagnostic);
            unsafe {
                self.shared.gl.delete_shader(id);
            }
            return Err(Error::CompileFailed(diagnostic));
        }

        let shader = Handle::from(Arc::new(GlShader::new(
            Arc::clone(&self.shared),
            id,
            desc.stage,
            program.clone(),
        )) as Arc<dyn Shader>);

        // Attach to the owning program; on failure the dropped handle
        // deletes the backend object.
        program.attach(&shader)?;
        Ok(shader)
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Handle<dyn Texture>> {
        let id = unsafe { self.shared.gl.create_texture() }.map_err(|e| {
            engine_error!("aurora3d::gl::Context", "texture allocation failed: {}", e);
            Error::BackendError(e)
        })?;
        unsafe {
            self.shared.gl.bind_texture(glow::TEXTURE_2D, Some(id));
            self.shared.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            self.shared.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            self.shared.gl.bind_texture(glow::TEXTURE_2D, None);
        }
        Ok(Handle::from(
            Arc::new(GlTexture::new(Arc::clone(&self.shared), id, *desc)) as Arc<dyn Texture>,
        ))
    }
}
