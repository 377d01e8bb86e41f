/// Dx9RenderingContext - DirectX 9 stub implementation of RenderingContext
///
/// Frame and viewport entry points are accepted as no-ops; every `create_*`
/// fails with a backend error naming the unimplemented operation.

use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{
    Buffer, BufferDesc, GraphicsConfig, Handle, Program, RenderingContext, RenderingMode, Shader,
    ShaderDesc, Texture, TextureDesc, VertexArray, WindowContext,
};
use aurora_3d_engine::aurora3d::{Error, Result};
use aurora_3d_engine::engine_warn;

fn unimplemented_resource(what: &str) -> Error {
    engine_warn!("aurora3d::dx9::Context", "{} creation is not implemented", what);
    Error::BackendError(format!("DirectX 9 backend: {} creation not implemented", what))
}

/// DirectX 9 rendering context stub
pub struct Dx9RenderingContext {
    window: Arc<dyn WindowContext>,
}

impl Dx9RenderingContext {
    /// Create the stub context for a window
    pub fn new(window: Arc<dyn WindowContext>, config: &GraphicsConfig) -> Result<Self> {
        if config.mode != RenderingMode::DirectX9 {
            return Err(Error::InitializationFailed(format!(
                "DirectX 9 backend cannot build a {} context",
                config.mode
            )));
        }
        Ok(Self { window })
    }
}

impl RenderingContext for Dx9RenderingContext {
    fn mode(&self) -> RenderingMode {
        RenderingMode::DirectX9
    }

    fn activate_context(&mut self) -> Result<()> {
        self.window.activate()
    }

    fn deactivate_context(&mut self) {
        self.window.deactivate();
    }

    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn swap_frame(&mut self) -> Result<()> {
        self.window.swap_buffers()
    }

    fn update_viewport(&mut self, _x: u32, _y: u32, _width: u32, _height: u32) {}

    fn clear_screen(&mut self, _color: [f32; 4]) {}

    fn set_face_winding(&mut self, _clockwise: bool) {}

    fn create_buffer(&mut self, _desc: &BufferDesc) -> Result<Handle<dyn Buffer>> {
        Err(unimplemented_resource("buffer"))
    }

    fn create_vertex_array(&mut self) -> Result<Handle<dyn VertexArray>> {
        Err(unimplemented_resource("vertex array"))
    }

    fn create_program(&mut self) -> Result<Handle<dyn Program>> {
        Err(unimplemented_resource("program"))
    }

    fn create_shader(
        &mut self,
        _desc: &ShaderDesc,
        _program: &Handle<dyn Program>,
    ) -> Result<Handle<dyn Shader>> {
        Err(unimplemented_resource("shader"))
    }

    fn create_texture(&mut self, _desc: &TextureDesc) -> Result<Handle<dyn Texture>> {
        Err(unimplemented_resource("texture"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "dx9_rendering_context_tests.rs"]
mod tests;
