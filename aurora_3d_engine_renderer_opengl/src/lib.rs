/*!
# Aurora 3D Engine - OpenGL Renderer Backend

OpenGL implementation of the Aurora 3D rendering engine.

This crate implements the `aurora_3d_engine` graphics traits using the glow
OpenGL bindings. The GL function pointers are loaded through the window
collaborator's `proc_address` at context creation, so any windowing layer that
can make a GL context current can drive this backend.

All resources created through a [`GlRenderingContext`] must be used and
dropped on the thread that owns the context.
*/

use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{ContextRegistry, RenderingContext, RenderingMode};

// OpenGL implementation modules
mod gl_buffer;
mod gl_context;
mod gl_program;
mod gl_rendering_context;
mod gl_shader;
mod gl_texture;
mod gl_vertex_array;

pub use gl_buffer::GlBuffer;
pub use gl_program::GlProgram;
pub use gl_rendering_context::GlRenderingContext;
pub use gl_shader::GlShader;
pub use gl_texture::GlTexture;
pub use gl_vertex_array::GlVertexArray;

/// Register the OpenGL backend in a context registry
///
/// # Example
///
/// ```no_run
/// use aurora_3d_engine::aurora3d::graphics::ContextRegistry;
///
/// let mut registry = ContextRegistry::new();
/// aurora_3d_engine_renderer_opengl::register(&mut registry);
/// // registry.create_context(window, &config) builds a GlRenderingContext
/// ```
pub fn register(registry: &mut ContextRegistry) {
    registry.register(
        RenderingMode::OpenGL,
        Box::new(|window, config| {
            let context = GlRenderingContext::new(window, config)?;
            Ok(Box::new(context) as Box<dyn RenderingContext>)
        }),
    );
}

/// Create an OpenGL rendering context directly (without a registry)
pub fn create_context(
    window: Arc<dyn aurora_3d_engine::aurora3d::graphics::WindowContext>,
    config: &aurora_3d_engine::aurora3d::graphics::GraphicsConfig,
) -> aurora_3d_engine::aurora3d::Result<GlRenderingContext> {
    GlRenderingContext::new(window, config)
}
