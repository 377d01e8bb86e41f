/*!
# Aurora 3D Engine - DirectX 9 Renderer Backend (stub)

Placeholder DirectX 9 backend. The context is constructible and reports its
mode, frame and viewport entry points are accepted, but every resource
creation fails with a backend error naming the missing piece. It exists so
`RenderingMode::DirectX9` can be registered, selected and exercised by tests
while the real device work is pending.
*/

use aurora_3d_engine::aurora3d::graphics::{ContextRegistry, RenderingContext, RenderingMode};

mod dx9_rendering_context;

pub use dx9_rendering_context::Dx9RenderingContext;

/// Register the DirectX 9 backend in a context registry
pub fn register(registry: &mut ContextRegistry) {
    registry.register(
        RenderingMode::DirectX9,
        Box::new(|window, config| {
            let context = Dx9RenderingContext::new(window, config)?;
            Ok(Box::new(context) as Box<dyn RenderingContext>)
        }),
    );
}
