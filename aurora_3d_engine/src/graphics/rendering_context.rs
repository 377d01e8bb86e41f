/// RenderingContext trait - backend factory + frame interface
///
/// Backend selection is explicit: a `GraphicsConfig` names the mode and is
/// threaded through constructors and the `ContextRegistry`. Nothing here is
/// process-global, so different backends can coexist (e.g. in tests).

use std::ffi::c_void;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphics::{
    Buffer, BufferDesc, Handle, Program, Shader, ShaderDesc, Texture, TextureDesc, VertexArray,
};

// ============================================================================
// Configuration
// ============================================================================

/// Graphics backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingMode {
    /// OpenGL core profile
    OpenGL,
    /// DirectX 9 (stub backend)
    DirectX9,
    /// Vulkan (reserved, no backend crate yet)
    Vulkan,
}

impl std::fmt::Display for RenderingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RenderingMode::OpenGL => "OpenGL",
            RenderingMode::DirectX9 => "DirectX9",
            RenderingMode::Vulkan => "Vulkan",
        };
        f.write_str(name)
    }
}

/// Rendering context configuration
///
/// Passed explicitly to backend constructors and registry factories.
#[derive(Debug, Clone)]
pub struct GraphicsConfig {
    /// Which backend to build
    pub mode: RenderingMode,
    /// Requested OpenGL version (major, minor); ignored by other backends
    pub gl_version: (u32, u32),
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            mode: RenderingMode::OpenGL,
            gl_version: (3, 3),
        }
    }
}

// ============================================================================
// Window collaborator seam
// ============================================================================

/// Interface the window/OS layer must provide to a rendering context.
///
/// Window creation and message pumping live outside the engine core; the
/// context only needs activation, swapping, the surface size and (for
/// OpenGL) symbol lookup.
pub trait WindowContext {
    /// Make the window's native context current on this thread
    fn activate(&self) -> Result<()>;

    /// Release the window's native context
    fn deactivate(&self);

    /// Present the back buffer
    fn swap_buffers(&self) -> Result<()>;

    /// Current drawable surface size in pixels
    fn surface_size(&self) -> (u32, u32);

    /// Resolve a graphics API symbol (OpenGL function loading)
    fn proc_address(&self, symbol: &str) -> *const c_void;
}

// ============================================================================
// RenderingContext trait
// ============================================================================

/// Backend rendering context: resource factory + frame lifecycle.
///
/// One context per window per backend. All resources created through a
/// context must be used and dropped on the thread that owns it.
pub trait RenderingContext {
    /// Backend this context was built for
    fn mode(&self) -> RenderingMode;

    /// Make the underlying native context current
    fn activate_context(&mut self) -> Result<()>;

    /// Release the underlying native context
    fn deactivate_context(&mut self);

    /// Start a frame
    fn begin_frame(&mut self) -> Result<()>;

    /// Finish recording the frame
    fn end_frame(&mut self) -> Result<()>;

    /// Present the frame
    fn swap_frame(&mut self) -> Result<()>;

    /// Update the viewport rectangle
    fn update_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);

    /// Clear the color and depth buffers
    fn clear_screen(&mut self, color: [f32; 4]);

    /// Set triangle front-face winding
    fn set_face_winding(&mut self, clockwise: bool);

    /// Create a buffer
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Handle<dyn Buffer>>;

    /// Create a vertex array
    fn create_vertex_array(&mut self) -> Result<Handle<dyn VertexArray>>;

    /// Create an empty (unlinked) program
    fn create_program(&mut self) -> Result<Handle<dyn Program>>;

    /// Create a shader: compile `desc` and attach it to `program`
    ///
    /// Fails without allocating anything for stages the backend does not
    /// support; compile failures log the backend diagnostic, delete the
    /// backend object and return an error.
    fn create_shader(
        &mut self,
        desc: &ShaderDesc,
        program: &Handle<dyn Program>,
    ) -> Result<Handle<dyn Shader>>;

    /// Create a 2D texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Handle<dyn Texture>>;
}

// ============================================================================
// Context registry
// ============================================================================

/// Factory function building a context for one backend
pub type ContextFactory =
    Box<dyn Fn(Arc<dyn WindowContext>, &GraphicsConfig) -> Result<Box<dyn RenderingContext>>>;

/// Registry of backend factories, keyed by rendering mode.
///
/// An owned value, not a global: build one at startup, register the backends
/// the application links, and create contexts from a `GraphicsConfig`.
///
/// # Example
///
/// ```ignore
/// let mut registry = ContextRegistry::new();
/// aurora_3d_engine_renderer_opengl::register(&mut registry);
///
/// let config = GraphicsConfig::default();
/// let context = registry.create_context(window, &config)?;
/// ```
pub struct ContextRegistry {
    factories: FxHashMap<RenderingMode, ContextFactory>,
}

impl ContextRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { factories: FxHashMap::default() }
    }

    /// Register a backend factory
    ///
    /// Re-registering a mode replaces the previous factory.
    pub fn register(&mut self, mode: RenderingMode, factory: ContextFactory) {
        self.factories.insert(mode, factory);
    }

    /// Whether a factory is registered for `mode`
    pub fn contains(&self, mode: RenderingMode) -> bool {
        self.factories.contains_key(&mode)
    }

    /// Build a rendering context for `config.mode`
    ///
    /// Returns [`Error::NotFound`] if no backend is registered for the mode.
    pub fn create_context(
        &self,
        window: Arc<dyn WindowContext>,
        config: &GraphicsConfig,
    ) -> Result<Box<dyn RenderingContext>> {
        let factory = self.factories.get(&config.mode).ok_or_else(|| {
            Error::NotFound(format!("no backend registered for mode {}", config.mode))
        })?;
        factory(window, config)
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}
