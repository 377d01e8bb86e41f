use super::*;
use aurora_3d_engine::aurora3d::graphics::ContextRegistry;

struct HeadlessWindow;

impl WindowContext for HeadlessWindow {
    fn activate(&self) -> Result<()> {
        Ok(())
    }

    fn deactivate(&self) {}

    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }

    fn surface_size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn proc_address(&self, _symbol: &str) -> *const std::ffi::c_void {
        std::ptr::null()
    }
}

fn dx9_config() -> GraphicsConfig {
    GraphicsConfig { mode: RenderingMode::DirectX9, ..GraphicsConfig::default() }
}

#[test]
fn test_context_is_constructible() {
    let mut ctx = Dx9RenderingContext::new(Arc::new(HeadlessWindow), &dx9_config()).unwrap();
    assert_eq!(ctx.mode(), RenderingMode::DirectX9);
    assert!(ctx.begin_frame().is_ok());
    assert!(ctx.end_frame().is_ok());
    assert!(ctx.swap_frame().is_ok());
}

#[test]
fn test_rejects_foreign_mode() {
    let config = GraphicsConfig { mode: RenderingMode::OpenGL, ..GraphicsConfig::default() };
    let result = Dx9RenderingContext::new(Arc::new(HeadlessWindow), &config);
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
fn test_resource_creation_is_unimplemented() {
    let mut ctx = Dx9RenderingContext::new(Arc::new(HeadlessWindow), &dx9_config()).unwrap();

    assert!(matches!(ctx.create_buffer(&BufferDesc::vertex()), Err(Error::BackendError(_))));
    assert!(matches!(ctx.create_vertex_array(), Err(Error::BackendError(_))));
    assert!(matches!(ctx.create_program(), Err(Error::BackendError(_))));
    assert!(matches!(
        ctx.create_texture(&TextureDesc::new(
            4,
            4,
            aurora_3d_engine::aurora3d::graphics::TextureFormat::Rgba8
        )),
        Err(Error::BackendError(_))
    ));
}

#[test]
fn test_registry_integration() {
    let mut registry = ContextRegistry::new();
    crate::register(&mut registry);

    let context = registry
        .create_context(Arc::new(HeadlessWindow), &dx9_config())
        .unwrap();
    assert_eq!(context.mode(), RenderingMode::DirectX9);
}
