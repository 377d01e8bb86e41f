/// Mock rendering context for unit tests (no GPU required)
///
/// Every mock resource records the calls made against it in `Cell`/`RefCell`
/// counters so tests can assert exact bind/activate/draw counts. Failure
/// knobs on the context let tests drive the error paths (creation failure,
/// compile failure, link/validate failure).

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::sync::Arc;

use glam::Mat4;

use crate::error::{Error, Result};
use crate::graphics::{
    Buffer, BufferDesc, BufferKind, GraphicsConfig, Handle, LinkState, Program, RenderingContext,
    RenderingMode, Shader, ShaderDesc, ShaderStage, Texture, TextureDesc, TextureFormat,
    VertexArray,
};
use crate::utils::Uid;

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub kind: BufferKind,
    pub binds: Cell<u32>,
    pub unbinds: Cell<u32>,
    pub fills: Cell<u32>,
    pub draws: Cell<u32>,
    pub draws_indexed: Cell<u32>,
    pub element_count: Cell<u32>,
}

impl MockBuffer {
    fn new(kind: BufferKind) -> Self {
        Self {
            kind,
            binds: Cell::new(0),
            unbinds: Cell::new(0),
            fills: Cell::new(0),
            draws: Cell::new(0),
            draws_indexed: Cell::new(0),
            element_count: Cell::new(0),
        }
    }
}

impl Buffer for MockBuffer {
    fn bind(&self) {
        self.binds.set(self.binds.get() + 1);
    }

    fn unbind(&self) {
        self.unbinds.set(self.unbinds.get() + 1);
    }

    fn fill(&self, element_count: u32, _data: &[u8]) -> Result<()> {
        self.fills.set(self.fills.get() + 1);
        self.element_count.set(element_count);
        Ok(())
    }

    fn draw(&self) -> Result<()> {
        self.draws.set(self.draws.get() + 1);
        Ok(())
    }

    fn draw_indexed(&self) -> Result<()> {
        self.draws_indexed.set(self.draws_indexed.get() + 1);
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

// ============================================================================
// Mock VertexArray
// ============================================================================

#[derive(Debug)]
pub struct MockVertexArray {
    pub binds: Cell<u32>,
    pub unbinds: Cell<u32>,
    pub attributes: RefCell<Vec<(u32, i32)>>,
    pub enabled: RefCell<Vec<u32>>,
    pub disabled: RefCell<Vec<u32>>,
}

impl MockVertexArray {
    fn new() -> Self {
        Self {
            binds: Cell::new(0),
            unbinds: Cell::new(0),
            attributes: RefCell::new(Vec::new()),
            enabled: RefCell::new(Vec::new()),
            disabled: RefCell::new(Vec::new()),
        }
    }
}

impl VertexArray for MockVertexArray {
    fn bind(&self) {
        self.binds.set(self.binds.get() + 1);
    }

    fn unbind(&self) {
        self.unbinds.set(self.unbinds.get() + 1);
    }

    fn set_attribute(&self, index: u32, components: i32) -> Result<()> {
        self.attributes.borrow_mut().push((index, components));
        Ok(())
    }

    fn enable_attribute(&self, index: u32) {
        self.enabled.borrow_mut().push(index);
    }

    fn disable_attribute(&self, index: u32) {
        self.disabled.borrow_mut().push(index);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub shader_stage: ShaderStage,
}

impl Shader for MockShader {
    fn stage(&self) -> ShaderStage {
        self.shader_stage
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock Program
// ============================================================================

pub struct MockProgram {
    pub program_uid: Uid,
    pub activations: Cell<u32>,
    pub deactivations: Cell<u32>,
    pub uploads: RefCell<Vec<Mat4>>,
    pub attached_stages: RefCell<Vec<ShaderStage>>,
    pub detach_count: Cell<u32>,
    pub link_state: Cell<LinkState>,
    pub torn_down: Cell<bool>,
    fail_link: bool,
    fail_validate: bool,
}

impl MockProgram {
    fn new(fail_link: bool, fail_validate: bool) -> Self {
        Self {
            program_uid: Uid::fresh(),
            activations: Cell::new(0),
            deactivations: Cell::new(0),
            uploads: RefCell::new(Vec::new()),
            attached_stages: RefCell::new(Vec::new()),
            detach_count: Cell::new(0),
            link_state: Cell::new(LinkState::Created),
            torn_down: Cell::new(false),
            fail_link,
            fail_validate,
        }
    }
}

impl Program for MockProgram {
    fn uid(&self) -> Uid {
        self.program_uid
    }

    fn attach(&self, shader: &Handle<dyn Shader>) -> Result<()> {
        let mock = shader
            .as_any()
            .downcast_ref::<MockShader>()
            .ok_or_else(|| Error::InvalidResource("shader from a different backend".to_string()))?;
        self.attached_stages.borrow_mut().push(mock.shader_stage);
        Ok(())
    }

    fn detach(&self, _shader: &Handle<dyn Shader>) {
        self.detach_count.set(self.detach_count.get() + 1);
    }

    fn link_and_validate(&self) -> Result<()> {
        if self.torn_down.get() {
            return Err(Error::InvalidResource("program already torn down".to_string()));
        }
        if self.fail_link {
            self.link_state.set(LinkState::LinkFailed);
            self.torn_down.set(true);
            return Err(Error::LinkFailed("mock link diagnostic".to_string()));
        }
        self.link_state.set(LinkState::Linked);
        if self.fail_validate {
            self.link_state.set(LinkState::ValidateFailed);
            self.torn_down.set(true);
            return Err(Error::ValidateFailed("mock validate diagnostic".to_string()));
        }
        self.link_state.set(LinkState::Validated);
        Ok(())
    }

    fn activate(&self) {
        if !self.torn_down.get() {
            self.activations.set(self.activations.get() + 1);
        }
    }

    fn deactivate(&self) {
        self.deactivations.set(self.deactivations.get() + 1);
    }

    fn upload_model_matrix(&self, matrix: &Mat4) -> Result<()> {
        self.uploads.borrow_mut().push(*matrix);
        Ok(())
    }

    fn state(&self) -> LinkState {
        self.link_state.get()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub desc: TextureDesc,
    pub binds: Cell<u32>,
    pub unbinds: Cell<u32>,
    pub uploaded_bytes: Cell<usize>,
}

impl Texture for MockTexture {
    fn bind(&self, _unit: u32) {
        self.binds.set(self.binds.get() + 1);
    }

    fn unbind(&self) {
        self.unbinds.set(self.unbinds.get() + 1);
    }

    fn set_data(&self, data: &[u8]) -> Result<()> {
        let expected =
            self.desc.width as usize * self.desc.height as usize * self.desc.format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::InvalidResource(format!(
                "texture data size {} does not match {}",
                data.len(),
                expected
            )));
        }
        self.uploaded_bytes.set(data.len());
        Ok(())
    }

    fn width(&self) -> u32 {
        self.desc.width
    }

    fn height(&self) -> u32 {
        self.desc.height
    }

    fn format(&self) -> TextureFormat {
        self.desc.format
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock RenderingContext
// ============================================================================

/// Call-recording rendering context used across the core unit tests.
pub struct MockRenderingContext {
    config: GraphicsConfig,
    /// When true, every `create_*` fails with a backend error
    pub fail_creates: bool,
    /// When true, shader creation fails at the compile step
    pub fail_compile: bool,
    /// Programs created after setting this fail their link stage
    pub fail_link: bool,
    /// Programs created after setting this fail their validate stage
    pub fail_validate: bool,
    pub frames_begun: Cell<u32>,
    pub frames_ended: Cell<u32>,
    pub frames_swapped: Cell<u32>,
    pub viewport: Cell<(u32, u32, u32, u32)>,
}

impl MockRenderingContext {
    pub fn new() -> Self {
        Self::with_config(GraphicsConfig::default())
    }

    pub fn with_config(config: GraphicsConfig) -> Self {
        Self {
            config,
            fail_creates: false,
            fail_compile: false,
            fail_link: false,
            fail_validate: false,
            frames_begun: Cell::new(0),
            frames_ended: Cell::new(0),
            frames_swapped: Cell::new(0),
            viewport: Cell::new((0, 0, 0, 0)),
        }
    }

    fn check_create(&self, what: &str) -> Result<()> {
        if self.fail_creates {
            Err(Error::BackendError(format!("mock {} allocation failure", what)))
        } else {
            Ok(())
        }
    }
}

impl Default for MockRenderingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderingContext for MockRenderingContext {
    fn mode(&self) -> RenderingMode {
        self.config.mode
    }

    fn activate_context(&mut self) -> Result<()> {
        Ok(())
    }

    fn deactivate_context(&mut self) {}

    fn begin_frame(&mut self) -> Result<()> {
        self.frames_begun.set(self.frames_begun.get() + 1);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames_ended.set(self.frames_ended.get() + 1);
        Ok(())
    }

    fn swap_frame(&mut self) -> Result<()> {
        self.frames_swapped.set(self.frames_swapped.get() + 1);
        Ok(())
    }

    fn update_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.viewport.set((x, y, width, height));
    }

    fn clear_screen(&mut self, _color: [f32; 4]) {}

    fn set_face_winding(&mut self, _clockwise: bool) {}

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Handle<dyn Buffer>> {
        self.check_create("buffer")?;
        Ok(Handle::from(Arc::new(MockBuffer::new(desc.kind)) as Arc<dyn Buffer>))
    }

    fn create_vertex_array(&mut self) -> Result<Handle<dyn VertexArray>> {
        self.check_create("vertex array")?;
        Ok(Handle::from(Arc::new(MockVertexArray::new()) as Arc<dyn VertexArray>))
    }

    fn create_program(&mut self) -> Result<Handle<dyn Program>> {
        self.check_create("program")?;
        Ok(Handle::from(
            Arc::new(MockProgram::new(self.fail_link, self.fail_validate)) as Arc<dyn Program>,
        ))
    }

    fn create_shader(
        &mut self,
        desc: &ShaderDesc,
        program: &Handle<dyn Program>,
    ) -> Result<Handle<dyn Shader>> {
        if !desc.stage.supported_by_gl(self.config.gl_version) {
            return Err(Error::UnsupportedShaderStage(format!(
                "{} stage requires GL {}.{}",
                desc.stage,
                desc.stage.min_gl_version().0,
                desc.stage.min_gl_version().1
            )));
        }
        self.check_create("shader")?;
        if self.fail_compile {
            return Err(Error::CompileFailed("mock compile diagnostic".to_string()));
        }
        let shader =
            Handle::from(Arc::new(MockShader { shader_stage: desc.stage }) as Arc<dyn Shader>);
        program.attach(&shader)?;
        Ok(shader)
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Handle<dyn Texture>> {
        self.check_create("texture")?;
        Ok(Handle::from(Arc::new(MockTexture {
            desc: *desc,
            binds: Cell::new(0),
            unbinds: Cell::new(0),
            uploaded_bytes: Cell::new(0),
        }) as Arc<dyn Texture>))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_context_tests.rs"]
mod tests;
