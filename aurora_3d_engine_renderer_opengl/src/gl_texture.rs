/// GlTexture - OpenGL implementation of the Texture trait

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use aurora_3d_engine::aurora3d::graphics::{Texture, TextureDesc, TextureFormat};
use aurora_3d_engine::aurora3d::{Error, Result};
use glow::HasContext;

use crate::gl_context::GlShared;

/// Map a texture format to (internal format, pixel format)
pub(crate) fn gl_texture_format(format: TextureFormat) -> (i32, u32) {
    match format {
        TextureFormat::Rgba8 => (glow::RGBA8 as i32, glow::RGBA),
        TextureFormat::Rgb8 => (glow::RGB8 as i32, glow::RGB),
    }
}

/// OpenGL 2D texture object
pub struct GlTexture {
    shared: Arc<GlShared>,
    /// Backend object id; None once torn down
    id: Cell<Option<glow::NativeTexture>>,
    desc: TextureDesc,
}

impl GlTexture {
    pub(crate) fn new(shared: Arc<GlShared>, id: glow::NativeTexture, desc: TextureDesc) -> Self {
        Self { shared, id: Cell::new(Some(id)), desc }
    }

    fn live_id(&self) -> Result<glow::NativeTexture> {
        self.id
            .get()
            .ok_or_else(|| Error::InvalidResource("texture already torn down".to_string()))
    }
}

impl Texture for GlTexture {
    fn bind(&self, unit: u32) {
        if let Some(id) = self.id.get() {
            unsafe {
                self.shared.gl.active_texture(glow::TEXTURE0 + unit);
                self.shared.gl.bind_texture(glow::TEXTURE_2D, Some(id));
            }
        }
    }

    fn unbind(&self) {
        unsafe {
            self.shared.gl.bind_texture(glow::TEXTURE_2D, None);
        }
    }

    fn set_data(&self, data: &[u8]) -> Result<()> {
        let id = self.live_id()?;
        let expected = self.desc.width as usize
            * self.desc.height as usize
            * self.desc.format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::InvalidResource(format!(
                "texture data size {} does not match {}x{} {} bytes per pixel",
                data.len(),
                self.desc.width,
                self.desc.height,
                self.desc.format.bytes_per_pixel()
            )));
        }

        let (internal_format, pixel_format) = gl_texture_format(self.desc.format);
        unsafe {
            self.shared.gl.bind_texture(glow::TEXTURE_2D, Some(id));
            self.shared.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format,
                self.desc.width as i32,
                self.desc.height as i32,
                0,
                pixel_format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data)),
            );
        }
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

impl Drop for GlTexture {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            unsafe {
                self.shared.gl.delete_texture(id);
            }
        }
    }
}
