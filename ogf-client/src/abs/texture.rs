//! GPU textures.
//!
//! The module provides the [`Texture`] struct, an RGBA8 OpenGL texture
//! uploaded from an [`Image`].

use std::{path::Path, sync::Arc};

use glow::HasContext;
use ogf_core::image::Image;

use crate::{Error, Result};

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: Option<glow::Texture>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes an image file and uploads it.
    pub fn load_from_file(gl: &Arc<glow::Context>, path: impl AsRef<Path>) -> Result<Self> {
        let image = Image::load_from_file(path)?;
        Self::load_from_image(gl, &image)
    }

    /// Uploads `image` with repeat wrapping, nearest filtering and mipmaps.
    pub fn load_from_image(gl: &Arc<glow::Context>, image: &Image) -> Result<Self> {
        let (width, height) = image.size();
        unsafe {
            let texture = gl.create_texture().map_err(Error::Gl)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::NEAREST_MIPMAP_NEAREST as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::NEAREST as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(image.pixels())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);

            log::debug!("Uploaded {}x{} texture", width, height);

            Ok(Self {
                gl: Arc::clone(gl),
                id: Some(texture),
                width,
                height,
            })
        }
    }

    /// Releases the GPU texture now instead of on drop. Does nothing if it
    /// was already freed.
    pub fn free(&mut self) {
        if let Some(id) = self.id.take() {
            unsafe {
                self.gl.delete_texture(id);
            }
        }
    }

    /// Binds the texture to the specified texture unit. Binds nothing after
    /// [`Texture::free`].
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, self.id);
        }
    }

    pub fn native_handle(&self) -> Option<glow::Texture> {
        self.id
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.free();
    }
}
