//! CPU-side RGBA8 images.
//!
//! Decoding and encoding go through the [`image`](::image) crate; an
//! [`Image`] only keeps the raw pixels so they can be edited and uploaded
//! as a texture.

use std::path::Path;

use crate::{Error, Result, math::Color};

/// An RGBA8 image stored row by row, top row first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates a `width` x `height` image filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let pixels = fill.to_rgba8().repeat(width as usize * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Wraps raw RGBA8 pixel data.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::ImageSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Decodes an image file. Any format the `image` crate was built with is
    /// accepted; the result is always converted to RGBA8.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading image from {:?}", path);

        let decoded = ::image::open(path).map_err(|source| Error::Image {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Decodes an encoded image held in memory, guessing the format from its
    /// header.
    pub fn load_from_memory(bytes: &[u8]) -> Result<Self> {
        let decoded = ::image::load_from_memory(bytes).map_err(|source| Error::Image {
            path: "<memory>".to_string(),
            source,
        })?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    fn from_rgba(rgba: ::image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        log::debug!("Decoded {}x{} image", width, height);
        Self {
            pixels: rgba.into_raw(),
            width,
            height,
        }
    }

    /// Encodes the image to `path`; the format follows the extension.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let error = |source| Error::Image {
            path: path.display().to_string(),
            source,
        };

        let buffer = ::image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| {
                error(::image::ImageError::Parameter(
                    ::image::error::ParameterError::from_kind(
                        ::image::error::ParameterErrorKind::DimensionMismatch,
                    ),
                ))
            })?;
        buffer.save(path).map_err(error)?;
        log::info!("Saved {}x{} image to {:?}", self.width, self.height, path);
        Ok(())
    }

    /// Drops the pixel data, leaving a 0x0 image.
    pub fn free(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((x as usize + y as usize * self.width as usize) * 4)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.pixels[offset..offset + 4].copy_from_slice(&color.to_rgba8());
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Color> {
        let offset = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Ok(Color::from_rgba8(rgba))
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_pixel() {
        let image = Image::new(3, 2, Color::WHITE);
        assert_eq!(image.size(), (3, 2));
        assert_eq!(image.pixels().len(), 3 * 2 * 4);
        assert!(image.pixels().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut image = Image::new(4, 4, Color::BLACK);
        let red = Color::rgb(1.0, 0.0, 0.0);
        image.set_pixel(3, 2, red).unwrap();
        assert_eq!(image.pixel(3, 2).unwrap(), red);
        assert_eq!(image.pixel(2, 3).unwrap(), Color::BLACK);
        assert_eq!(&image.pixels()[(3 + 2 * 4) * 4..][..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_out_of_bounds_access_fails() {
        let mut image = Image::new(2, 2, Color::BLACK);
        assert!(matches!(
            image.pixel(2, 0),
            Err(Error::PixelOutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(image.set_pixel(0, 5, Color::WHITE).is_err());
    }

    #[test]
    fn test_from_rgba8_checks_length() {
        assert!(Image::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Image::from_rgba8(2, 2, vec![0; 15]),
            Err(Error::ImageSize {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_free_empties_image() {
        let mut image = Image::new(8, 8, Color::WHITE);
        image.free();
        assert!(image.is_empty());
        assert_eq!(image.size(), (0, 0));
        assert!(image.pixel(0, 0).is_err());
    }

    #[test]
    fn test_save_and_reload_png() {
        let path = std::env::temp_dir().join(format!("ogf-{}-image.png", std::process::id()));
        let mut image = Image::new(2, 2, Color::WHITE);
        image.set_pixel(1, 1, Color::rgb(0.0, 0.0, 1.0)).unwrap();
        image.save_to_file(&path).unwrap();

        let loaded = Image::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = Image::load_from_file("ogf-no-such-image.png").unwrap_err();
        assert!(err.to_string().contains("ogf-no-such-image.png"));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(Image::load_from_memory(b"definitely not an image").is_err());
    }
}
