//! CPU-side images
//!
//! An [`Image`] is a mutable grid of 8-bit-per-channel pixels that the
//! scaling pipeline can read and write directly. It is the software
//! counterpart of a renderer texture: textures are decoded into images,
//! filtered, and registered back as new textures.
//!
//! Key concepts:
//! - ColorFormat: byte order of the four channels in memory
//! - Color: a single pixel, always expressed as (r, g, b, a)
//! - Image: the owned pixel buffer, row-major, tightly packed

use crate::graphics::rect::Extent;
use anyhow::Result;

// ==============================================================================
// Color Format
// ==============================================================================

/// Channel layout of a 32-bit pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// Red, green, blue, alpha byte order
    #[default]
    Rgba8,
    /// Blue, green, red, alpha byte order (common on Windows)
    Bgra8,
}

impl ColorFormat {
    /// Number of bytes per pixel
    pub fn bytes_per_pixel(&self) -> u32 {
        4
    }

    #[inline]
    fn decode(&self, px: &[u8]) -> Color {
        match self {
            ColorFormat::Rgba8 => Color::new(px[0], px[1], px[2], px[3]),
            ColorFormat::Bgra8 => Color::new(px[2], px[1], px[0], px[3]),
        }
    }

    #[inline]
    fn encode(&self, color: Color, px: &mut [u8]) {
        let bytes = match self {
            ColorFormat::Rgba8 => [color.r, color.g, color.b, color.a],
            ColorFormat::Bgra8 => [color.b, color.g, color.r, color.a],
        };
        px.copy_from_slice(&bytes);
    }
}

// ==============================================================================
// Color
// ==============================================================================

/// A single 8-bit-per-channel pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

// ==============================================================================
// Image
// ==============================================================================

/// Errors related to image operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Owned pixel buffer
///
/// Zero-sized images are valid and simply hold no pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    format: ColorFormat,
    width: u32,
    height: u32,
    /// Row-major, tightly packed pixel data
    data: Vec<u8>,
}

impl Image {
    /// Create a transparent-black image
    pub fn new(format: ColorFormat, width: u32, height: u32) -> Result<Self> {
        let len = Self::buffer_len(format, width, height)?;
        Ok(Self {
            format,
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing pixel buffer laid out in `format`
    pub fn from_raw(format: ColorFormat, width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_len(format, width, height)?;
        if data.len() != expected {
            return Err(ImageError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self {
            format,
            width,
            height,
            data,
        })
    }

    /// Create an image filled with a single color
    pub fn filled(format: ColorFormat, width: u32, height: u32, color: Color) -> Result<Self> {
        let mut image = Self::new(format, width, height)?;
        image.fill(color);
        Ok(image)
    }

    fn buffer_len(format: ColorFormat, width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(format.bytes_per_pixel() as usize))
            .ok_or_else(|| ImageError::InvalidDimensions { width, height }.into())
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Get bytes per row
    pub fn bytes_per_row(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel() as usize
    }

    /// Raw pixel data in this image's format
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.bytes_per_row() + x as usize * 4
    }

    /// Read a pixel
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let off = self.offset(x, y);
        self.format.decode(&self.data[off..off + 4])
    }

    /// Write a pixel
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let off = self.offset(x, y);
        self.format.encode(color, &mut self.data[off..off + 4]);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let mut px = [0u8; 4];
        self.format.encode(color, &mut px);
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Copy this image into the top-left corner of `dst`
    ///
    /// The copy is clipped to the overlap of both images. Pixels of `dst`
    /// outside the copied area are left untouched.
    pub fn copy_to(&self, dst: &mut Image) {
        let width = self.width.min(dst.width);
        let height = self.height.min(dst.height);

        if self.format == dst.format {
            let row_bytes = width as usize * 4;
            for y in 0..height {
                let src_off = self.offset(0, y);
                let dst_off = dst.offset(0, y);
                dst.data[dst_off..dst_off + row_bytes]
                    .copy_from_slice(&self.data[src_off..src_off + row_bytes]);
            }
            return;
        }

        for y in 0..height {
            for x in 0..width {
                dst.set_pixel(x, y, self.pixel(x, y));
            }
        }
    }

    /// Convert into an `image` crate buffer
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixel(x, y);
            image::Rgba([c.r, c.g, c.b, c.a])
        })
    }
}

impl From<image::RgbaImage> for Image {
    fn from(buffer: image::RgbaImage) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            format: ColorFormat::Rgba8,
            width,
            height,
            data: buffer.into_raw(),
        }
    }
}
