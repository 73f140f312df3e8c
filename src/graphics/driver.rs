//! Renderer capability contract
//!
//! The scaling cache never talks to a GPU API directly. Everything it needs
//! from the host renderer goes through [`VideoDriver`]: allocating images,
//! reading a texture back into an image, registering an image as a named
//! texture, looking textures up and removing them, and issuing the final
//! 2D blit. Images are plain owned values and are released by dropping them.

use crate::graphics::image::{Color, ColorFormat, Image};
use crate::graphics::rect::{Extent, Rect};
use anyhow::Result;
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Renderer-assigned texture identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(NonZeroU32);

impl TextureId {
    pub fn new(id: NonZeroU32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a GPU-resident texture
///
/// Opaque apart from its name, size and pixel format. Two handles are the
/// same texture exactly when their ids match. A handle stays valid until
/// the texture is removed from the driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
    id: TextureId,
    name: Arc<str>,
    size: Extent,
    format: ColorFormat,
}

impl Texture {
    pub fn new(id: TextureId, name: &str, size: Extent, format: ColorFormat) -> Self {
        Self {
            id,
            name: Arc::from(name),
            size,
            format,
        }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Name the texture was registered under, unique within the driver
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registration name as a shared string, cloned without allocating
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Pixel dimensions of the stored texture
    pub fn size(&self) -> Extent {
        self.size
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }
}

/// Errors reported by a renderer backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("Cannot allocate {width}x{height} image")]
    ImageAllocation { width: u32, height: u32 },

    #[error("Cannot register texture '{name}'")]
    TextureRegistration { name: String },

    #[error("Texture name '{name}' already in use")]
    DuplicateTextureName { name: String },
}

/// Parameters of a single 2D blit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blit {
    /// Screen rectangle to draw into
    pub dst_rect: Rect,
    /// Texture region to sample from
    pub src_rect: Rect,
    /// Optional screen clip rectangle
    pub clip_rect: Option<Rect>,
    /// Optional per-corner vertex colors
    pub colors: Option<[Color; 4]>,
    /// Whether to blend using the texture's alpha channel
    pub use_alpha: bool,
}

/// Capabilities the scaling pipeline needs from the host renderer
pub trait VideoDriver {
    /// Allocate an empty (transparent black) image
    fn create_image(&mut self, format: ColorFormat, size: Extent) -> Result<Image>;

    /// Read a texture back into an image
    ///
    /// Returns `Ok(None)` when the backend cannot read textures back.
    fn texture_to_image(&mut self, texture: &Texture) -> Result<Option<Image>>;

    /// Find a texture by its registration name
    fn find_texture(&self, name: &str) -> Option<Texture>;

    /// Upload `image` as a new texture registered under `name`
    fn add_texture(&mut self, name: &str, image: &Image) -> Result<Texture>;

    /// Release a texture; its handle must not be used afterwards
    fn remove_texture(&mut self, texture: &Texture);

    /// Draw a region of `texture` onto the screen
    fn draw_2d_image(&mut self, texture: &Texture, blit: &Blit);
}
