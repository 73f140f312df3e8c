//! In-memory renderer backend
//!
//! [`SoftwareDriver`] keeps every texture as a CPU [`Image`] and records
//! draw calls instead of rasterizing them. It backs headless tools and the
//! test suite, and serves as the reference for what a GPU backend must do
//! to satisfy [`VideoDriver`].

use crate::graphics::driver::{Blit, DriverError, Texture, TextureId, VideoDriver};
use crate::graphics::image::{ColorFormat, Image};
use crate::graphics::rect::Extent;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// A texture held by the software backend
#[derive(Debug)]
struct StoredTexture {
    texture: Texture,
    image: Image,
}

/// A recorded blit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: Texture,
    pub blit: Blit,
}

/// Renderer backend storing textures in system memory
#[derive(Debug)]
pub struct SoftwareDriver {
    textures: HashMap<TextureId, StoredTexture>,
    names: HashMap<String, TextureId>,
    next_id: u32,
    /// Whether textures may be read back into images
    readback: bool,
    /// Optional cap on bytes held by textures and transient images
    byte_budget: Option<usize>,
    texture_bytes: usize,
    draw_calls: Vec<DrawCall>,
    images_created: usize,
    readbacks: usize,
}

impl SoftwareDriver {
    /// Create a backend with readback enabled and no memory budget
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            names: HashMap::new(),
            next_id: 1,
            readback: true,
            byte_budget: None,
            texture_bytes: 0,
            draw_calls: Vec::new(),
            images_created: 0,
            readbacks: 0,
        }
    }

    /// Enable or disable texture readback
    pub fn with_readback(mut self, readback: bool) -> Self {
        self.readback = readback;
        self
    }

    /// Limit the bytes this backend may hand out
    pub fn with_byte_budget(mut self, bytes: usize) -> Self {
        self.byte_budget = Some(bytes);
        self
    }

    /// Register an image as a texture (same as [`VideoDriver::add_texture`])
    pub fn upload(&mut self, name: &str, image: &Image) -> Result<Texture> {
        self.add_texture(name, image)
    }

    /// Pixels stored for a texture
    pub fn texture_image(&self, texture: &Texture) -> Option<&Image> {
        self.textures.get(&texture.id()).map(|stored| &stored.image)
    }

    /// Check if a texture handle still refers to a live texture
    pub fn contains(&self, texture: &Texture) -> bool {
        self.textures.contains_key(&texture.id())
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Bytes currently held by live textures
    pub fn texture_bytes(&self) -> usize {
        self.texture_bytes
    }

    /// Draw calls recorded so far
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Drain the recorded draw calls
    pub fn take_draw_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.draw_calls)
    }

    /// Number of images allocated through [`VideoDriver::create_image`]
    pub fn images_created(&self) -> usize {
        self.images_created
    }

    /// Number of successful texture readbacks
    pub fn readbacks(&self) -> usize {
        self.readbacks
    }

    fn fits_budget(&self, bytes: usize) -> bool {
        match self.byte_budget {
            Some(budget) => self.texture_bytes.saturating_add(bytes) <= budget,
            None => true,
        }
    }

    fn allocate_id(&mut self) -> Result<TextureId> {
        let id = NonZeroU32::new(self.next_id).context("Texture id space exhausted")?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(TextureId::new(id))
    }
}

impl Default for SoftwareDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoDriver for SoftwareDriver {
    fn create_image(&mut self, format: ColorFormat, size: Extent) -> Result<Image> {
        let bytes = usize::try_from(size.area())
            .unwrap_or(usize::MAX)
            .saturating_mul(format.bytes_per_pixel() as usize);
        if !self.fits_budget(bytes) {
            return Err(DriverError::ImageAllocation {
                width: size.width,
                height: size.height,
            }
            .into());
        }
        let image = Image::new(format, size.width, size.height)?;
        self.images_created += 1;
        Ok(image)
    }

    fn texture_to_image(&mut self, texture: &Texture) -> Result<Option<Image>> {
        if !self.readback {
            return Ok(None);
        }
        let stored = self
            .textures
            .get(&texture.id())
            .with_context(|| format!("Texture '{}' is not loaded", texture.name()))?;
        self.readbacks += 1;
        Ok(Some(stored.image.clone()))
    }

    fn find_texture(&self, name: &str) -> Option<Texture> {
        let id = self.names.get(name)?;
        self.textures.get(id).map(|stored| stored.texture.clone())
    }

    fn add_texture(&mut self, name: &str, image: &Image) -> Result<Texture> {
        if self.names.contains_key(name) {
            return Err(DriverError::DuplicateTextureName {
                name: name.to_string(),
            }
            .into());
        }
        let bytes = image.data().len();
        if !self.fits_budget(bytes) {
            return Err(DriverError::TextureRegistration {
                name: name.to_string(),
            }
            .into());
        }

        let id = self.allocate_id()?;
        let texture = Texture::new(id, name, image.extent(), image.format());
        self.textures.insert(
            id,
            StoredTexture {
                texture: texture.clone(),
                image: image.clone(),
            },
        );
        self.names.insert(name.to_string(), id);
        self.texture_bytes += bytes;
        log::debug!("Registered texture '{}' ({})", name, id);
        Ok(texture)
    }

    fn remove_texture(&mut self, texture: &Texture) {
        match self.textures.remove(&texture.id()) {
            Some(stored) => {
                self.names.remove(stored.texture.name());
                self.texture_bytes = self.texture_bytes.saturating_sub(stored.image.data().len());
            }
            None => log::warn!("Trying to remove unknown texture '{}'", texture.name()),
        }
    }

    fn draw_2d_image(&mut self, texture: &Texture, blit: &Blit) {
        self.draw_calls.push(DrawCall {
            texture: texture.clone(),
            blit: blit.clone(),
        });
    }
}
