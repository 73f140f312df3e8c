//! Cache of pre-scaled GUI textures
//!
//! Scaling a texture in software is far too slow to do every frame, so the
//! result of each distinct (texture, source rect, output size) request is
//! registered as its own texture and kept until [`ScaledTextureCache::clear`].
//!
//! Two levels are kept:
//! - images: the source texture decoded into an [`Image`], one per texture
//!   name. Some backends read textures back slowly or not at all, so each is
//!   decoded at most once, or inserted up front with
//!   [`ScaledTextureCache::insert_image`].
//! - textures: the scaled results, keyed by [`ScaleCacheKey`].
//!
//! Entries are never evicted or replaced individually. Everything is dropped
//! at once by `clear`, which the host must call before it invalidates its
//! own textures (e.g. when leaving a game session). Handles returned by
//! [`ScaledTextureCache::get_scaled`] are only valid until then.

use crate::config::ScalingConfig;
use crate::graphics::driver::{Texture, VideoDriver};
use crate::graphics::image::Image;
use crate::graphics::rect::{Extent, Point, Rect};
use crate::graphics::scaling::{pad_to_power_of_two, scale_area_weighted};
use crate::graphics::transparency::{clean_transparent, THRESHOLD_BLENDED};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Separator between the source texture name and the rect signature
pub const KEY_TAG: &str = "@guiScalingFilter:";

// ==============================================================================
// Cache Key
// ==============================================================================

/// Identity of one scaled texture
///
/// Only the destination size takes part; where the result is drawn does not
/// change its pixels. Rect sizes are kept signed, exactly as requested.
///
/// The source name is shared with the [`Texture`] it came from, so building
/// a key for a lookup does not allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaleCacheKey {
    source: Arc<str>,
    src_x: i32,
    src_y: i32,
    src_w: i64,
    src_h: i64,
    dst_w: i64,
    dst_h: i64,
}

impl ScaleCacheKey {
    pub fn new(source: impl Into<Arc<str>>, src_rect: Rect, dst_rect: Rect) -> Self {
        Self {
            source: source.into(),
            src_x: src_rect.upper_left.x,
            src_y: src_rect.upper_left.y,
            src_w: src_rect.width(),
            src_h: src_rect.height(),
            dst_w: dst_rect.width(),
            dst_h: dst_rect.height(),
        }
    }

    /// Name of the texture this key was derived from
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Renders the registration name of the scaled texture
impl fmt::Display for ScaleCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}:{}:{}:{}:{}:{}",
            self.source, KEY_TAG, self.src_x, self.src_y, self.src_w, self.src_h, self.dst_w, self.dst_h
        )
    }
}

// ==============================================================================
// Padding
// ==============================================================================

/// How scaled images are sized before becoming textures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingStrategy {
    /// Texture is exactly the destination size
    None,
    /// Texture dimensions are rounded up to powers of two, content at the
    /// top-left corner
    PowerOfTwo,
}

impl PaddingStrategy {
    /// Strategy required by the platform being compiled for
    pub fn for_target() -> Self {
        if cfg!(target_os = "android") {
            PaddingStrategy::PowerOfTwo
        } else {
            PaddingStrategy::None
        }
    }

    /// Texture size used for a scaled image of `size`
    pub fn padded_extent(&self, size: Extent) -> Extent {
        match self {
            PaddingStrategy::None => size,
            PaddingStrategy::PowerOfTwo => pad_to_power_of_two(size),
        }
    }
}

impl Default for PaddingStrategy {
    fn default() -> Self {
        Self::for_target()
    }
}

// ==============================================================================
// Scaled Texture Cache
// ==============================================================================

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleCacheStats {
    /// Requests answered from the texture cache
    pub hits: u64,
    /// Requests that had to build (or adopt) a texture
    pub misses: u64,
    /// Misses answered with the unscaled texture
    pub fallbacks: u64,
    /// Images currently cached
    pub images: usize,
    /// Scaled textures currently cached
    pub textures: usize,
}

/// Two-level cache of decoded images and scaled textures
///
/// Owned by the render session and used from the rendering thread only.
/// The renderer is passed into each call rather than stored.
pub struct ScaledTextureCache {
    config: ScalingConfig,
    padding: PaddingStrategy,
    /// Decoded source images by texture name
    images: HashMap<String, Image>,
    /// Scaled textures by request
    textures: HashMap<ScaleCacheKey, Texture>,
    hits: u64,
    misses: u64,
    fallbacks: u64,
}

impl ScaledTextureCache {
    pub fn new(config: ScalingConfig, padding: PaddingStrategy) -> Self {
        Self {
            config,
            padding,
            images: HashMap::new(),
            textures: HashMap::new(),
            hits: 0,
            misses: 0,
            fallbacks: 0,
        }
    }

    /// Cache using the padding the current platform needs
    pub fn with_config(config: ScalingConfig) -> Self {
        Self::new(config, PaddingStrategy::for_target())
    }

    pub fn config(&self) -> ScalingConfig {
        self.config
    }

    pub fn padding(&self) -> PaddingStrategy {
        self.padding
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Check if a decoded image is cached for a texture name
    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn image_cache_len(&self) -> usize {
        self.images.len()
    }

    pub fn texture_cache_len(&self) -> usize {
        self.textures.len()
    }

    pub fn stats(&self) -> ScaleCacheStats {
        ScaleCacheStats {
            hits: self.hits,
            misses: self.misses,
            fallbacks: self.fallbacks,
            images: self.images.len(),
            textures: self.textures.len(),
        }
    }

    /// Store a copy of `image` as the decoded form of texture `name`
    ///
    /// Lets the host skip texture readback when it still has the pixels at
    /// load time. Does nothing while scaling is disabled. Replaces any image
    /// already cached under `name`; textures scaled from the old image stay
    /// cached until the next clear.
    pub fn insert_image(&mut self, name: &str, image: &Image) {
        if !self.config.enabled {
            return;
        }
        self.images.insert(name.to_string(), image.clone());
    }

    /// Get a high-quality pre-scaled version of `src_rect` of `texture`,
    /// sized for `dst_rect`.
    ///
    /// Returns `texture` itself when scaling is disabled, when the
    /// destination is empty, or when no source image is available. Errors
    /// only when the renderer cannot allocate the image or texture; no cache
    /// entry is written in that case.
    pub fn get_scaled<D>(
        &mut self,
        driver: &mut D,
        texture: &Texture,
        src_rect: Rect,
        dst_rect: Rect,
    ) -> Result<Texture>
    where
        D: VideoDriver + ?Sized,
    {
        if !self.config.enabled {
            return Ok(texture.clone());
        }

        let dst_size = dst_rect.extent();
        if dst_size.is_empty() {
            return Ok(texture.clone());
        }

        let key = ScaleCacheKey::new(texture.shared_name(), src_rect, dst_rect);
        if let Some(scaled) = self.textures.get(&key) {
            self.hits += 1;
            return Ok(scaled.clone());
        }
        self.misses += 1;

        let name = key.to_string();
        if let Some(existing) = driver.find_texture(&name) {
            log::debug!("Adopting already registered texture '{}'", name);
            self.textures.insert(key, existing.clone());
            return Ok(existing);
        }

        if !self.images.contains_key(texture.name()) {
            if !self.config.texture_to_image {
                return Ok(self.fall_back(texture, "texture readback disabled"));
            }
            let decoded = driver
                .texture_to_image(texture)
                .with_context(|| format!("Failed to read back texture '{}'", texture.name()))?;
            match decoded {
                Some(image) => {
                    self.images.insert(texture.name().to_string(), image);
                }
                None => return Ok(self.fall_back(texture, "texture readback unsupported")),
            }
        }
        let Some(source) = self.images.get_mut(texture.name()) else {
            return Ok(self.fall_back(texture, "no source image"));
        };

        clean_transparent(source, THRESHOLD_BLENDED);

        let mut scaled = driver
            .create_image(source.format(), dst_size)
            .with_context(|| format!("Failed to allocate image for '{}'", name))?;
        scale_area_weighted(source, src_rect, &mut scaled, Point::ORIGIN)?;

        let padded_size = self.padding.padded_extent(dst_size);
        let upload = if padded_size != dst_size {
            let mut padded = driver
                .create_image(scaled.format(), padded_size)
                .with_context(|| format!("Failed to allocate padded image for '{}'", name))?;
            scaled.copy_to(&mut padded);
            padded
        } else {
            scaled
        };

        let result = driver
            .add_texture(&name, &upload)
            .with_context(|| format!("Failed to register scaled texture '{}'", name))?;
        log::debug!(
            "Scaled '{}' to {}x{} as {}",
            texture.name(),
            dst_size.width,
            dst_size.height,
            result.id()
        );
        self.textures.insert(key, result.clone());
        Ok(result)
    }

    /// Scale a whole texture to `width` x `height`, as used when creating
    /// GUI image buttons
    pub fn scaled_for_button<D>(
        &mut self,
        driver: &mut D,
        texture: &Texture,
        width: i32,
        height: i32,
    ) -> Result<Texture>
    where
        D: VideoDriver + ?Sized,
    {
        self.get_scaled(
            driver,
            texture,
            Rect::from_extent(texture.size()),
            Rect::from_xywh(0, 0, width, height),
        )
    }

    /// Release every cached image and texture
    ///
    /// Must run before the renderer drops its own textures, and never
    /// concurrently with `get_scaled`.
    pub fn clear<D>(&mut self, driver: &mut D)
    where
        D: VideoDriver + ?Sized,
    {
        log::debug!(
            "Clearing scale cache: {} images, {} textures",
            self.images.len(),
            self.textures.len()
        );
        self.images.clear();
        for (_, texture) in self.textures.drain() {
            driver.remove_texture(&texture);
        }
    }

    fn fall_back(&mut self, texture: &Texture, reason: &str) -> Texture {
        self.fallbacks += 1;
        log::debug!("Drawing '{}' unscaled: {}", texture.name(), reason);
        texture.clone()
    }
}

impl fmt::Debug for ScaledTextureCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledTextureCache")
            .field("config", &self.config)
            .field("padding", &self.padding)
            .field("stats", &self.stats())
            .finish()
    }
}

impl Drop for ScaledTextureCache {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            log::warn!(
                "Scale cache dropped with {} registered textures; call clear() first",
                self.textures.len()
            );
        }
    }
}

// ==============================================================================
// Tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::driver::DriverError;
    use crate::graphics::image::{Color, ColorFormat};
    use crate::graphics::software::SoftwareDriver;
    use proptest::prelude::*;

    const RED: Color = Color::opaque(255, 0, 0);

    fn setup(config: ScalingConfig, padding: PaddingStrategy) -> (ScaledTextureCache, SoftwareDriver, Texture) {
        let mut driver = SoftwareDriver::new();
        let image = Image::filled(ColorFormat::Rgba8, 10, 10, RED).unwrap();
        let texture = driver.upload("red.png", &image).unwrap();
        (ScaledTextureCache::new(config, padding), driver, texture)
    }

    fn full() -> Rect {
        Rect::from_xywh(0, 0, 10, 10)
    }

    #[test]
    fn test_key_format() {
        let key = ScaleCacheKey::new(
            "gui/bg.png",
            Rect::from_xywh(1, 2, 30, 40),
            Rect::from_xywh(500, 600, 70, 80),
        );
        assert_eq!(key.to_string(), "gui/bg.png@guiScalingFilter:1:2:30:40:70:80");
        assert_eq!(key.source(), "gui/bg.png");
    }

    #[test]
    fn test_key_ignores_destination_origin() {
        let a = ScaleCacheKey::new("t", full(), Rect::from_xywh(0, 0, 20, 20));
        let b = ScaleCacheKey::new("t", full(), Rect::from_xywh(35, -7, 20, 20));
        let c = ScaleCacheKey::new("t", full(), Rect::from_xywh(0, 0, 20, 21));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_keeps_mirrored_sizes() {
        let key = ScaleCacheKey::new(
            "t",
            Rect::from_xywh(10, 0, -10, 10),
            Rect::from_xywh(0, 0, 5, 5),
        );
        assert_eq!(key.to_string(), "t@guiScalingFilter:10:0:-10:10:5:5");
    }

    #[test]
    fn test_padding_strategy() {
        assert_eq!(
            PaddingStrategy::None.padded_extent(Extent::new(100, 60)),
            Extent::new(100, 60)
        );
        assert_eq!(
            PaddingStrategy::PowerOfTwo.padded_extent(Extent::new(100, 60)),
            Extent::new(128, 64)
        );
        assert_eq!(PaddingStrategy::default(), PaddingStrategy::for_target());
    }

    #[test]
    fn test_disabled_is_identity() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::disabled(), PaddingStrategy::None);

        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 37, 3))
            .unwrap();

        assert_eq!(result, texture);
        assert_eq!(driver.texture_count(), 1);
        assert_eq!(driver.readbacks(), 0);
        assert_eq!(cache.stats(), ScaleCacheStats::default());
    }

    #[test]
    fn test_miss_then_hit() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);
        let dst = Rect::from_xywh(0, 0, 20, 20);

        let first = cache.get_scaled(&mut driver, &texture, full(), dst).unwrap();
        let images = driver.images_created();
        let second = cache.get_scaled(&mut driver, &texture, full(), dst).unwrap();

        assert_ne!(first, texture);
        assert_eq!(first, second);
        assert_eq!(first.name(), "red.png@guiScalingFilter:0:0:10:10:20:20");
        assert_eq!(driver.images_created(), images);
        assert_eq!(driver.readbacks(), 1);

        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
        assert_eq!((stats.images, stats.textures), (1, 1));
        cache.clear(&mut driver);
    }

    #[test]
    fn test_origin_shares_entry() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);

        let a = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 15, 15))
            .unwrap();
        let b = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(300, 40, 15, 15))
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(cache.texture_cache_len(), 1);
        cache.clear(&mut driver);
    }

    #[test]
    fn test_one_image_many_textures() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);

        cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 5, 5))
            .unwrap();
        cache
            .get_scaled(&mut driver, &texture, Rect::from_xywh(0, 0, 5, 5), Rect::from_xywh(0, 0, 5, 5))
            .unwrap();
        cache.scaled_for_button(&mut driver, &texture, 32, 16).unwrap();

        assert_eq!(cache.image_cache_len(), 1);
        assert_eq!(cache.texture_cache_len(), 3);
        assert_eq!(driver.readbacks(), 1);
        cache.clear(&mut driver);
    }

    #[test]
    fn test_readback_disabled_falls_back() {
        let config = ScalingConfig {
            enabled: true,
            texture_to_image: false,
        };
        let (mut cache, mut driver, texture) = setup(config, PaddingStrategy::None);

        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 20, 20))
            .unwrap();

        assert_eq!(result, texture);
        assert_eq!(driver.readbacks(), 0);
        assert_eq!(cache.texture_cache_len(), 0);
        assert_eq!(cache.stats().fallbacks, 1);
    }

    #[test]
    fn test_readback_unsupported_falls_back() {
        let mut driver = SoftwareDriver::new().with_readback(false);
        let texture = driver
            .upload("a.png", &Image::filled(ColorFormat::Rgba8, 2, 2, RED).unwrap())
            .unwrap();
        let mut cache = ScaledTextureCache::new(ScalingConfig::enabled(), PaddingStrategy::None);

        let result = cache
            .get_scaled(&mut driver, &texture, Rect::from_xywh(0, 0, 2, 2), Rect::from_xywh(0, 0, 4, 4))
            .unwrap();

        assert_eq!(result, texture);
        assert_eq!(cache.image_cache_len(), 0);
        assert_eq!(cache.texture_cache_len(), 0);
    }

    #[test]
    fn test_inserted_image_skips_readback() {
        let config = ScalingConfig {
            enabled: true,
            texture_to_image: false,
        };
        let (mut cache, mut driver, texture) = setup(config, PaddingStrategy::None);
        let blue = Image::filled(ColorFormat::Rgba8, 10, 10, Color::opaque(0, 0, 255)).unwrap();

        cache.insert_image("red.png", &blue);
        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 5, 5))
            .unwrap();

        assert_ne!(result, texture);
        assert_eq!(driver.readbacks(), 0);
        let pixels = driver.texture_image(&result).unwrap();
        assert_eq!(pixels.pixel(4, 4), Color::opaque(0, 0, 255));
        cache.clear(&mut driver);
    }

    #[test]
    fn test_insert_image_disabled_is_noop() {
        let mut cache = ScaledTextureCache::new(ScalingConfig::disabled(), PaddingStrategy::None);
        let image = Image::new(ColorFormat::Rgba8, 1, 1).unwrap();

        cache.insert_image("a", &image);

        assert!(!cache.has_image("a"));
    }

    #[test]
    fn test_insert_image_copies() {
        let mut cache = ScaledTextureCache::new(ScalingConfig::enabled(), PaddingStrategy::None);
        let mut image = Image::new(ColorFormat::Rgba8, 1, 1).unwrap();

        cache.insert_image("a", &image);
        image.fill(Color::WHITE);

        assert!(cache.has_image("a"));
        assert_eq!(cache.images["a"].pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_power_of_two_padding() {
        let (mut cache, mut driver, texture) =
            setup(ScalingConfig::enabled(), PaddingStrategy::PowerOfTwo);

        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 100, 60))
            .unwrap();

        assert_eq!(result.size(), Extent::new(128, 64));
        let pixels = driver.texture_image(&result).unwrap();
        assert_eq!(pixels.pixel(0, 0), RED);
        assert_eq!(pixels.pixel(99, 59), RED);
        assert_eq!(pixels.pixel(100, 0), Color::TRANSPARENT);
        assert_eq!(pixels.pixel(0, 60), Color::TRANSPARENT);
        cache.clear(&mut driver);
    }

    #[test]
    fn test_transparent_edges_are_corrected_before_scaling() {
        let mut driver = SoftwareDriver::new();
        let mut image = Image::new(ColorFormat::Rgba8, 2, 1).unwrap();
        image.set_pixel(0, 0, RED);
        let texture = driver.upload("edge.png", &image).unwrap();
        let mut cache = ScaledTextureCache::new(ScalingConfig::enabled(), PaddingStrategy::None);

        let result = cache
            .get_scaled(&mut driver, &texture, Rect::from_xywh(0, 0, 2, 1), Rect::from_xywh(0, 0, 1, 1))
            .unwrap();

        // Without the correction the black transparent pixel would darken red to 128.
        let pixels = driver.texture_image(&result).unwrap();
        assert_eq!(pixels.pixel(0, 0), Color::new(255, 0, 0, 128));
        cache.clear(&mut driver);
    }

    #[test]
    fn test_empty_destination_is_identity() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);

        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(4, 4, 0, 10))
            .unwrap();

        assert_eq!(result, texture);
        assert_eq!(cache.texture_cache_len(), 0);
    }

    #[test]
    fn test_allocation_failure_propagates() {
        let mut driver = SoftwareDriver::new().with_byte_budget(10 * 10 * 4 + 64);
        let texture = driver
            .upload("red.png", &Image::filled(ColorFormat::Rgba8, 10, 10, RED).unwrap())
            .unwrap();
        let mut cache = ScaledTextureCache::new(ScalingConfig::enabled(), PaddingStrategy::None);

        let err = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 50, 50))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DriverError>(),
            Some(DriverError::ImageAllocation { .. })
        ));
        assert_eq!(cache.texture_cache_len(), 0);

        // A request that fits still works afterwards.
        let small = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 4, 4))
            .unwrap();
        assert_eq!(small.size(), Extent::new(4, 4));
        cache.clear(&mut driver);
    }

    #[test]
    fn test_adopts_registered_texture() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);
        let name = ScaleCacheKey::new("red.png", full(), Rect::from_xywh(0, 0, 3, 3)).to_string();
        let existing = driver
            .upload(&name, &Image::new(ColorFormat::Rgba8, 3, 3).unwrap())
            .unwrap();

        let result = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 3, 3))
            .unwrap();

        assert_eq!(result, existing);
        assert_eq!(driver.readbacks(), 0);
        cache.clear(&mut driver);
    }

    #[test]
    fn test_clear_releases_everything() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);
        let a = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 20, 20))
            .unwrap();
        let b = cache
            .get_scaled(&mut driver, &texture, full(), Rect::from_xywh(0, 0, 7, 7))
            .unwrap();
        assert_eq!(driver.texture_count(), 3);

        cache.clear(&mut driver);

        assert!(!driver.contains(&a));
        assert!(!driver.contains(&b));
        assert!(driver.contains(&texture));
        assert_eq!(driver.texture_count(), 1);
        assert_eq!(cache.image_cache_len(), 0);
        assert_eq!(cache.texture_cache_len(), 0);

        // Clearing an empty cache is harmless.
        cache.clear(&mut driver);
        assert_eq!(driver.texture_count(), 1);
    }

    fn any_rect() -> impl Strategy<Value = Rect> {
        let coord = prop_oneof![-16i32..32, any::<i32>()];
        (coord.clone(), coord.clone(), coord.clone(), coord)
            .prop_map(|(x0, y0, x1, y1)| Rect::new(Point::new(x0, y0), Point::new(x1, y1)))
    }

    proptest! {
        #[test]
        fn prop_any_rects_never_panic(src in any_rect(), dst in any_rect()) {
            let mut driver = SoftwareDriver::new().with_byte_budget(1 << 16);
            let texture = driver
                .upload("red.png", &Image::filled(ColorFormat::Rgba8, 10, 10, RED).unwrap())
                .unwrap();
            let mut cache = ScaledTextureCache::new(ScalingConfig::enabled(), PaddingStrategy::None);

            match cache.get_scaled(&mut driver, &texture, src, dst) {
                Ok(result) if result != texture => {
                    prop_assert_eq!(result.size(), dst.extent());
                    let again = cache.get_scaled(&mut driver, &texture, src, dst).unwrap();
                    prop_assert_eq!(again, result);
                }
                Ok(_) => {}
                Err(err) => {
                    prop_assert!(err.downcast_ref::<DriverError>().is_some());
                }
            }
            cache.clear(&mut driver);
        }
    }

    #[test]
    fn test_full_range_source_rect() {
        let (mut cache, mut driver, texture) = setup(ScalingConfig::enabled(), PaddingStrategy::None);
        let src = Rect::new(Point::new(i32::MIN, 0), Point::new(i32::MAX, 10));

        let result = cache
            .get_scaled(&mut driver, &texture, src, Rect::from_xywh(0, 0, 4, 4))
            .unwrap();

        assert_eq!(result.size(), Extent::new(4, 4));
        assert_eq!(
            result.name(),
            format!("red.png@guiScalingFilter:{}:0:{}:10:4:4", i32::MIN, u32::MAX)
        );
        cache.clear(&mut driver);
    }
}
