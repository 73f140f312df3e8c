//! Scaled 2D image drawing
//!
//! Drop-in replacement for the renderer's plain 2D blit that substitutes
//! a pre-scaled texture from the [`ScaledTextureCache`] when scaling is on.

use crate::graphics::driver::{Blit, Texture, VideoDriver};
use crate::graphics::image::Color;
use crate::graphics::rect::{clamp_to_i32, Rect};
use crate::graphics::scale_cache::ScaledTextureCache;
use anyhow::Result;

/// Draw `src_rect` of `texture` into `dst_rect`, using a high-quality
/// pre-scaled texture if configured.
///
/// When a scaled texture is used it already has the destination size, so
/// the whole `(0, 0, width, height)` of it is drawn and alpha blending is
/// forced on. Otherwise the call is forwarded unchanged.
///
/// The rewritten source rect always uses the absolute destination size, so
/// a mirrored `dst_rect` still samples the scaled texture unflipped.
#[allow(clippy::too_many_arguments)]
pub fn draw_2d_image_filter_scaled<D>(
    cache: &mut ScaledTextureCache,
    driver: &mut D,
    texture: &Texture,
    dst_rect: Rect,
    src_rect: Rect,
    clip_rect: Option<Rect>,
    colors: Option<[Color; 4]>,
    use_alpha: bool,
) -> Result<()>
where
    D: VideoDriver + ?Sized,
{
    let scaled = cache.get_scaled(driver, texture, src_rect, dst_rect)?;

    let src_rect = if scaled != *texture {
        let size = dst_rect.extent();
        Rect::from_xywh(0, 0, clamp_to_i32(size.width), clamp_to_i32(size.height))
    } else {
        src_rect
    };
    let use_alpha = use_alpha || cache.is_enabled();

    driver.draw_2d_image(
        &scaled,
        &Blit {
            dst_rect,
            src_rect,
            clip_rect,
            colors,
            use_alpha,
        },
    );
    Ok(())
}
