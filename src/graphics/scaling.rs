//! Area-weighted image scaling
//!
//! Treats every source pixel as a crisp unit square and every destination
//! pixel as the average of the source area it covers. Integer ratios come
//! out pixel-exact, while non-integer ratios blend only at the boundaries
//! where source pixels straddle two destination pixels. The same filter
//! handles magnification and minification and needs no mipmaps.

use crate::graphics::image::{Color, Image};
use crate::graphics::rect::{Extent, Point, Rect};
use anyhow::Result;

// ==============================================================================
// Scaling Errors
// ==============================================================================

/// Errors related to scaling operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    #[error("Destination origin {origin:?} outside {width}x{height} image")]
    OriginOutOfBounds {
        origin: Point,
        width: u32,
        height: u32,
    },
}

/// Smallest power of two that is >= `value` (1 for 0)
pub fn next_power_of_two(value: u32) -> u32 {
    value.max(1).next_power_of_two()
}

/// Round a size up to power-of-two dimensions
pub fn pad_to_power_of_two(extent: Extent) -> Extent {
    Extent::new(
        next_power_of_two(extent.width),
        next_power_of_two(extent.height),
    )
}

/// Continuous source span covered by one destination pixel along one axis
#[derive(Debug, Clone, Copy)]
struct Span {
    min: f64,
    max: f64,
}

impl Span {
    /// Span of destination pixel `d` out of `dst_len`, mapped onto the source
    /// range `[origin, origin + len)` and clamped to `[lo, hi]`.
    #[inline]
    fn for_pixel(d: u32, dst_len: u32, origin: f64, len: f64, lo: f64, hi: f64) -> Self {
        let step = len / dst_len as f64;
        let min = origin + d as f64 * step;
        let max = min + step;
        Self {
            min: min.clamp(lo, hi),
            max: max.clamp(lo, hi),
        }
    }

    /// Integer source pixels touched by this span
    #[inline]
    fn pixels(&self) -> std::ops::Range<i64> {
        (self.min.floor() as i64)..(self.max.ceil() as i64)
    }

    /// Length of this span covered by source pixel `s`
    #[inline]
    fn coverage(&self, s: i64) -> f64 {
        let s = s as f64;
        self.max.min(s + 1.0) - self.min.max(s)
    }
}

#[inline]
fn average(sum: f64, area: f64) -> u8 {
    (sum / area + 0.5).min(255.0) as u8
}

/// Scale a region of `src` into `dst` with area-weighted anti-aliasing.
///
/// `src_rect` may be mirrored; it is normalized first. The destination
/// region starts at `dst_origin` and extends to the right and bottom edges
/// of `dst`, and every pixel in it is overwritten.
///
/// Parts of `src_rect` lying outside `src` contribute nothing. A destination
/// pixel with no covered source area, including every pixel when the source
/// rect is empty or entirely outside the image, becomes transparent black.
pub fn scale_area_weighted(
    src: &Image,
    src_rect: Rect,
    dst: &mut Image,
    dst_origin: Point,
) -> Result<()> {
    if dst_origin.x < 0
        || dst_origin.y < 0
        || dst_origin.x as u32 > dst.width()
        || dst_origin.y as u32 > dst.height()
    {
        return Err(ScaleError::OriginOutOfBounds {
            origin: dst_origin,
            width: dst.width(),
            height: dst.height(),
        }
        .into());
    }

    let dst_w = dst.width() - dst_origin.x as u32;
    let dst_h = dst.height() - dst_origin.y as u32;
    if dst_w == 0 || dst_h == 0 {
        return Ok(());
    }

    let rect = src_rect.normalized();
    let sox = rect.upper_left.x as f64;
    let soy = rect.upper_left.y as f64;
    let sw = rect.width() as f64;
    let sh = rect.height() as f64;

    // Clip to the part of the source rect that lies inside the image.
    let lo_x = sox.max(0.0);
    let hi_x = (sox + sw).min(src.width() as f64).max(lo_x);
    let lo_y = soy.max(0.0);
    let hi_y = (soy + sh).min(src.height() as f64).max(lo_y);

    for dy in 0..dst_h {
        let span_y = Span::for_pixel(dy, dst_h, soy, sh, lo_y, hi_y);

        for dx in 0..dst_w {
            let span_x = Span::for_pixel(dx, dst_w, sox, sw, lo_x, hi_x);

            // Total covered area and area-weighted channel integrals.
            let (mut area, mut ra, mut ga, mut ba, mut aa) = (0.0, 0.0, 0.0, 0.0, 0.0);

            for sy in span_y.pixels() {
                let ph = span_y.coverage(sy);
                if ph <= 0.0 {
                    continue;
                }
                for sx in span_x.pixels() {
                    let pw = span_x.coverage(sx);
                    if pw <= 0.0 {
                        continue;
                    }
                    let pa = pw * ph;
                    let pxl = src.pixel(sx as u32, sy as u32);
                    area += pa;
                    ra += pa * pxl.r as f64;
                    ga += pa * pxl.g as f64;
                    ba += pa * pxl.b as f64;
                    aa += pa * pxl.a as f64;
                }
            }

            let out = if area > 0.0 {
                Color::new(
                    average(ra, area),
                    average(ga, area),
                    average(ba, area),
                    average(aa, area),
                )
            } else {
                Color::TRANSPARENT
            };
            dst.set_pixel(
                dst_origin.x as u32 + dx,
                dst_origin.y as u32 + dy,
                out,
            );
        }
    }

    Ok(())
}

// ==============================================================================
// Tests
// ==============================================================================
