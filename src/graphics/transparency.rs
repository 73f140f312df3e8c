//! Color bleed correction for transparent pixels
//!
//! Many PNG optimizers discard the RGB values of fully transparent pixels.
//! When such an image is resampled, those meaningless colors get blended
//! into the visible edge and show up as dark or colored fringes. Filling
//! them from their visible neighbors before resampling avoids that.

use crate::graphics::image::Image;

/// Alpha threshold for alpha-blended (2D/GUI) content
pub const THRESHOLD_BLENDED: u8 = 0;

/// Alpha threshold for alpha-tested (3D) content
pub const THRESHOLD_ALPHA_TEST: u8 = 127;

/// Fill in RGB values of transparent pixels from their neighbors.
///
/// Every pixel with alpha at or below `threshold` takes the alpha-weighted
/// average color of its visible (alpha above `threshold`) neighbors in the
/// surrounding 3x3 block, clipped to the image. Alpha itself is never
/// changed, and pixels without visible neighbors keep their color.
///
/// The image is swept row-major and modified in place. A corrected pixel
/// keeps its alpha, so it stays at or below the threshold and is never used
/// as a color source for pixels visited after it.
pub fn clean_transparent(image: &mut Image, threshold: u8) {
    let width = image.width();
    let height = image.height();

    for y in 0..height {
        for x in 0..width {
            let mut c = image.pixel(x, y);
            if c.a > threshold {
                continue;
            }

            // Sample weight and weighted r, g, b totals.
            let (mut ss, mut sr, mut sg, mut sb) = (0u32, 0u32, 0u32, 0u32);

            for sy in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                for sx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                    let d = image.pixel(sx, sy);
                    if d.a <= threshold {
                        continue;
                    }
                    let a = d.a as u32;
                    ss += a;
                    sr += a * d.r as u32;
                    sg += a * d.g as u32;
                    sb += a * d.b as u32;
                }
            }

            if ss > 0 {
                c.r = (sr / ss) as u8;
                c.g = (sg / ss) as u8;
                c.b = (sb / ss) as u8;
                image.set_pixel(x, y, c);
            }
        }
    }
}
