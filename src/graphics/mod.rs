//! Software GUI scaling.
//!
//! Leaves first: [`image`] and [`rect`] are the data model,
//! [`transparency`] and [`scaling`] the pixel filters, [`driver`] the
//! renderer contract (with [`software`] as an in-memory backend),
//! [`scale_cache`] the two-level cache and [`draw`] the blit wrapper.

pub mod draw;
pub mod driver;
pub mod image;
pub mod rect;
pub mod scale_cache;
pub mod scaling;
pub mod software;
pub mod transparency;

pub use draw::draw_2d_image_filter_scaled;
pub use driver::{Blit, DriverError, Texture, TextureId, VideoDriver};
pub use image::{Color, ColorFormat, Image, ImageError};
pub use rect::{Extent, Point, Rect};
pub use scale_cache::{PaddingStrategy, ScaleCacheKey, ScaleCacheStats, ScaledTextureCache};
pub use scaling::{next_power_of_two, pad_to_power_of_two, scale_area_weighted, ScaleError};
pub use software::{DrawCall, SoftwareDriver};
pub use transparency::{clean_transparent, THRESHOLD_ALPHA_TEST, THRESHOLD_BLENDED};
