// GUI scaling filter library
// High-quality software pre-scaling of 2D textures for a real-time renderer

pub mod config;
pub mod graphics;
pub mod logging;

pub use config::ScalingConfig;
pub use graphics::{
    draw_2d_image_filter_scaled, Color, ColorFormat, Extent, Image, PaddingStrategy, Point, Rect,
    ScaledTextureCache, Texture, VideoDriver,
};
pub use logging::LogLevel;
