//! Scaling filter settings
//!
//! The host reads these flags from its settings store; they can also be
//! loaded from a key=value property file:
//!
//! ```text
//! gui_scaling_filter = true
//! gui_scaling_filter_txr2img = false
//! ```

pub mod propfile;

use anyhow::{Context, Result};
use std::path::Path;

/// Master enable for software GUI scaling
pub const KEY_ENABLED: &str = "gui_scaling_filter";

/// Permits reading textures back into images on a cache miss
pub const KEY_TEXTURE_TO_IMAGE: &str = "gui_scaling_filter_txr2img";

/// Feature flags controlling the scaling pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingConfig {
    /// When false every call is an identity pass-through
    pub enabled: bool,
    /// When false a texture without a cached image is drawn unscaled
    pub texture_to_image: bool,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            texture_to_image: true,
        }
    }
}

impl ScalingConfig {
    /// Config with scaling turned on and readback permitted
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            texture_to_image: true,
        }
    }

    /// Config with scaling turned off
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Read flags from property file text
    ///
    /// Unknown keys are ignored; unparsable values keep their default.
    pub fn from_properties(data: &str) -> Self {
        let mut config = Self::default();
        propfile::parse_propfile(
            data,
            &mut |key, value| {
                let slot = match key {
                    KEY_ENABLED => &mut config.enabled,
                    KEY_TEXTURE_TO_IMAGE => &mut config.texture_to_image,
                    _ => return,
                };
                match parse_bool(value) {
                    Some(flag) => *slot = flag,
                    None => log::warn!("Invalid boolean '{}' for '{}'", value, key),
                }
            },
        );
        config
    }

    /// Load flags from a property file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Ok(Self::from_properties(&data))
    }
}

/// Parse a boolean setting value
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
