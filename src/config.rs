//! Tunable parameters for icon generation.
//!
//! Every value has a default matching the stock icon style, so an empty JSON
//! object is a valid configuration:
//!
//! ```no_run
//! use emoji_app_icon::config::IconConfig;
//! use std::path::Path;
//!
//! let config = IconConfig::from_json_file(Path::new("icon.json"))?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::color::parse_hex_rgba;
use crate::error::Error;

pub const DEFAULT_TARGET_COLOR: &str = "E7C930";
pub const DEFAULT_TOLERANCE: u32 = 120;
/// Corner radius as a fraction of the icon side, after the iOS app icon shape.
pub const DEFAULT_CORNER_RADIUS_RATIO: f32 = 0.225;
pub const DEFAULT_SUPERSAMPLE_FACTOR: u32 = 4;
pub const MAX_SUPERSAMPLE_FACTOR: u32 = 16;
pub const DEFAULT_OUTPUT_SIZE: u32 = 1024;
pub const MAX_OUTPUT_SIZE: u32 = 8192;
pub const DEFAULT_SQUARE_FILE_NAME: &str = "AppIcon_Square.png";
pub const DEFAULT_ROUNDED_FILE_NAME: &str = "AppIcon_Rounded.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Hex color (with or without `#`) that gets replaced by the dominant color
    pub target_color: String,

    /// Summed RGB distance within which pixels are fully blended
    pub tolerance: u32,

    pub corner_radius_ratio: f32,

    /// Linear supersampling factor used when rasterising the rounded mask
    pub supersample_factor: u32,

    /// Side length in pixels of both generated icons
    pub output_size: u32,

    pub square_file_name: String,
    pub rounded_file_name: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            target_color: DEFAULT_TARGET_COLOR.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            corner_radius_ratio: DEFAULT_CORNER_RADIUS_RATIO,
            supersample_factor: DEFAULT_SUPERSAMPLE_FACTOR,
            output_size: DEFAULT_OUTPUT_SIZE,
            square_file_name: DEFAULT_SQUARE_FILE_NAME.to_string(),
            rounded_file_name: DEFAULT_ROUNDED_FILE_NAME.to_string(),
        }
    }
}

impl IconConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Unable to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Unable to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        parse_hex_rgba(&self.target_color)?;

        if self.tolerance == 0 {
            return Err(invalid("tolerance", self.tolerance));
        }
        if !(1..=MAX_SUPERSAMPLE_FACTOR).contains(&self.supersample_factor) {
            return Err(invalid("supersample_factor", self.supersample_factor));
        }
        if !(1..=MAX_OUTPUT_SIZE).contains(&self.output_size) {
            return Err(invalid("output_size", self.output_size));
        }
        if !(0.0..=0.5).contains(&self.corner_radius_ratio) {
            return Err(invalid("corner_radius_ratio", self.corner_radius_ratio));
        }
        if self.square_file_name.is_empty() || self.square_file_name == self.rounded_file_name {
            return Err(invalid("square_file_name", &self.square_file_name));
        }
        if self.rounded_file_name.is_empty() {
            return Err(invalid("rounded_file_name", &self.rounded_file_name));
        }

        Ok(())
    }
}

fn invalid(parameter: &str, value: impl std::fmt::Display) -> anyhow::Error {
    Error::InvalidConfig {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
    .into()
}
