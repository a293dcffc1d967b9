//! Serializable style profile for the rendered icon.
//!
//! An [`IconStyle`] holds the handful of knobs the layout reads: canvas size,
//! the uniform scale applied to every nominal dimension, and the two colors.
//! Defaults reproduce the shipped launcher icon, so an empty profile (`{}`)
//! renders exactly the same image as no profile at all.
//!
//! # Example
//!
//! ```
//! use masjid_icon::{Color, IconStyle};
//!
//! let style = IconStyle::from_json(r##"{ "scale": 1.25, "foreground": "#fefefe" }"##).unwrap();
//! assert_eq!(style.size, 1024);
//! assert_eq!(style.foreground, Color::new(0xfe, 0xfe, 0xfe));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{IconError, Result};

/// Edge length of the master icon in pixels.
pub const DEFAULT_SIZE: u32 = 1024;

/// Uniform multiplier applied to every nominal layout dimension.
pub const DEFAULT_SCALE: f64 = 1.5;

/// Colors and dimensions of the rendered icon.
///
/// Serializes to camelCase JSON with hex colors:
///
/// ```json
/// { "size": 1024, "scale": 1.5, "background": "#10b981", "foreground": "#ffffff" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconStyle {
    /// Canvas edge length in pixels.
    pub size: u32,

    /// Multiplier for all nominal layout dimensions.
    pub scale: f64,

    /// Background and cutout color.
    pub background: Color,

    /// Color of the building itself.
    pub foreground: Color,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            scale: DEFAULT_SCALE,
            background: Color::EMERALD,
            foreground: Color::WHITE,
        }
    }
}

impl IconStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Rejects sizes and scales the layout cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IconError::InvalidStyle("size must be at least 1 pixel".into()));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(IconError::InvalidStyle(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a style from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Reads a style profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        log::debug!("loaded style profile from {}", path.display());
        Ok(style)
    }
}
