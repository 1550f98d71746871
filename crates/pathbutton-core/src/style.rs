//! Style attributes and density conversion.
//!
//! Style attributes are read once when a button is constructed. They are
//! stored as JSON, for example:
//!
//! ```json
//! {
//!     "border_width": { "dp": 3 },
//!     "fill_color": {
//!         "rules": [{ "when": ["pressed"], "color": "#ffcc0000" }],
//!         "default": "#00000000"
//!     },
//!     "text_color": "#cc0000"
//! }
//! ```

use crate::color::{ButtonColor, ColorMapping};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default minimum border width, in density-independent pixels.
pub const DEFAULT_MIN_BORDER_WIDTH_DP: f64 = 2.0;

/// Display density: device pixels per density-independent pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub scale: f64,
}

impl Density {
    pub const fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Convert dp to fractional device pixels.
    pub fn dp_to_px(&self, dp: f64) -> f64 {
        dp * self.scale
    }

    /// Convert a dimension to a whole pixel size.
    ///
    /// Rounds to nearest; a positive value never rounds down to zero.
    pub fn pixel_size(&self, dimension: Dimension) -> u32 {
        let px = self.resolve(dimension);
        if px <= 0.0 {
            return 0;
        }
        ((px + 0.5) as u32).max(1)
    }

    /// Convert a dimension to whole pixels, truncating toward zero.
    pub fn pixel_offset(&self, dimension: Dimension) -> u32 {
        self.resolve(dimension).max(0.0) as u32
    }

    /// Convert a dimension to fractional device pixels.
    pub fn resolve(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Px(px) => px,
            Dimension::Dp(dp) => self.dp_to_px(dp),
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A length in device pixels or density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Px(f64),
    Dp(f64),
}

/// A color attribute: either one color or a state mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Color(ButtonColor),
    Mapping(ColorMapping),
}

impl ColorSpec {
    pub fn into_mapping(self) -> ColorMapping {
        match self {
            ColorSpec::Color(color) => ColorMapping::constant(color),
            ColorSpec::Mapping(mapping) => mapping,
        }
    }
}

/// Optional style attributes of a PathButton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathButtonStyle {
    /// Border stroke width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<Dimension>,
    /// Fill color or state mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<ColorSpec>,
    /// Text color or state mapping. Applied by the host; the border follows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorSpec>,
}

impl PathButtonStyle {
    /// Parse a style from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the style to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a style from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        log::debug!("Loaded button style from {}", path.display());
        Ok(style)
    }

    pub fn with_border_width(mut self, width: Dimension) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<ColorSpec>) -> Self {
        self.fill_color = Some(fill.into());
        self
    }

    pub fn with_text_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.text_color = Some(color.into());
        self
    }
}

impl From<ButtonColor> for ColorSpec {
    fn from(color: ButtonColor) -> Self {
        ColorSpec::Color(color)
    }
}

impl From<ColorMapping> for ColorSpec {
    fn from(mapping: ColorMapping) -> Self {
        ColorSpec::Mapping(mapping)
    }
}
