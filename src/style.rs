//! Serializable icon style.
//!
//! An [`IconStyle`] carries the background color and the parameters the
//! default theme derives its palette from. It round-trips through JSON so
//! styles can live in configuration files.
//!
//! # Example
//!
//! ```
//! use hashicon::{Color, IconStyle};
//!
//! let style = IconStyle::from_json(r##"{ "backColor": "#202020", "hues": [210] }"##).unwrap();
//! assert_eq!(style.back_color, Color::from_rgb(0x20, 0x20, 0x20));
//! assert_eq!(style.padding, 0.08);
//!
//! let json = style.to_json().unwrap();
//! assert_eq!(IconStyle::from_json(&json).unwrap(), style);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};

// ============================================================================
// LightnessRange
// ============================================================================

/// A lightness interval that palette entries are picked from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LightnessRange {
    pub begin: f32,
    pub end: f32,
}

impl LightnessRange {
    pub const fn new(begin: f32, end: f32) -> Self {
        Self { begin, end }
    }

    /// Linear interpolation: 0 gives `begin`, 1 gives `end`.
    pub fn at(&self, position: f32) -> f32 {
        self.begin + position * (self.end - self.begin)
    }
}

// ============================================================================
// IconStyle
// ============================================================================

/// Visual style of generated icons.
///
/// Every field is optional in JSON and falls back to [`IconStyle::default`].
///
/// # JSON Format
///
/// ```json
/// {
///   "backColor": "#ffffff",
///   "padding": 0.08,
///   "colorSaturation": 0.5,
///   "grayscaleSaturation": 0.0,
///   "colorLightness": { "begin": 0.4, "end": 0.8 },
///   "grayscaleLightness": { "begin": 0.3, "end": 0.9 },
///   "hues": [0, 120]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconStyle {
    /// Color filling the whole surface behind the shapes.
    pub back_color: Color,

    /// Fraction of the icon size left empty on each side, in `[0, 0.5)`.
    pub padding: f32,

    /// Saturation of hue-derived palette entries.
    pub color_saturation: f32,

    /// Saturation of the gray palette entries.
    pub grayscale_saturation: f32,

    pub color_lightness: LightnessRange,

    pub grayscale_lightness: LightnessRange,

    /// Allowed hues in degrees. `None` allows the whole color wheel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hues: Option<Vec<f32>>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            back_color: Color::WHITE,
            padding: 0.08,
            color_saturation: 0.5,
            grayscale_saturation: 0.0,
            color_lightness: LightnessRange::new(0.4, 0.8),
            grayscale_lightness: LightnessRange::new(0.3, 0.9),
            hues: None,
        }
    }
}

impl IconStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color.
    pub fn with_back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    /// Sets the padding fraction.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Restricts generated hues to the given angles (degrees).
    pub fn with_hues(mut self, hues: impl Into<Vec<f32>>) -> Self {
        self.hues = Some(hues.into());
        self
    }

    /// Checks every numeric field against its documented range.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStyle`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.padding) {
            return Err(Error::InvalidStyle(format!(
                "padding must be within [0, 0.5), got {}",
                self.padding
            )));
        }

        let unit_fields = [
            ("colorSaturation", self.color_saturation),
            ("grayscaleSaturation", self.grayscale_saturation),
            ("colorLightness.begin", self.color_lightness.begin),
            ("colorLightness.end", self.color_lightness.end),
            ("grayscaleLightness.begin", self.grayscale_lightness.begin),
            ("grayscaleLightness.end", self.grayscale_lightness.end),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidStyle(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if let Some(hues) = &self.hues {
            if hues.is_empty() {
                return Err(Error::InvalidStyle("hues must not be empty".into()));
            }
            if let Some(bad) = hues.iter().find(|h| !h.is_finite()) {
                return Err(Error::InvalidStyle(format!("hue {bad} is not finite")));
            }
        }

        Ok(())
    }

    /// Snaps a hash-derived hue in `[0, 1]` onto the allowed hue list.
    ///
    /// Without a restriction the hue is returned unchanged. Otherwise the
    /// unit interval is split evenly between the listed angles, and the
    /// chosen angle is normalized back to `[0, 1)`.
    pub fn restrict_hue(&self, hue: f32) -> f32 {
        match &self.hues {
            Some(hues) if !hues.is_empty() => {
                let index = ((0.999 * hue * hues.len() as f32) as usize).min(hues.len() - 1);
                hues[index].rem_euclid(360.0) / 360.0
            }
            _ => hue,
        }
    }

    /// Serializes the style to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the style to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and validates a style from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }
}

// ============================================================================
// Tests
// ============================================================================
