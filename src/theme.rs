//! Palette derivation from a hue and an [`IconStyle`].

use std::ops::Index;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::style::IconStyle;

/// Perceptual lightness correction per sixth of the color wheel. Yellows and
/// cyans look brighter than blues at the same HSL lightness.
const LIGHTNESS_CORRECTORS: [f32; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// Palette slots produced by [`Palette::from_hue`].
pub mod slot {
    pub const DARK_GRAY: usize = 0;
    pub const MID_COLOR: usize = 1;
    pub const LIGHT_GRAY: usize = 2;
    pub const LIGHT_COLOR: usize = 3;
    pub const DARK_COLOR: usize = 4;
}

/// An ordered, non-empty set of colors addressed by small integer index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wraps caller-supplied colors.
    ///
    /// The collision rule in the selector assumes the slot convention of
    /// [`Palette::from_hue`] (see [`slot`]); custom palettes should follow it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStyle`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::InvalidStyle("palette must not be empty".into()));
        }
        Ok(Self { colors })
    }

    /// Builds the default five-color palette for `hue` (in `[0, 1]`).
    ///
    /// The hue is first snapped to `style.hues` when that is set.
    pub fn from_hue(hue: f32, style: &IconStyle) -> Result<Self> {
        let hue = style.restrict_hue(hue);
        let gray = |position| {
            Color::from_hsl(
                0.0,
                style.grayscale_saturation,
                style.grayscale_lightness.at(position),
            )
        };
        let colored = |position| {
            corrected_hsl(hue, style.color_saturation, style.color_lightness.at(position))
        };

        Ok(Self {
            colors: vec![
                gray(0.0)?,
                colored(0.5)?,
                gray(1.0)?,
                colored(1.0)?,
                colored(0.0)?,
            ],
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

/// HSL with lightness bent around a hue-dependent midpoint.
fn corrected_hsl(hue: f32, saturation: f32, lightness: f32) -> Result<Color> {
    let corrector = LIGHTNESS_CORRECTORS[((hue * 6.0 + 0.5) as usize).min(6)];
    let lightness = if lightness < 0.5 {
        lightness * corrector * 2.0
    } else {
        corrector + (lightness - 0.5) * (1.0 - corrector) * 2.0
    };
    Color::from_hsl(hue, saturation, lightness.clamp(0.0, 1.0))
}
