//! Packed RGBA color value.
//!
//! [`Color`] stores four 8-bit channels in one `u32` (red in the most
//! significant byte, alpha in the least). Every operation is integer or
//! single-step float math so that the same inputs yield the same bits on
//! every platform.

use std::fmt;
use std::str::FromStr;

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Color
// ============================================================================

/// An immutable RGBA color packed as `0xRRGGBBAA`.
///
/// Equality and hashing compare the packed value bit for bit.
///
/// # Example
///
/// ```
/// use hashicon::Color;
///
/// let teal = Color::from_hsl(0.5, 1.0, 0.25).unwrap();
/// assert_eq!(teal.to_string(), "#008080ff");
/// assert_eq!(teal.format("(R, G, B)"), "(0, 128, 128)");
/// assert_eq!(teal.format("#RRGGBB"), "#008080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self(0x0000_00FF);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Wraps an already packed `0xRRGGBBAA` value.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Returns the packed `0xRRGGBBAA` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Packs four channels given in alpha-first order.
    ///
    /// Inputs are shifted into place and OR-ed together without range
    /// checks, so values outside `0..=255` spill into neighbouring channels
    /// or are cut off at the top. Use [`Color::from_rgba`] when the channels
    /// are already bytes.
    pub const fn from_channels(a: i32, r: i32, g: i32, b: i32) -> Self {
        let packed = (r as u32).wrapping_shl(24)
            | (g as u32).wrapping_shl(16)
            | (b as u32).wrapping_shl(8)
            | a as u32;
        Self(packed)
    }

    /// Builds an opaque color from hue, saturation and lightness, each in
    /// `[0, 1]`, following the CSS3 HSL-to-RGB algorithm.
    ///
    /// # Errors
    ///
    /// [`Error::HslOutOfRange`] if any component is outside `[0, 1]` (NaN
    /// included).
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Result<Self> {
        check_unit("hue", hue)?;
        check_unit("saturation", saturation)?;
        check_unit("lightness", lightness)?;

        if saturation == 0.0 {
            let value = to_byte(lightness);
            return Ok(Self::from_rgb(value, value, value));
        }

        let m2 = if lightness <= 0.5 {
            lightness * (saturation + 1.0)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = lightness * 2.0 - m2;

        Ok(Self::from_rgb(
            to_byte(hue_to_channel(m1, m2, hue * 6.0 + 2.0)),
            to_byte(hue_to_channel(m1, m2, hue * 6.0)),
            to_byte(hue_to_channel(m1, m2, hue * 6.0 - 2.0)),
        ))
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Returns this color with its alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self(self.0 & 0xFFFF_FF00 | a as u32)
    }

    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Composites this color over `background` (Porter-Duff "over").
    ///
    /// A fully transparent foreground yields `background`; a fully opaque
    /// foreground, or a fully transparent background, yields `self`.
    /// Otherwise each channel is blended with 8-bit fixed-point weights and
    /// truncating integer division.
    pub fn over(self, background: Color) -> Color {
        let fore_alpha = u32::from(self.a());
        let back_alpha = u32::from(background.a());

        if fore_alpha < 1 {
            return background;
        }
        if fore_alpha > 254 || back_alpha < 1 {
            return self;
        }

        let fore_weight = fore_alpha * 255;
        let back_weight = back_alpha * (255 - fore_alpha);
        let total = fore_weight + back_weight;

        let blend = |fore: u8, back: u8| -> u8 {
            ((fore_weight * u32::from(fore) + back_weight * u32::from(back)) / total) as u8
        };

        Color::from_rgba(
            blend(self.r(), background.r()),
            blend(self.g(), background.g()),
            blend(self.b(), background.b()),
            (total / 255) as u8,
        )
    }

    /// Renders the color through a small template.
    ///
    /// `R`, `G`, `B`, `A` (or lowercase) expand to the decimal channel value.
    /// A doubled letter (`RR`, `gg`, ...) expands to two hex digits, upper
    /// case for upper-case letters and lower case otherwise. Everything else
    /// is copied through.
    pub fn format(self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 8);
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let Some(value) = self.placeholder(c) else {
                out.push(c);
                continue;
            };

            if chars.peek() == Some(&c) {
                chars.next();
                if c.is_ascii_uppercase() {
                    out.push_str(&format!("{value:02X}"));
                } else {
                    out.push_str(&format!("{value:02x}"));
                }
            } else {
                out.push_str(&value.to_string());
            }
        }

        out
    }

    fn placeholder(self, c: char) -> Option<u8> {
        match c {
            'R' | 'r' => Some(self.r()),
            'G' | 'g' => Some(self.g()),
            'B' | 'b' => Some(self.b()),
            'A' | 'a' => Some(self.a()),
            _ => None,
        }
    }
}

fn check_unit(component: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::HslOutOfRange { component, value })
    }
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Piecewise hue ramp over a `[0, 6)` wheel.
fn hue_to_channel(m1: f32, m2: f32, h: f32) -> f32 {
    let h = if h < 0.0 {
        h + 6.0
    } else if h >= 6.0 {
        h - 6.0
    } else {
        h
    };

    if h < 1.0 {
        m1 + (m2 - m1) * h
    } else if h < 3.0 {
        m2
    } else if h < 4.0 {
        m1 + (m2 - m1) * (4.0 - h)
    } else {
        m1
    }
}

// ============================================================================
// Text Conversions
// ============================================================================

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. Missing alpha means
    /// opaque.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;
        match digits.len() {
            3 => Ok(Self::from_rgb(nibble(8), nibble(4), nibble(0))),
            4 => Ok(Self::from_rgba(nibble(12), nibble(8), nibble(4), nibble(0))),
            6 => Ok(Self(value << 8 | 0xFF)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        if color.is_opaque() {
            color.format("#rrggbb")
        } else {
            color.to_string()
        }
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Color {
    fn schema_name() -> String {
        "Color".to_owned()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// palette Interop
// ============================================================================

impl From<Color> for Srgba<u8> {
    fn from(color: Color) -> Self {
        Srgba::new(color.r(), color.g(), color.b(), color.a())
    }
}

impl From<Srgba<u8>> for Color {
    fn from(color: Srgba<u8>) -> Self {
        Color::from_rgba(color.color.red, color.color.green, color.color.blue, color.alpha)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{Hsl, IntoColor, Srgb};

    #[test]
    fn channels_pack_in_rgba_order() {
        let color = Color::from_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_u32(), 0x1234_5678);
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(Color::from_channels(0x78, 0x12, 0x34, 0x56), color);
    }

    #[test]
    fn from_channels_does_not_validate() {
        // 256 in green carries into red; 256 in red falls off the top.
        assert_eq!(Color::from_channels(255, 0, 256, 0).to_u32(), 0x0100_00FF);
        assert_eq!(Color::from_channels(255, 256, 0, 0).to_u32(), 0x0000_00FF);
    }

    #[test]
    fn grayscale_hsl_rounds_lightness() {
        for step in 0..=20 {
            let l = step as f32 / 20.0;
            let gray = Color::from_hsl(0.0, 0.0, l).unwrap();
            let expected = (l * 255.0).round() as u8;
            assert_eq!((gray.r(), gray.g(), gray.b()), (expected, expected, expected));
            assert_eq!(gray.a(), 255);
        }
    }

    #[test]
    fn primary_hues() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5).unwrap(), Color::from_rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(1.0 / 3.0, 1.0, 0.5).unwrap(), Color::from_rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(2.0 / 3.0, 1.0, 0.5).unwrap(), Color::from_rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(1.0, 1.0, 0.5).unwrap(), Color::from_rgb(255, 0, 0));
    }

    #[test]
    fn hsl_agrees_with_palette_crate() {
        for hue_step in 0..12 {
            for &(s, l) in &[(0.5, 0.4), (0.8, 0.7), (1.0, 0.2), (0.3, 0.9)] {
                let h = hue_step as f32 / 12.0;
                let ours = Color::from_hsl(h, s, l).unwrap();

                let reference: Srgb = Hsl::new(h * 360.0, s, l).into_color();
                let reference: Srgb<u8> = reference.into_format();

                for (a, b) in [
                    (ours.r(), reference.red),
                    (ours.g(), reference.green),
                    (ours.b(), reference.blue),
                ] {
                    assert!(a.abs_diff(b) <= 1, "h={h} s={s} l={l}: {a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn hsl_rejects_out_of_range() {
        assert!(matches!(
            Color::from_hsl(1.5, 0.5, 0.5),
            Err(Error::HslOutOfRange { component: "hue", .. })
        ));
        assert!(matches!(
            Color::from_hsl(0.5, -0.1, 0.5),
            Err(Error::HslOutOfRange { component: "saturation", .. })
        ));
        assert!(matches!(
            Color::from_hsl(0.5, 0.5, f32::NAN),
            Err(Error::HslOutOfRange { component: "lightness", .. })
        ));
    }

    #[test]
    fn over_short_circuits() {
        let back = Color::from_rgba(10, 20, 30, 200);
        let opaque = Color::from_rgb(1, 2, 3);
        assert_eq!(opaque.over(back), opaque);
        assert_eq!(Color::from_rgba(1, 2, 3, 0).over(back), back);

        let translucent = Color::from_rgba(1, 2, 3, 100);
        assert_eq!(translucent.over(Color::TRANSPARENT), translucent);
    }

    #[test]
    fn over_blends_with_truncation() {
        let fore = Color::from_rgba(255, 0, 0, 128);
        let back = Color::from_rgb(0, 0, 255);
        // fore weight 128*255 = 32640, back weight 255*127 = 32385, total 65025
        let blended = fore.over(back);
        assert_eq!(blended.r(), (32640u32 * 255 / 65025) as u8);
        assert_eq!(blended.g(), 0);
        assert_eq!(blended.b(), (32385u32 * 255 / 65025) as u8);
        assert_eq!(blended.a(), 255);

        let half = Color::from_rgba(200, 100, 50, 128).over(Color::from_rgba(0, 0, 0, 128));
        // 128*255 + 128*127 = 48896 -> alpha 191
        assert_eq!(half.a(), 191);
        assert_eq!(half.r(), (32640u32 * 200 / 48896) as u8);
    }

    #[test]
    fn display_is_eight_hex_digits() {
        assert_eq!(Color::from_rgba(0xAB, 0x01, 0x00, 0xFF).to_string(), "#ab0100ff");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn format_placeholders() {
        let color = Color::from_rgba(255, 10, 171, 128);
        assert_eq!(color.format("R G B A"), "255 10 171 128");
        assert_eq!(color.format("r,g,b,a"), "255,10,171,128");
        assert_eq!(color.format("#RRGGBBAA"), "#FF0AAB80");
        assert_eq!(color.format("#rrggbbaa"), "#ff0aab80");
        assert_eq!(color.format("(R, G, B)"), "(255, 10, 171)");
        assert_eq!(color.format("rgb"), "25510171");
        assert_eq!(color.format("xx--"), "xx--");
        // Three in a row: the first two pair up, the third stands alone.
        assert_eq!(color.format("RRR"), "FF255");
        // Mixed case does not pair.
        assert_eq!(color.format("Rr"), "255255");
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#0f08".parse::<Color>().unwrap(), Color::from_rgba(0, 0xFF, 0, 0x88));
        assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::from_rgb(255, 128, 0));
        assert_eq!("#11223344".parse::<Color>().unwrap().to_u32(), 0x1122_3344);

        assert!("fff".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("#+12345".parse::<Color>().is_err());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let json = serde_json::to_string(&Color::from_rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "\"#01020304\"");

        let back: Color = serde_json::from_str("\"#01020304\"").unwrap();
        assert_eq!(back, Color::from_rgba(1, 2, 3, 4));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }

    #[test]
    fn palette_interop() {
        let color = Color::from_rgba(9, 8, 7, 6);
        let srgba: Srgba<u8> = color.into();
        assert_eq!(srgba.color.red, 9);
        assert_eq!(srgba.alpha, 6);
        assert_eq!(Color::from(srgba), color);
    }
}
