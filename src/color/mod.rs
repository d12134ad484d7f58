//! Color codec: hex validation and expansion, RGB/HSV conversion, random targets.
//!
//! A [`HexColor`] is always canonical. It can only be built from a string that
//! passes [`is_valid_color`] or from an RGB triple, so every value renders as
//! uppercase `#RRGGBB` and converts to RGB and back without loss.

pub mod mode;
pub mod random;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorFormatError;

pub use mode::DifficultyMode;
pub use random::{generate_random_color, random_color};

/// An RGB triple, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, clamping each channel into 0..=255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let c = |v: i32| v.clamp(0, 255) as u8;
        Self::new(c(r), c(g), c(b))
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Hue (degrees), saturation and value (percent), rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{} S{} B{}", self.h, self.s, self.v)
    }
}

/// A validated color in canonical `#RRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: HexColor = HexColor(Rgb::new(0, 0, 0));
    pub const WHITE: HexColor = HexColor(Rgb::new(0xFF, 0xFF, 0xFF));

    /// Parse `#RGB` or `#RRGGBB` (any case). Same contract as [`expand_short_form`].
    pub fn parse(text: &str) -> Result<Self, ColorFormatError> {
        expand_short_form(text)
    }

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    pub const fn to_rgb(self) -> Rgb {
        self.0
    }

    /// The canonical uppercase `#RRGGBB` string.
    pub fn as_hex(&self) -> String {
        self.to_string()
    }

    /// Hue/saturation/value. Hue is reported as 0 for greys.
    pub fn to_hsv(self) -> Hsv {
        let r = f64::from(self.0.r) / 255.0;
        let g = f64::from(self.0.g) / 255.0;
        let b = f64::from(self.0.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let s = if max == 0.0 { 0.0 } else { d / max };

        let mut h = 0.0;
        if d > 0.0 {
            h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }

        Hsv {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            v: (max * 100.0).round() as u8,
        }
    }

    /// Rec. 709 luma on the 0-255 scale.
    pub fn luma(self) -> f64 {
        0.2126 * f64::from(self.0.r) + 0.7152 * f64::from(self.0.g) + 0.0722 * f64::from(self.0.b)
    }

    /// Whether light text reads better than dark text on this color.
    pub fn is_dark(self) -> bool {
        self.luma() < 128.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// True iff `text` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand `#RGB` to `#RRGGBB` by doubling each digit; `#RRGGBB` passes through.
pub fn expand_short_form(text: &str) -> Result<HexColor, ColorFormatError> {
    if !is_valid_color(text) {
        return Err(ColorFormatError::new(text));
    }

    let digits = text[1..].as_bytes();
    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    };

    let rgb = if digits.len() == 3 {
        Rgb::new(
            nibble(digits[0]) * 17,
            nibble(digits[1]) * 17,
            nibble(digits[2]) * 17,
        )
    } else {
        let pair = |i: usize| (nibble(digits[i]) << 4) | nibble(digits[i + 1]);
        Rgb::new(pair(0), pair(2), pair(4))
    };

    Ok(HexColor(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_accepts_three_and_six_digits() {
        assert!(is_valid_color("#abc"));
        assert!(is_valid_color("#ABC"));
        assert!(is_valid_color("#3498db"));
        assert!(is_valid_color("#3498DB"));
    }

    #[test]
    fn validation_rejects_everything_else() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "123456", "#12345G", " #123", "#123 ", "##123"] {
            assert!(!is_valid_color(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn expand_doubles_short_form() {
        assert_eq!(expand_short_form("#0f8").unwrap().as_hex(), "#00FF88");
        assert_eq!(expand_short_form("#3498db").unwrap().as_hex(), "#3498DB");
    }

    #[test]
    fn expand_rejects_invalid() {
        let err = expand_short_form("#12").unwrap_err();
        assert_eq!(err.input, "#12");
        assert!("nope".parse::<HexColor>().is_err());
    }

    #[test]
    fn rgb_conversion_is_exact() {
        let c = HexColor::parse("#0a80fE").unwrap();
        assert_eq!(c.to_rgb(), Rgb::new(0x0A, 0x80, 0xFE));
        assert_eq!(HexColor::from_rgb(Rgb::new(1, 2, 255)).as_hex(), "#0102FF");
    }

    #[test]
    fn rgb_hex_rgb_is_lossless() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(5) {
                for b in [0u8, 1, 15, 16, 127, 128, 136, 240, 254, 255] {
                    let rgb = Rgb::new(r, g, b);
                    let color = HexColor::from_rgb(rgb);
                    assert_eq!(color.to_rgb(), rgb);
                    let reparsed = HexColor::parse(&color.as_hex()).unwrap();
                    assert_eq!(reparsed.to_rgb(), rgb, "{}", color.as_hex());
                }
            }
        }
    }

    #[test]
    fn clamped_saturates_channels() {
        assert_eq!(Rgb::clamped(-10, 300, 42), Rgb::new(0, 255, 42));
    }

    #[test]
    fn hsv_of_primaries_and_greys() {
        let hsv = |s: &str| HexColor::parse(s).unwrap().to_hsv();
        assert_eq!(hsv("#FF0000"), Hsv { h: 0, s: 100, v: 100 });
        assert_eq!(hsv("#00FF00"), Hsv { h: 120, s: 100, v: 100 });
        assert_eq!(hsv("#0000FF"), Hsv { h: 240, s: 100, v: 100 });
        assert_eq!(hsv("#000000"), Hsv { h: 0, s: 0, v: 0 });
        assert_eq!(hsv("#888888"), Hsv { h: 0, s: 0, v: 53 });
        assert_eq!(hsv("#3498DB"), Hsv { h: 204, s: 76, v: 86 });
    }

    #[test]
    fn hsv_display() {
        let hsv = HexColor::parse("#FF00FF").unwrap().to_hsv();
        assert_eq!(hsv.to_string(), "H300 S100 B100");
    }

    #[test]
    fn luma_splits_dark_and_light() {
        assert!(HexColor::BLACK.is_dark());
        assert!(!HexColor::WHITE.is_dark());
        assert!(HexColor::parse("#0000FF").unwrap().is_dark());
        assert!(!HexColor::parse("#00FF00").unwrap().is_dark());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let c = HexColor::parse("#abc").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#AABBCC\"");
        let back: HexColor = serde_json::from_str("\"#aabbcc\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<HexColor>("\"#zz\"").is_err());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_survives_hex_text(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let rgb = Rgb::new(r, g, b);
                let hex = HexColor::from_rgb(rgb).as_hex();
                prop_assert!(is_valid_color(&hex));
                prop_assert_eq!(HexColor::parse(&hex).unwrap().to_rgb(), rgb);
                prop_assert_eq!(HexColor::parse(&hex.to_lowercase()).unwrap().to_rgb(), rgb);
            }
        }
    }
}
