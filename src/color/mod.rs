//! Color codec
//!
//! Colors are stored as 8-bit sRGB and serialized as `#rrggbb`. All
//! perturbation happens in hue/saturation/lightness space, see [`Hsl`].

mod hsl;

pub use hsl::Hsl;

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct 24-bit colors.
const COLOR_SPACE: usize = 1 << 24;

/// Errors produced when parsing a `#rrggbb` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    /// The string does not have exactly six digits after `#`
    #[error("color {0:?} must have exactly six hex digits")]
    Length(String),
    /// One of the digits is not hexadecimal
    #[error("color {0:?} contains a non-hex digit")]
    Digit(String),
}

/// An opaque RGB color
///
/// Parsing accepts upper- or lowercase hex digits; formatting always emits
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black, `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure white, `#ffffff`
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from its channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly `#` followed by six hex digits
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(hex.to_string()));
        };
        if digits.len() != 6 {
            return Err(ColorParseError::Length(hex.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Digit(hex.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a lowercase `#rrggbb` string
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Unpack from a `0xRRGGBB` integer; bits above 24 are ignored
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self::rgb(r, g, b)
    }

    /// Draw a color uniformly from the whole 24-bit space
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let value = rng.index(COLOR_SPACE);
        Self::from_u32(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Convert to hue/saturation/lightness
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Build a color from HSL components
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness clamp to `[0, 100]`.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Hsl::new(hue, saturation, lightness).to_color()
    }

    /// WCAG relative luminance in `[0, 1]`
    #[must_use]
    pub fn luminosity(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.0722_f64.mul_add(
            linear(self.b),
            0.2126_f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }

    /// Randomly perturb hue, saturation and lightness
    ///
    /// `amount` is clamped to `[0, 1]`. Hue moves by up to `amount * 360`
    /// degrees, saturation and lightness by up to `amount * 100` units, each
    /// with an independent draw. `amount == 0` returns the same color.
    #[must_use]
    pub fn jitter<R: RandomSource>(self, amount: f64, rng: &mut R) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let hsl = self.to_hsl();

        let hue = (rng.signed_unit() * amount).mul_add(360.0, hsl.hue);
        let saturation = (rng.signed_unit() * amount).mul_add(100.0, hsl.saturation);
        let lightness = (rng.signed_unit() * amount).mul_add(100.0, hsl.lightness);

        Self::from_hsl(hue, saturation, lightness)
    }

    /// Shift lightness two units toward mid-gray
    ///
    /// Always yields a different color, which the repulsion step relies on
    /// when a random re-jitter happens to land on the same value.
    #[must_use]
    pub fn nudged(self) -> Self {
        let hsl = self.to_hsl();
        let step = if hsl.lightness > 50.0 { -2.0 } else { 2.0 };
        let moved = Self::from_hsl(hsl.hue, hsl.saturation, hsl.lightness + step);
        if moved == self {
            // Rounding swallowed the step; move the channels directly.
            let shift = |c: u8| if step < 0.0 { c.saturating_sub(5) } else { c.saturating_add(5) };
            Self::rgb(shift(self.r), shift(self.g), shift(self.b))
        } else {
            moved
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
