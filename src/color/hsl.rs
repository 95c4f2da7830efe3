//! Hue/saturation/lightness representation

use super::Color;

/// A color in HSL space
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages
/// `[0, 100]`. Achromatic colors report a hue of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees
    pub hue: f64,
    /// Saturation percentage
    pub saturation: f64,
    /// Lightness percentage
    pub lightness: f64,
}

impl Hsl {
    /// Build an HSL triple, wrapping hue and clamping the percentages
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = if hue.is_finite() {
            hue.rem_euclid(360.0)
        } else {
            0.0
        };
        Self {
            // rem_euclid can round up to exactly 360 for tiny negative inputs
            hue: if hue >= 360.0 { 0.0 } else { hue },
            saturation: clamp_percent(saturation),
            lightness: clamp_percent(lightness),
        }
    }

    /// Convert back to an 8-bit color, rounding each channel
    #[must_use]
    pub fn to_color(self) -> Color {
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
        let sector = self.hue / 60.0;
        let second = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (red, green, blue) = if sector < 1.0 {
            (chroma, second, 0.0)
        } else if sector < 2.0 {
            (second, chroma, 0.0)
        } else if sector < 3.0 {
            (0.0, chroma, second)
        } else if sector < 4.0 {
            (0.0, second, chroma)
        } else if sector < 5.0 {
            (second, 0.0, chroma)
        } else {
            (chroma, 0.0, second)
        };

        Color::rgb(
            to_channel(red + offset),
            to_channel(green + offset),
            to_channel(blue + offset),
        )
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = f64::midpoint(max, min);

        if delta <= f64::EPSILON {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness: lightness * 100.0,
            };
        }

        let hue = if (max - r).abs() <= f64::EPSILON {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if (max - g).abs() <= f64::EPSILON {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let saturation = delta / (1.0 - 2.0f64.mul_add(lightness, -1.0).abs());

        Self::new(hue, saturation * 100.0, lightness * 100.0)
    }
}

const fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=255 before the cast"
)]
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
