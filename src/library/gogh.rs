//! Gogh theme records
//!
//! Gogh stores a theme as flat keys: `name`, `background`, `foreground` and
//! `color_01` through `color_16`. Other keys (`author`, `variant`, ...) are ignored.

use crate::color::{Color, ColorParseError};
use crate::scheme::{AnsiColors, ColorScheme, Palette, Primary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const UNKNOWN_NAME: &str = "Unknown Theme";

/// One theme from a Gogh export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoghTheme {
    /// Theme name
    #[serde(default)]
    pub name: Option<String>,
    /// Background color as `#rrggbb`
    #[serde(default)]
    pub background: Option<String>,
    /// Foreground color as `#rrggbb`
    #[serde(default)]
    pub foreground: Option<String>,
    /// Remaining keys, including `color_01` through `color_16`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GoghTheme {
    /// ANSI color `n` (1-based, 1..=16), if present as a string
    #[must_use]
    pub fn ansi(&self, n: usize) -> Option<&str> {
        self.extra.get(&format!("color_{n:02}")).and_then(Value::as_str)
    }

    /// Convert into a scheme
    ///
    /// `color_01..08` become the normal colors and `color_09..16` the bright
    /// ones. Missing colors default to black, a missing foreground to white and
    /// a missing name to "Unknown Theme". Colors that are present must parse.
    ///
    /// # Errors
    ///
    /// Returns an error if any present color is not `#rrggbb`
    pub fn into_scheme(self) -> Result<ColorScheme, ColorParseError> {
        let mut ansi = [Color::BLACK; 16];
        for (index, slot) in ansi.iter_mut().enumerate() {
            if let Some(hex) = self.ansi(index + 1) {
                *slot = Color::from_hex(hex)?;
            }
        }
        let [n0, n1, n2, n3, n4, n5, n6, n7, b0, b1, b2, b3, b4, b5, b6, b7] = ansi;

        let primary = Primary {
            background: parse_or(self.background.as_deref(), Color::BLACK)?,
            foreground: parse_or(self.foreground.as_deref(), Color::WHITE)?,
        };
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        Ok(ColorScheme::new(
            name,
            Palette {
                primary,
                normal: AnsiColors::from_array([n0, n1, n2, n3, n4, n5, n6, n7]),
                bright: AnsiColors::from_array([b0, b1, b2, b3, b4, b5, b6, b7]),
            },
        ))
    }
}

fn parse_or(hex: Option<&str>, default: Color) -> Result<Color, ColorParseError> {
    hex.map_or(Ok(default), Color::from_hex)
}
