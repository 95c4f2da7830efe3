//! Color scheme data model
//!
//! A scheme is a name plus 18 colors: two primary colors and two sets of the
//! eight ANSI colors. The JSON shape matches the reference library file:
//!
//! ```json
//! { "name": "...", "colors": { "primary": {...}, "normal": {...}, "bright": {...} } }
//! ```

mod slot;

pub use slot::{Ansi, Slot};

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Invariant violations for a single scheme record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// The scheme name is empty or whitespace
    #[error("scheme name must not be empty")]
    EmptyName,
}

/// Background and foreground colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Primary {
    /// Terminal background
    pub background: Color,
    /// Default text color
    pub foreground: Color,
}

/// The eight named ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AnsiColors {
    /// ANSI black
    pub black: Color,
    /// ANSI red
    pub red: Color,
    /// ANSI green
    pub green: Color,
    /// ANSI yellow
    pub yellow: Color,
    /// ANSI blue
    pub blue: Color,
    /// ANSI magenta
    pub magenta: Color,
    /// ANSI cyan
    pub cyan: Color,
    /// ANSI white
    pub white: Color,
}

impl AnsiColors {
    /// Build from colors in ANSI order (black, red, ..., white)
    #[must_use]
    pub const fn from_array(colors: [Color; 8]) -> Self {
        let [black, red, green, yellow, blue, magenta, cyan, white] = colors;
        Self {
            black,
            red,
            green,
            yellow,
            blue,
            magenta,
            cyan,
            white,
        }
    }

    /// Colors in ANSI order
    #[must_use]
    pub const fn to_array(&self) -> [Color; 8] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
        ]
    }

    /// Color for one ANSI name
    #[must_use]
    pub const fn get(&self, ansi: Ansi) -> Color {
        match ansi {
            Ansi::Black => self.black,
            Ansi::Red => self.red,
            Ansi::Green => self.green,
            Ansi::Yellow => self.yellow,
            Ansi::Blue => self.blue,
            Ansi::Magenta => self.magenta,
            Ansi::Cyan => self.cyan,
            Ansi::White => self.white,
        }
    }

    /// Mutable slot for one ANSI name
    pub const fn get_mut(&mut self, ansi: Ansi) -> &mut Color {
        match ansi {
            Ansi::Black => &mut self.black,
            Ansi::Red => &mut self.red,
            Ansi::Green => &mut self.green,
            Ansi::Yellow => &mut self.yellow,
            Ansi::Blue => &mut self.blue,
            Ansi::Magenta => &mut self.magenta,
            Ansi::Cyan => &mut self.cyan,
            Ansi::White => &mut self.white,
        }
    }
}

/// All 18 colors of a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Palette {
    /// Background and foreground
    pub primary: Primary,
    /// Regular ANSI colors
    pub normal: AnsiColors,
    /// Bright ANSI colors
    pub bright: AnsiColors,
}

impl Palette {
    /// Build a palette whose primary colors are derived from `normal` and `bright`
    #[must_use]
    pub const fn derived(normal: AnsiColors, bright: AnsiColors) -> Self {
        Self {
            primary: Primary {
                background: normal.black,
                foreground: bright.white,
            },
            normal,
            bright,
        }
    }

    /// Set background to normal black and foreground to bright white
    pub const fn derive_primary(&mut self) {
        self.primary.background = self.normal.black;
        self.primary.foreground = self.bright.white;
    }

    /// Whether the primary colors follow the derivation rule
    #[must_use]
    pub fn has_derived_primary(&self) -> bool {
        self.primary.background == self.normal.black && self.primary.foreground == self.bright.white
    }

    /// Color in one slot
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Color {
        match slot {
            Slot::Background => self.primary.background,
            Slot::Foreground => self.primary.foreground,
            Slot::Normal(ansi) => self.normal.get(ansi),
            Slot::Bright(ansi) => self.bright.get(ansi),
        }
    }

    /// Mutable reference to one slot
    pub const fn get_mut(&mut self, slot: Slot) -> &mut Color {
        match slot {
            Slot::Background => &mut self.primary.background,
            Slot::Foreground => &mut self.primary.foreground,
            Slot::Normal(ansi) => self.normal.get_mut(ansi),
            Slot::Bright(ansi) => self.bright.get_mut(ansi),
        }
    }

    /// Replace the color in one slot
    pub const fn set(&mut self, slot: Slot, color: Color) {
        *self.get_mut(slot) = color;
    }

    /// The 16 normal and bright colors, normal first
    ///
    /// Primary colors are derived and therefore left out.
    #[must_use]
    pub fn ansi(&self) -> [Color; 16] {
        let mut out = [Color::BLACK; 16];
        out[..8].copy_from_slice(&self.normal.to_array());
        out[8..].copy_from_slice(&self.bright.to_array());
        out
    }

    /// Slots whose color is identical in both palettes, in [`Slot::ALL`] order
    #[must_use]
    pub fn shared_slots(&self, other: &Self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|&slot| self.get(slot) == other.get(slot))
            .collect()
    }

    /// Apply `f` to every slot in [`Slot::ALL`] order
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Slot, Color) -> Color) -> Self {
        let mut out = *self;
        for slot in Slot::ALL {
            out.set(slot, f(slot, self.get(slot)));
        }
        out
    }
}

/// A named terminal color scheme
///
/// Treated as an immutable snapshot: generators clone a parent and modify the
/// copy, never a scheme that is already stored somewhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Display name
    pub name: String,
    /// The 18 colors
    pub colors: Palette,
}

impl ColorScheme {
    /// Create a scheme from a name and a full palette
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Palette) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Color in one slot
    #[must_use]
    pub const fn color(&self, slot: Slot) -> Color {
        self.colors.get(slot)
    }

    /// The 16 normal and bright colors
    #[must_use]
    pub fn ansi(&self) -> [Color; 16] {
        self.colors.ansi()
    }

    /// Check record-level invariants
    ///
    /// Color slots cannot be invalid once parsed; only the name needs checking.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::EmptyName`] if the name is blank
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.name.trim().is_empty() {
            return Err(SchemeError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} on {})",
            self.name, self.colors.primary.foreground, self.colors.primary.background
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ColorScheme {
        let normal = AnsiColors::from_array(std::array::from_fn(|i| {
            Color::rgb(u8::try_from(i).unwrap_or(0), 0, 0)
        }));
        let bright = AnsiColors::from_array(std::array::from_fn(|i| {
            Color::rgb(0, u8::try_from(i).unwrap_or(0), 255)
        }));
        ColorScheme::new("Sample", Palette::derived(normal, bright))
    }

    #[test]
    fn test_derived_primary() {
        let scheme = sample();
        assert_eq!(scheme.colors.primary.background, scheme.colors.normal.black);
        assert_eq!(scheme.colors.primary.foreground, scheme.colors.bright.white);
        assert!(scheme.colors.has_derived_primary());
    }

    #[test]
    fn test_slot_access_covers_all_eighteen() {
        let mut palette = sample().colors;
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            palette.set(slot, Color::rgb(1, 2, u8::try_from(i).unwrap_or(0)));
        }
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            assert_eq!(palette.get(slot), Color::rgb(1, 2, u8::try_from(i).unwrap_or(0)));
        }
    }

    #[test]
    fn test_ansi_order() {
        let scheme = sample();
        let ansi = scheme.ansi();
        assert_eq!(ansi[0], scheme.colors.normal.black);
        assert_eq!(ansi[7], scheme.colors.normal.white);
        assert_eq!(ansi[8], scheme.colors.bright.black);
        assert_eq!(ansi[15], scheme.colors.bright.white);
    }

    #[test]
    fn test_map_visits_every_slot() {
        let palette = sample().colors;
        let mut visited = Vec::new();
        let mapped = palette.map(|slot, _| {
            visited.push(slot);
            Color::WHITE
        });
        assert_eq!(visited, Slot::ALL.to_vec());
        assert!(Slot::ALL.iter().all(|&slot| mapped.get(slot) == Color::WHITE));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut scheme = sample();
        assert_eq!(scheme.validate(), Ok(()));
        scheme.name = "   ".to_string();
        let error = scheme.validate().err();
        assert_eq!(error, Some(SchemeError::EmptyName));

        // Errors are plain values and can be reported more than once.
        let reported = error.map(|e| (e, e.to_string()));
        assert_eq!(
            reported,
            Some((SchemeError::EmptyName, "scheme name must not be empty".to_string()))
        );
    }

    #[test]
    fn test_shared_slots() {
        let a = sample();
        let mut b = a.clone();
        assert_eq!(a.colors.shared_slots(&b.colors).len(), 18);
        b.colors.set(Slot::Normal(Ansi::Red), Color::rgb(9, 9, 9));
        let shared = a.colors.shared_slots(&b.colors);
        assert!(!shared.contains(&Slot::Normal(Ansi::Red)));
        assert_eq!(shared.len(), 17);
    }

    #[test]
    fn test_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_value(sample())?;
        assert_eq!(json["name"], "Sample");
        assert_eq!(json["colors"]["primary"]["background"], "#000000");
        assert_eq!(json["colors"]["bright"]["white"], "#0007ff");
        assert_eq!(json["colors"]["normal"]["red"], "#010000");

        let parsed: ColorScheme = serde_json::from_value(json)?;
        assert_eq!(parsed, sample());
        Ok(())
    }

    #[test]
    fn test_json_rejects_missing_slot() {
        let json = serde_json::json!({
            "name": "Broken",
            "colors": {
                "primary": { "background": "#000000", "foreground": "#ffffff" },
                "normal": { "black": "#000000" },
                "bright": {}
            }
        });
        assert!(serde_json::from_value::<ColorScheme>(json).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "Sample (#0007ff on #000000)");
    }
}
