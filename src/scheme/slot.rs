//! Addressing individual colors within a palette

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight ANSI color names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ansi {
    /// Color 0 / 8
    Black,
    /// Color 1 / 9
    Red,
    /// Color 2 / 10
    Green,
    /// Color 3 / 11
    Yellow,
    /// Color 4 / 12
    Blue,
    /// Color 5 / 13
    Magenta,
    /// Color 6 / 14
    Cyan,
    /// Color 7 / 15
    White,
}

impl Ansi {
    /// All names in ANSI order
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Lowercase name as used in scheme files
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

/// One of the 18 color slots of a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `primary.background`
    Background,
    /// `primary.foreground`
    Foreground,
    /// `normal.<name>`
    Normal(Ansi),
    /// `bright.<name>`
    Bright(Ansi),
}

impl Slot {
    /// Every slot: primary first, then normal, then bright
    pub const ALL: [Self; 18] = [
        Self::Background,
        Self::Foreground,
        Self::Normal(Ansi::Black),
        Self::Normal(Ansi::Red),
        Self::Normal(Ansi::Green),
        Self::Normal(Ansi::Yellow),
        Self::Normal(Ansi::Blue),
        Self::Normal(Ansi::Magenta),
        Self::Normal(Ansi::Cyan),
        Self::Normal(Ansi::White),
        Self::Bright(Ansi::Black),
        Self::Bright(Ansi::Red),
        Self::Bright(Ansi::Green),
        Self::Bright(Ansi::Yellow),
        Self::Bright(Ansi::Blue),
        Self::Bright(Ansi::Magenta),
        Self::Bright(Ansi::Cyan),
        Self::Bright(Ansi::White),
    ];

    /// The 16 normal and bright slots
    pub fn ansi() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().skip(2)
    }

    /// Whether this is a derived primary slot
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Background | Self::Foreground)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Background => write!(f, "primary.background"),
            Self::Foreground => write!(f, "primary.foreground"),
            Self::Normal(ansi) => write!(f, "normal.{}", ansi.label()),
            Self::Bright(ansi) => write!(f, "bright.{}", ansi.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_slots_unique() {
        let unique: HashSet<Slot> = Slot::ALL.into_iter().collect();
        assert_eq!(unique.len(), 18);
    }

    #[test]
    fn test_ansi_slots_skip_primary() {
        assert_eq!(Slot::ansi().count(), 16);
        assert!(Slot::ansi().all(|slot| !slot.is_primary()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Slot::Background.to_string(), "primary.background");
        assert_eq!(Slot::Normal(Ansi::Cyan).to_string(), "normal.cyan");
        assert_eq!(Slot::Bright(Ansi::White).to_string(), "bright.white");
    }

    #[test]
    fn test_ansi_labels() {
        let labels: Vec<_> = Ansi::ALL.into_iter().map(Ansi::label).collect();
        assert_eq!(
            labels,
            ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"]
        );
    }
}
