//! Scheme name synthesis
//!
//! Names are assembled from a pool of candidate words: random picks from the
//! fixed word lists, plus labels derived from the palette itself (its
//! overall mood, a theme word for the dominant hue, and a color family name).
//! Two or three candidates survive a shuffle, and occasionally two of them
//! are fused into a single portmanteau.

mod words;

use crate::color::Color;
use crate::rng::RandomSource;
use std::fmt;
use tracing::trace;

/// Probability that only two components are kept instead of three
const TWO_WORD_CHANCE: f64 = 0.3;

/// Probability that two adjacent components are fused into one word
const FUSE_CHANCE: f64 = 0.3;

/// Saturation below which a color is named as a gray
const GRAY_SATURATION: f64 = 20.0;

/// Overall impression of a palette, from average saturation and lightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Saturated and light
    Vibrant,
    /// Desaturated and dark
    Muted,
    /// Very light
    Bright,
    /// Very dark
    Dark,
}

impl Mood {
    /// Classify a set of colors; `None` when nothing stands out
    #[must_use]
    pub fn of(colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let (saturation, lightness) = colors.iter().fold((0.0, 0.0), |(s, l), color| {
            let hsl = color.to_hsl();
            (s + hsl.saturation, l + hsl.lightness)
        });
        let count = f64::from(u32::try_from(colors.len()).unwrap_or(u32::MAX));
        Self::classify(saturation / count, lightness / count)
    }

    /// Classify from average saturation and lightness percentages
    #[must_use]
    pub fn classify(saturation: f64, lightness: f64) -> Option<Self> {
        if saturation > 50.0 && lightness > 50.0 {
            Some(Self::Vibrant)
        } else if saturation < 30.0 && lightness < 40.0 {
            Some(Self::Muted)
        } else if lightness > 70.0 {
            Some(Self::Bright)
        } else if lightness < 30.0 {
            Some(Self::Dark)
        } else {
            None
        }
    }

    /// Word used in names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vibrant => "Vibrant",
            Self::Muted => "Muted",
            Self::Bright => "Bright",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thematic word for a hue band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Reds and oranges
    Sunset,
    /// Yellows
    Citrus,
    /// Greens
    Forest,
    /// Cyans
    Ocean,
    /// Blues
    Twilight,
    /// Purples
    Lavender,
    /// Pinks back to red
    Berry,
}

impl Theme {
    /// Hue bands in lookup order; the first band containing the hue wins
    const BANDS: [(Self, f64, f64); 7] = [
        (Self::Sunset, 0.0, 60.0),
        (Self::Citrus, 45.0, 90.0),
        (Self::Forest, 90.0, 150.0),
        (Self::Ocean, 150.0, 210.0),
        (Self::Twilight, 210.0, 270.0),
        (Self::Lavender, 270.0, 330.0),
        (Self::Berry, 330.0, 360.0),
    ];

    /// Theme for a hue in degrees; `None` outside `[0, 360)`
    #[must_use]
    pub fn for_hue(hue: f64) -> Option<Self> {
        Self::BANDS
            .iter()
            .find(|(_, start, end)| hue >= *start && hue < *end)
            .map(|(theme, _, _)| *theme)
    }

    /// Word used in names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunset => "Sunset",
            Self::Citrus => "Citrus",
            Self::Forest => "Forest",
            Self::Ocean => "Ocean",
            Self::Twilight => "Twilight",
            Self::Lavender => "Lavender",
            Self::Berry => "Berry",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The color with the highest luminosity; ties keep the earliest
#[must_use]
pub fn dominant_color(colors: &[Color]) -> Option<Color> {
    let (first, rest) = colors.split_first()?;
    Some(rest.iter().fold(*first, |dominant, &color| {
        if color.luminosity() > dominant.luminosity() {
            color
        } else {
            dominant
        }
    }))
}

/// Human name for a color's hue family, e.g. "Cobalt", "Pale Mint", "Dark Slate"
pub fn color_family<R: RandomSource>(color: Color, rng: &mut R) -> String {
    let hsl = color.to_hsl();

    let base = if hsl.saturation < GRAY_SATURATION {
        pick(words::GRAYS, rng)
    } else {
        hue_family(hsl.hue)
    };

    if hsl.lightness > 80.0 {
        format!("Pale {base}")
    } else if hsl.lightness < 20.0 {
        format!("Dark {base}")
    } else {
        base.to_string()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "hue is wrapped into [0, 360) so the bucket is small and non-negative"
)]
fn hue_family(hue: f64) -> &'static str {
    let families = words::HUE_FAMILIES;
    let width = 360.0 / families.len() as f64;
    let index = ((hue.rem_euclid(360.0) / width).floor() as usize).min(families.len() - 1);
    families.get(index).copied().unwrap_or("Gray")
}

/// Invented word from a stem and an ending, e.g. "Lumarium"
pub fn invented_word<R: RandomSource>(rng: &mut R) -> String {
    let stem = pick(words::INVENTED_STEMS, rng);
    let ending = pick(words::INVENTED_ENDINGS, rng);
    format!("{stem}{ending}")
}

/// Fuse two words into one portmanteau
///
/// Each word is lowercased, loses a trailing common ending (`-tion`, `-ness`,
/// `-er`, ...) and then its last vowel after the first letter. One of five
/// joining styles is chosen at random.
pub fn fuse_words<R: RandomSource>(first: &str, second: &str, rng: &mut R) -> String {
    let short_first = shorten(first);
    let short_second = shorten(second);

    match rng.index(5) {
        0 => format!("{short_first}{short_second}"),
        1 => format!("{short_first}{second}"),
        2 => format!("{first}{short_second}"),
        3 => format!("{}{short_second}", capitalize(&short_first)),
        _ => format!("{short_first}{}", capitalize(&short_second)),
    }
}

fn shorten(word: &str) -> String {
    let mut short = word.to_lowercase();

    // Longest matching ending wins
    if let Some(ending) = words::FUSION_ENDINGS
        .iter()
        .filter(|ending| short.ends_with(**ending))
        .max_by_key(|ending| ending.len())
    {
        short.truncate(short.len() - ending.len());
    }

    if let Some((index, _)) = short
        .char_indices()
        .skip(1)
        .filter(|(_, c)| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .last()
    {
        short.replace_range(index..=index, "");
    }

    short
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn pick<R: RandomSource>(list: &'static [&'static str], rng: &mut R) -> &'static str {
    list.get(rng.index(list.len())).copied().unwrap_or_default()
}

/// Shuffle the candidates, keep two or three, and maybe fuse a neighboring pair
fn pick_components<R: RandomSource>(mut pool: Vec<String>, rng: &mut R) -> Vec<String> {
    rng.shuffle(&mut pool);
    let keep = if rng.chance(TWO_WORD_CHANCE) { 2 } else { 3 };
    pool.truncate(keep);

    if pool.len() > 1 && rng.chance(FUSE_CHANCE) {
        let at = rng.index(pool.len() - 1);
        let fused = fuse_words(&pool[at], &pool[at + 1], rng);
        pool.splice(at..=at + 1, [fused]);
    }
    pool
}

/// Synthesize a display name for a palette
///
/// `colors` are the 16 normal and bright colors; primary colors are derived
/// from them and carry no extra information. The result is never empty.
pub fn synthesize_name<R: RandomSource>(colors: &[Color; 16], rng: &mut R) -> String {
    let dominant = dominant_color(colors).unwrap_or(Color::BLACK);
    let mood = Mood::of(colors);
    let theme = Theme::for_hue(dominant.to_hsl().hue);

    let pool: Vec<String> = [
        Some(pick(words::PREFIXES, rng).to_string()),
        Some(pick(words::SUFFIXES, rng).to_string()),
        mood.map(|m| m.label().to_string()),
        theme.map(|t| t.label().to_string()),
        Some(pick(words::COMPOUNDS, rng).to_string()),
        Some(invented_word(rng)),
        Some(color_family(dominant, rng)),
        Some(pick(words::ADJECTIVES, rng).to_string()),
        Some(pick(words::NOUNS, rng).to_string()),
    ]
    .into_iter()
    .flatten()
    .filter(|word| !word.is_empty())
    .collect();

    let name = pick_components(pool, rng).join(" ");
    trace!(%name, ?mood, ?theme, %dominant, "Synthesized scheme name");
    if name.trim().is_empty() {
        pick(words::NOUNS, rng).to_string()
    } else {
        name
    }
}
