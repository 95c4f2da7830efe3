//! Like/dislike history and the generation counter
//!
//! A [`Session`] is the only mutable state around the generators. It is saved
//! as JSON between CLI invocations.

use crate::generate::Generator;
use crate::rng::RandomSource;
use crate::scheme::ColorScheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Persisted preference history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Liked schemes, oldest first
    #[serde(default)]
    liked: Vec<ColorScheme>,

    /// Disliked schemes, oldest first
    #[serde(default)]
    disliked: Vec<ColorScheme>,

    /// Number of schemes generated so far
    #[serde(default)]
    generated: u64,

    /// Version of the session file format
    #[serde(default = "default_version")]
    version: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

const fn default_version() -> u32 {
    1
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            liked: Vec::new(),
            disliked: Vec::new(),
            generated: 0,
            version: default_version(),
        }
    }

    /// Load a session, or start a new one if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No session file, starting fresh");
            return Ok(Self::new());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;
        let session: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;
        Ok(session)
    }

    /// Save the session
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create session directory {}", parent.display())
            })?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        Ok(())
    }

    /// Liked schemes, oldest first
    #[must_use]
    pub fn liked(&self) -> &[ColorScheme] {
        &self.liked
    }

    /// Disliked schemes, oldest first
    #[must_use]
    pub fn disliked(&self) -> &[ColorScheme] {
        &self.disliked
    }

    /// Number of schemes generated so far
    #[must_use]
    pub const fn generated(&self) -> u64 {
        self.generated
    }

    /// Record a liked scheme
    pub fn like(&mut self, scheme: ColorScheme) {
        self.liked.push(scheme);
    }

    /// Record a disliked scheme
    pub fn dislike(&mut self, scheme: ColorScheme) {
        self.disliked.push(scheme);
    }

    /// Record a whole rejected round
    pub fn dislike_all(&mut self, schemes: impl IntoIterator<Item = ColorScheme>) {
        self.disliked.extend(schemes);
    }

    /// Forget all likes and dislikes
    ///
    /// The generation counter is kept, so the session stays past its random phase.
    pub fn clear(&mut self) {
        info!(
            liked = self.liked.len(),
            disliked = self.disliked.len(),
            "Clearing session history"
        );
        self.liked.clear();
        self.disliked.clear();
    }

    /// Deal a round of `count` schemes
    ///
    /// The first card is always a [`Generator::random_scheme`] to keep
    /// exploring; the rest come from [`Generator::evolve`]. Every card sees
    /// the counter as it was before the round, which then advances by `count`.
    pub fn deal<R: RandomSource>(
        &mut self,
        generator: &Generator<'_>,
        count: usize,
        rng: &mut R,
    ) -> Vec<ColorScheme> {
        let total = self.generated;
        let round: Vec<ColorScheme> = (0..count)
            .map(|index| {
                if index == 0 {
                    generator.random_scheme(total, rng)
                } else {
                    generator.evolve(&self.liked, &self.disliked, total, rng)
                }
            })
            .collect();

        self.generated = total.saturating_add(u64::try_from(count).unwrap_or(u64::MAX));
        debug!(count, generated = self.generated, "Dealt round");
        round
    }

    /// Mix two schemes, recording both as liked
    pub fn mix<R: RandomSource>(
        &mut self,
        a: &ColorScheme,
        b: &ColorScheme,
        rng: &mut R,
    ) -> ColorScheme {
        self.like(a.clone());
        self.like(b.clone());
        self.generated = self.generated.saturating_add(1);
        Generator::cross(a, b, rng)
    }
}
