//! Scheme generators
//!
//! A [`Generator`] pairs a reference library with the engine's tuning
//! constants. It holds no mutable state: the generation counter, the
//! like/dislike history and the random source are passed into every call.
//!
//! - [`Generator::random_scheme`] explores: fully random palettes early in a
//!   session, jittered library schemes later.
//! - [`Generator::evolve`] exploits: mutates a recently liked scheme and
//!   steers away from recently disliked colors.
//! - [`Generator::cross`] mixes two schemes slot by slot.

mod cross;
mod evolve;
mod random;

use crate::config::EngineConfig;
use crate::library::ReferenceLibrary;
use crate::naming::synthesize_name;
use crate::rng::RandomSource;
use crate::scheme::{ColorScheme, Palette};

/// How [`Generator::random_scheme`] builds a scheme for a given counter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// 18 independent uniform colors
    FullyRandom,
    /// A library scheme perturbed by `amount`
    Jittered {
        /// Jitter amount in `[0, max_jitter]`
        amount: f64,
    },
}

/// Scheme generator over a reference library
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    library: &'a ReferenceLibrary,
    config: EngineConfig,
}

impl<'a> Generator<'a> {
    /// Create a generator
    #[must_use]
    pub const fn new(library: &'a ReferenceLibrary, config: EngineConfig) -> Self {
        Self { library, config }
    }

    /// The reference library
    #[must_use]
    pub const fn library(&self) -> &'a ReferenceLibrary {
        self.library
    }

    /// The tuning constants
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Strategy used by [`Self::random_scheme`] after `total` generated schemes
    #[must_use]
    pub fn strategy(&self, total: u64) -> Strategy {
        if total < self.config.random_phase_len {
            Strategy::FullyRandom
        } else {
            Strategy::Jittered {
                amount: self.jitter_amount(total),
            }
        }
    }

    /// Jitter applied to library schemes after `total` generated schemes
    ///
    /// Zero until the random phase ends, then rising linearly over
    /// `jitter_ramp` schemes up to `max_jitter`.
    #[must_use]
    pub fn jitter_amount(&self, total: u64) -> f64 {
        let past = as_f64(total.saturating_sub(self.config.random_phase_len));
        let ramp = self.config.jitter_ramp;
        if ramp <= 0.0 {
            return self.config.max_jitter;
        }
        (past / ramp).min(self.config.max_jitter)
    }

    /// Mutation probability and intensity after `total` generated schemes
    ///
    /// Starts at `initial_mutation_rate`, falls by 1.0 every `mutation_decay`
    /// schemes and never goes below `min_mutation_rate`.
    #[must_use]
    pub fn mutation_rate(&self, total: u64) -> f64 {
        let decay = self.config.mutation_decay;
        let decayed = if decay > 0.0 {
            self.config.initial_mutation_rate - as_f64(total) / decay
        } else {
            self.config.initial_mutation_rate
        };
        decayed.max(self.config.min_mutation_rate)
    }
}

/// Re-derive the primary colors and name a finished palette
fn seal<R: RandomSource>(mut palette: Palette, rng: &mut R) -> ColorScheme {
    palette.derive_primary();
    let name = synthesize_name(&palette.ansi(), rng);
    ColorScheme::new(name, palette)
}

/// The last `window` entries of a history
fn recent(schemes: &[ColorScheme], window: usize) -> &[ColorScheme] {
    &schemes[schemes.len().saturating_sub(window)..]
}

fn as_f64(value: u64) -> f64 {
    u32::try_from(value).map_or_else(|_| f64::from(u32::MAX), f64::from)
}
