//! Exploration: fully random palettes and jittered library schemes

use super::{Generator, Strategy, seal};
use crate::color::Color;
use crate::rng::RandomSource;
use crate::scheme::{ColorScheme, Palette};
use tracing::{debug, warn};

impl Generator<'_> {
    /// Generate a scheme without any preference signal
    ///
    /// Before `random_phase_len` schemes have been generated every slot gets
    /// an independent uniform color. After that a library scheme is picked
    /// and all 18 of its colors are jittered by [`Self::jitter_amount`].
    /// Either way the primary colors are re-derived and the scheme is named
    /// from its 16 ANSI colors.
    pub fn random_scheme<R: RandomSource>(&self, total: u64, rng: &mut R) -> ColorScheme {
        match self.strategy(total) {
            Strategy::FullyRandom => fully_random(rng),
            Strategy::Jittered { amount } => {
                let Some(base) = self.library.choose(rng) else {
                    warn!(total, "Reference library is empty, generating a random scheme");
                    return fully_random(rng);
                };
                debug!(base = %base.name, amount, "Jittering reference scheme");
                let palette = base.colors.map(|_, color| color.jitter(amount, rng));
                seal(palette, rng)
            }
        }
    }
}

fn fully_random<R: RandomSource>(rng: &mut R) -> ColorScheme {
    let palette = Palette::default().map(|_, _| Color::random(rng));
    seal(palette, rng)
}
