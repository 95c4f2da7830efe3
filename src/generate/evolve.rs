//! Exploitation: mutate liked schemes, repel disliked colors

use super::{Generator, recent, seal};
use crate::rng::RandomSource;
use crate::scheme::ColorScheme;
use tracing::debug;

impl Generator<'_> {
    /// Generate a scheme from like/dislike history
    ///
    /// Only the last `history_window` entries of each history are used. With
    /// no recent likes this is exactly [`Self::random_scheme`], consuming the
    /// same random draws.
    ///
    /// Otherwise a recent like is picked as the parent and each of its 18
    /// slots mutates with probability [`Self::mutation_rate`]. Any slot that
    /// then equals the same slot of a recent dislike is re-jittered at
    /// `repulsion_factor` times the rate; if that leaves the color unchanged
    /// it is nudged, so the collision is always broken. Only exact matches
    /// count as collisions.
    pub fn evolve<R: RandomSource>(
        &self,
        liked: &[ColorScheme],
        disliked: &[ColorScheme],
        total: u64,
        rng: &mut R,
    ) -> ColorScheme {
        let window = self.config.history_window;
        let liked = recent(liked, window);
        let disliked = recent(disliked, window);

        if liked.is_empty() {
            debug!(total, "No liked schemes yet, generating at random");
            return self.random_scheme(total, rng);
        }

        let parent = &liked[rng.index(liked.len())];
        let rate = self.mutation_rate(total);

        let mut palette = parent.colors.map(|_, color| {
            if rng.chance(rate) {
                color.jitter(rate, rng)
            } else {
                color
            }
        });

        let repulsion = rate * self.config.repulsion_factor;
        let mut collisions = 0_usize;
        for rejected in disliked {
            for slot in palette.shared_slots(&rejected.colors) {
                let current = palette.get(slot);
                let moved = current.jitter(repulsion, rng);
                palette.set(slot, if moved == current { current.nudged() } else { moved });
                collisions += 1;
            }
        }

        debug!(
            parent = %parent.name,
            mutation_rate = rate,
            collisions,
            "Evolved scheme"
        );
        seal(palette, rng)
    }
}
