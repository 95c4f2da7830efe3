//! Crossover of two schemes

use super::{Generator, seal};
use crate::rng::RandomSource;
use crate::scheme::ColorScheme;

/// Probability of taking a slot from the first parent
const FIRST_PARENT_CHANCE: f64 = 0.5;

impl Generator<'_> {
    /// Mix two schemes
    ///
    /// Each of the 16 ANSI slots comes from `a` or `b` with equal
    /// probability; the primary colors are re-derived and the child gets a
    /// fresh name. Neither parent is modified.
    pub fn cross<R: RandomSource>(a: &ColorScheme, b: &ColorScheme, rng: &mut R) -> ColorScheme {
        let palette = a.colors.map(|slot, color| {
            if slot.is_primary() || rng.chance(FIRST_PARENT_CHANCE) {
                color
            } else {
                b.color(slot)
            }
        });
        seal(palette, rng)
    }
}
