//! Common test utilities shared across integration tests

use huebreed::{Color, ColorScheme, EngineConfig, Generator, Palette, ReferenceLibrary};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic random source for a test
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator over the builtin library with default tuning
pub fn builtin_generator() -> Result<Generator<'static>, Box<dyn std::error::Error>> {
    Ok(Generator::new(
        ReferenceLibrary::builtin()?,
        EngineConfig::default(),
    ))
}

/// A scheme where all 18 slots hold the same color
pub fn solid(name: &str, color: Color) -> ColorScheme {
    ColorScheme::new(name, Palette::default().map(|_, _| color))
}
