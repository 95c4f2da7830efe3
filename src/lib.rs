//! Huebreed - evolve terminal color schemes from like/dislike feedback
//!
//! Huebreed deals rounds of 18-color terminal schemes. Early rounds explore
//! with fully random palettes, later ones jitter schemes from a reference
//! library, and once the user has liked something the generator mutates
//! recent likes while steering away from recent dislikes.
//!
//! All randomness flows through [`rng::RandomSource`], so every generator is
//! deterministic under a seeded or scripted source.

pub mod color;
pub mod config;
pub mod generate;
pub mod library;
pub mod naming;
pub mod paths;
pub mod rng;
pub mod scheme;
pub mod session;

pub use color::Color;
pub use config::{Config, EngineConfig};
pub use generate::{Generator, Strategy};
pub use library::ReferenceLibrary;
pub use scheme::{ColorScheme, Palette, Slot};
pub use session::Session;
