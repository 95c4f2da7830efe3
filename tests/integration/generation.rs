//! Tests for exploration: fully random and jittered library schemes

use crate::common::{builtin_generator, seeded, solid};
use huebreed::{Color, EngineConfig, Generator, ReferenceLibrary, Strategy};

#[test]
fn test_every_random_scheme_has_derived_primary() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let mut rng = seeded(100);

    for total in (0..400).step_by(7) {
        let scheme = generator.random_scheme(total, &mut rng);
        assert!(scheme.colors.has_derived_primary(), "total {total}");
        assert!(scheme.validate().is_ok(), "total {total}");
    }
    Ok(())
}

#[test]
fn test_random_phase_never_reads_the_library() -> Result<(), Box<dyn std::error::Error>> {
    let builtin = builtin_generator()?;
    let empty_library = ReferenceLibrary::default();
    let empty = Generator::new(&empty_library, EngineConfig::default());

    for seed in 0..10 {
        for total in [0, 15, 29] {
            assert_eq!(
                builtin.random_scheme(total, &mut seeded(seed)),
                empty.random_scheme(total, &mut seeded(seed)),
            );
        }
    }
    Ok(())
}

#[test]
fn test_late_schemes_come_from_the_library() {
    let base = solid("Base", Color::rgb(40, 120, 200));
    let library = ReferenceLibrary::from_schemes([base]);
    let config = EngineConfig {
        max_jitter: 0.0,
        ..EngineConfig::default()
    };
    let generator = Generator::new(&library, config);

    let scheme = generator.random_scheme(200, &mut seeded(1));
    for color in scheme.ansi() {
        assert!(color.r.abs_diff(40) <= 1, "{color}");
        assert!(color.g.abs_diff(120) <= 1, "{color}");
        assert!(color.b.abs_diff(200) <= 1, "{color}");
    }
}

#[test]
fn test_jitter_is_capped() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    for total in [170, 171, 500, 10_000] {
        assert_eq!(generator.strategy(total), Strategy::Jittered { amount: 0.5 });
    }
    assert_eq!(generator.strategy(29), Strategy::FullyRandom);
    Ok(())
}

#[test]
fn test_same_seed_same_scheme() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    for total in [0, 60] {
        let a = generator.random_scheme(total, &mut seeded(77));
        let b = generator.random_scheme(total, &mut seeded(77));
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn test_names_are_never_empty() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let mut rng = seeded(5);
    for total in 0..200 {
        let scheme = generator.random_scheme(total, &mut rng);
        assert!(!scheme.name.trim().is_empty());
    }
    Ok(())
}
