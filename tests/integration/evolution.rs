//! Tests for exploitation: evolving liked schemes and crossover

use crate::common::{builtin_generator, seeded, solid};
use huebreed::rng::Scripted;
use huebreed::{Color, Generator, ReferenceLibrary, Slot};

#[test]
fn test_empty_likes_is_the_random_generator() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let disliked = vec![solid("Nope", Color::rgb(255, 0, 0))];

    for total in [0, 29, 30, 120, 400] {
        let evolved = generator.evolve(&[], &disliked, total, &mut seeded(total));
        let random = generator.random_scheme(total, &mut seeded(total));
        assert_eq!(evolved, random, "total {total}");
    }
    Ok(())
}

#[test]
fn test_evolved_scheme_has_derived_primary() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let library = ReferenceLibrary::builtin()?;
    let liked: Vec<_> = library.iter().take(5).cloned().collect();
    let disliked: Vec<_> = library.iter().skip(5).take(5).cloned().collect();
    let mut rng = seeded(8);

    for total in 0..100 {
        let child = generator.evolve(&liked, &disliked, total, &mut rng);
        assert!(child.colors.has_derived_primary());
        assert!(!child.name.trim().is_empty());
    }
    Ok(())
}

#[test]
fn test_identical_dislike_repels_every_slot() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let library = ReferenceLibrary::builtin()?;

    for parent in library {
        let liked = vec![parent.clone()];
        let disliked = vec![parent.clone()];
        // Late in the session the mutation rate is at its floor, so most
        // slots survive mutation and collide.
        let child = generator.evolve(&liked, &disliked, 1_000, &mut seeded(3));
        for slot in Slot::ansi() {
            assert_ne!(
                child.color(slot),
                parent.color(slot),
                "{} {slot}",
                parent.name
            );
        }
    }
    Ok(())
}

#[test]
fn test_gray_parent_still_evolves() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let gray = solid("Gray", Color::rgb(128, 128, 128));
    let child = generator.evolve(
        std::slice::from_ref(&gray),
        std::slice::from_ref(&gray),
        0,
        &mut Scripted::new([0.5]),
    );
    assert!(Slot::ansi().all(|slot| child.color(slot) != gray.color(slot)));
    assert!(!child.name.is_empty());
    Ok(())
}

#[test]
fn test_cross_leaves_parents_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let library = ReferenceLibrary::builtin()?;
    let a = library.find("Solarized Dark").ok_or("missing Solarized Dark")?;
    let b = library.find("Solarized Light").ok_or("missing Solarized Light")?;
    let (a_before, b_before) = (a.clone(), b.clone());

    let child = Generator::cross(a, b, &mut seeded(12));
    assert_eq!(a, &a_before);
    assert_eq!(b, &b_before);
    assert!(child.colors.has_derived_primary());
    for slot in Slot::ansi() {
        assert!(child.color(slot) == a.color(slot) || child.color(slot) == b.color(slot));
    }
    Ok(())
}
