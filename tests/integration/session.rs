//! Tests for multi-round sessions persisted between runs

use crate::common::{builtin_generator, seeded};
use huebreed::{Session, Strategy};
use tempfile::TempDir;

#[test]
fn test_rounds_move_from_exploration_to_library() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let mut session = Session::new();
    let mut rng = seeded(4);

    let mut rounds = 0;
    while session.generated() < 30 {
        assert_eq!(generator.strategy(session.generated()), Strategy::FullyRandom);
        let round = session.deal(&generator, 3, &mut rng);
        session.dislike_all(round);
        rounds += 1;
    }
    assert_eq!(rounds, 10);
    assert_eq!(session.disliked().len(), 30);
    assert!(matches!(
        generator.strategy(session.generated()),
        Strategy::Jittered { .. }
    ));
    Ok(())
}

#[test]
fn test_session_survives_save_between_rounds() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("session.json");
    let generator = builtin_generator()?;
    let mut rng = seeded(6);

    let mut session = Session::load_from(&path)?;
    let round = session.deal(&generator, 3, &mut rng);
    let mut cards = round.into_iter();
    let liked = cards.next().ok_or("empty round")?;
    session.like(liked.clone());
    session.dislike_all(cards);
    session.save_to(&path)?;

    let mut resumed = Session::load_from(&path)?;
    assert_eq!(resumed, session);
    assert_eq!(resumed.liked(), std::slice::from_ref(&liked));
    assert_eq!(resumed.disliked().len(), 2);

    let next = resumed.deal(&generator, 3, &mut rng);
    assert_eq!(next.len(), 3);
    assert_eq!(resumed.generated(), 6);
    assert!(next.iter().all(|scheme| scheme.colors.has_derived_primary()));
    Ok(())
}

#[test]
fn test_mix_then_clear() -> Result<(), Box<dyn std::error::Error>> {
    let generator = builtin_generator()?;
    let mut session = Session::new();
    let mut rng = seeded(10);

    let round = session.deal(&generator, 2, &mut rng);
    let [a, b] = <[_; 2]>::try_from(round).map_err(|_| "round size")?;
    let child = session.mix(&a, &b, &mut rng);

    assert_eq!(session.liked(), [a, b].as_slice());
    assert!(child.colors.has_derived_primary());
    assert_eq!(session.generated(), 3);

    session.clear();
    assert!(session.liked().is_empty());
    assert_eq!(session.generated(), 3);
    Ok(())
}
