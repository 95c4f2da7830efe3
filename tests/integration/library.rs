//! Tests for loading, importing and saving reference libraries

use crate::common::seeded;
use huebreed::library::LibraryError;
use huebreed::{Color, ReferenceLibrary, Slot};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_builtin_library_invariants() -> Result<(), Box<dyn std::error::Error>> {
    let library = ReferenceLibrary::builtin()?;
    assert!(!library.is_empty());

    let names: HashSet<&str> = library.iter().map(|scheme| scheme.name.as_str()).collect();
    assert_eq!(names.len(), library.len(), "scheme names are unique");
    for scheme in library {
        assert!(scheme.validate().is_ok(), "{}", scheme.name);
    }
    Ok(())
}

#[test]
fn test_choose_reaches_every_scheme() -> Result<(), Box<dyn std::error::Error>> {
    let library = ReferenceLibrary::builtin()?;
    let mut rng = seeded(21);
    let mut seen = HashSet::new();
    for _ in 0..2_000 {
        let scheme = library.choose(&mut rng).ok_or("empty library")?;
        seen.insert(scheme.name.clone());
    }
    assert_eq!(seen.len(), library.len());
    Ok(())
}

#[test]
fn test_gogh_import_to_file_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("imported.json");

    let gogh = r##"[
        {
            "name": "Afterglow",
            "background": "#212121",
            "foreground": "#D0D0D0",
            "color_01": "#151515", "color_02": "#AC4142", "color_03": "#7E8E50", "color_04": "#E5B567",
            "color_05": "#6C99BB", "color_06": "#9F4E85", "color_07": "#7DD6CF", "color_08": "#D0D0D0",
            "color_09": "#505050", "color_10": "#AC4142", "color_11": "#7E8E50", "color_12": "#E5B567",
            "color_13": "#6C99BB", "color_14": "#9F4E85", "color_15": "#7DD6CF", "color_16": "#F5F5F5"
        },
        { "name": "Partial", "color_02": "#FF0000" },
        { "name": "Bad", "background": "#GGGGGG" }
    ]"##;

    let library = ReferenceLibrary::from_gogh_json(gogh)?;
    assert_eq!(library.len(), 2);
    assert_eq!(library.rejected(), 1);
    library.save_to(&output)?;

    let loaded = ReferenceLibrary::load_from(&output)?;
    assert_eq!(loaded, ReferenceLibrary::from_schemes(library.iter().cloned()));

    let afterglow = loaded.find("afterglow").ok_or("missing Afterglow")?;
    assert_eq!(afterglow.color(Slot::Background), Color::rgb(0x21, 0x21, 0x21));
    assert_eq!(afterglow.colors.bright.white, Color::rgb(0xf5, 0xf5, 0xf5));

    let partial = loaded.find("Partial").ok_or("missing Partial")?;
    assert_eq!(partial.colors.normal.red, Color::rgb(255, 0, 0));
    assert_eq!(partial.colors.normal.green, Color::BLACK);
    assert_eq!(partial.color(Slot::Foreground), Color::WHITE);

    let written = fs::read_to_string(&output)?;
    assert!(written.contains("\"#ac4142\""), "colors are written lowercase");
    Ok(())
}

#[test]
fn test_library_file_with_only_bad_records() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"{"version": 1, "schemes": [{"name": ""}, 42]}"#)?;

    match ReferenceLibrary::load_from(&path) {
        Err(LibraryError::Empty { rejected }) => assert_eq!(rejected, 2),
        other => return Err(format!("unexpected result: {other:?}").into()),
    }
    Ok(())
}
