use super::*;

#[test]
fn catalog_sizes() {
    assert_eq!(GENRES.len(), 9);
    assert_eq!(STORY_LENGTHS.len(), 4);
}

#[test]
fn genre_lookup_by_id() {
    let found = genre("fairy-tale").unwrap();
    assert_eq!(found.label, "Сказка");
    assert!(genre("opera").is_none());
}

#[test]
fn length_lookup_by_id() {
    let found = story_length("full").unwrap();
    assert_eq!(found.label, "Полный разбор");
    assert!(story_length("epic").is_none());
}

#[test]
fn cli_defaults_exist() {
    // main.rs defaults to these ids; keep them in the catalog.
    assert!(genre("sci-fi").is_some());
    assert!(story_length("medium").is_some());
}

#[test]
fn ids_are_unique() {
    for (i, a) in GENRES.iter().enumerate() {
        for b in &GENRES[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
    for (i, a) in STORY_LENGTHS.iter().enumerate() {
        for b in &STORY_LENGTHS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}
