//! End-to-end: a collection on disk through the card store.

use std::path::Path;

use cardgrid_core::{CardStore, HostCollection, PreviewError};
use cardgrid_ingest::{Collection, IngestError};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn store_uses_all_three_render_tiers() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Lang/Templated.csv", "Word,Meaning\ncasa,house\n");
    write(
        root,
        "Lang/Templated.templates.toml",
        "front = \"<b>{{Word}}</b>\"\nback = \"{{FrontSide}}<hr id=answer>{{Meaning}}\"\n",
    );
    write(root, "Lang/Basic.csv", "Front,Back\nperro,dog\n");
    write(root, "Lang/Single.csv", "Text\nsolo\n");
    write(root, "collection.toml", "current_deck = \"Lang\"\n");

    let collection = Collection::open(root).unwrap();
    let cards = collection.cards_for_current_deck(None).unwrap();
    let store = CardStore::build(&cards);

    assert_eq!(store.len(), 3);
    // Decks sort by name: Basic, Single, Templated.
    let basic = store.get(0).unwrap();
    assert_eq!(basic.front(), "perro");
    assert_eq!(basic.back_only(), "dog");

    let single = store.get(1).unwrap();
    assert_eq!(single.front(), "solo");
    assert_eq!(single.back_only(), "solo");

    let templated = store.get(2).unwrap();
    assert_eq!(templated.front(), "<b>casa</b>");
    assert_eq!(templated.back(), "<b>casa</b><hr id=answer>house");
    assert_eq!(templated.back_only(), "house");
}

#[test]
fn limit_truncates_across_child_decks() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", "Front,Back\n1,one\n2,two\n");
    write(dir.path(), "A/B.csv", "Front,Back\n3,three\n4,four\n");

    let mut collection = Collection::open(dir.path()).unwrap();
    collection.select_deck("A").unwrap();
    let cards = collection.cards_for_current_deck(Some(3)).unwrap();
    let store = CardStore::build(&cards);
    let fronts: Vec<&str> = store.iter().map(|item| item.front()).collect();
    assert_eq!(fronts, vec!["1", "2", "3"]);
}

#[test]
fn configured_deck_that_does_not_exist_is_a_host_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.csv", "Front,Back\n1,one\n");
    write(dir.path(), "collection.toml", "current_deck = \"Gone\"\n");

    let collection = Collection::open(dir.path()).unwrap();
    let error = collection.cards_for_current_deck(None).unwrap_err();
    assert!(matches!(error, PreviewError::Host { ref deck, .. } if deck == "Gone"));
}

#[test]
fn broken_config_fails_to_open() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "collection.toml", "current_deck = [");
    let result = Collection::open(dir.path());
    assert!(matches!(result, Err(IngestError::ConfigParse { .. })));
}

#[test]
fn unreadable_deck_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Good.csv", "Front,Back\nhola,hello\n");
    std::fs::write(dir.path().join("Bad.csv"), b"Front,Back\n\xff\xfe,x\n").unwrap();
    write(dir.path(), "Broken.csv", "Front,Back\nuno,one\n");
    write(dir.path(), "Broken.templates.toml", "front = ");

    let mut collection = Collection::open(dir.path()).unwrap();
    let names: Vec<String> = collection.decks().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["Good"]);

    collection.select_deck("Good").unwrap();
    let cards = collection.cards_for_current_deck(None).unwrap();
    assert_eq!(CardStore::build(&cards).get(0).unwrap().front(), "hola");
}
