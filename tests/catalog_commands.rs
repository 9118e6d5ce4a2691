use std::fs;

use game_catalog_manager::{
    ensure_store, read_all, write_all, Catalog, CommandError, GameRecord, ValidationError,
    ViewFilter,
};
use tempfile::{tempdir, TempDir};

fn game(name: &str, platform: &str, rating: &str) -> GameRecord {
    GameRecord::from_fields([
        name,
        "Action",
        "15-06-2019",
        "Some Studio",
        platform,
        "1200",
        "2.1",
        rating,
        "16",
    ])
    .expect("nine fields")
}

fn catalog_with(records: &[GameRecord]) -> (TempDir, Catalog) {
    let dir = tempdir().expect("tempdir");
    let store = ensure_store(dir.path().join("games.csv")).expect("store");
    write_all(&store, records).expect("seed");
    let catalog = Catalog::open(store).expect("catalog");
    (dir, catalog)
}

fn view_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .view()
        .iter()
        .map(|entry| entry.record.name.clone())
        .collect()
}

#[test]
fn round_trip_preserves_every_field() {
    let dir = tempdir().expect("tempdir");
    let store = ensure_store(dir.path().join("games.csv")).expect("store");
    let mut tricky = game("Quote \"Test\", Part 2", "PC", "8.5");
    tricky.developer = "Line\nBreak Studio".to_string();
    let records = vec![game("Doom", "PC", "9"), tricky, game("Tetris", "Game Boy", "10")];

    write_all(&store, &records).expect("write");
    assert_eq!(read_all(&store).expect("read"), records);
}

#[test]
fn add_update_delete_change_the_stored_count() {
    let (_dir, mut catalog) = catalog_with(&[game("Doom", "PC", "9")]);

    let id = catalog.add(game("Quake", "PC", "8.5")).expect("add");
    assert_eq!(read_all(catalog.store()).expect("read").len(), 2);

    let mut renamed = game("Quake II", "PC", "8.8");
    renamed.version = "3.21".to_string();
    catalog.update(id, renamed.clone()).expect("update");
    let stored = read_all(catalog.store()).expect("read");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1], renamed);

    let removed = catalog.delete(id).expect("delete");
    assert_eq!(removed.name, "Quake II");
    assert_eq!(read_all(catalog.store()).expect("read").len(), 1);
}

#[test]
fn invalid_records_are_not_written() {
    let (_dir, mut catalog) = catalog_with(&[]);
    let before = fs::read_to_string(catalog.store().path()).expect("read");

    let mut bad = game("Broken", "PC", "11");
    assert!(matches!(
        catalog.add(bad.clone()),
        Err(CommandError::Invalid(ValidationError::RatingOutOfRange))
    ));
    bad.rating = "5".to_string();
    bad.min_age = String::new();
    assert!(matches!(
        catalog.add(bad),
        Err(CommandError::Invalid(ValidationError::MissingField(_)))
    ));

    assert!(catalog.entries().is_empty());
    assert_eq!(fs::read_to_string(catalog.store().path()).expect("read"), before);
}

#[test]
fn duplicates_are_addressed_by_id() {
    let twin = game("Pong", "Arcade", "6");
    let (_dir, mut catalog) = catalog_with(&[twin.clone(), twin.clone()]);
    let second = catalog.entries()[1].id;

    let mut changed = twin.clone();
    changed.rating = "7".to_string();
    catalog.update(second, changed).expect("update");

    let stored = read_all(catalog.store()).expect("read");
    assert_eq!(stored[0].rating, "6");
    assert_eq!(stored[1].rating, "7");

    catalog.delete(second).expect("delete");
    assert!(matches!(
        catalog.delete(second),
        Err(CommandError::NotFound(id)) if id == second
    ));
    assert_eq!(read_all(catalog.store()).expect("read"), vec![twin]);
}

#[test]
fn ids_from_before_a_refresh_do_not_match_reloaded_records() {
    let (_dir, mut catalog) = catalog_with(&[game("Doom", "PC", "9")]);
    let stale = catalog.entries()[0].id;
    catalog.refresh().expect("refresh");

    assert_ne!(catalog.entries()[0].id, stale);
    assert!(matches!(
        catalog.update(stale, game("Doom", "PC", "9")),
        Err(CommandError::NotFound(_))
    ));
}

#[test]
fn rating_sort_is_descending_with_unparsable_last() {
    let (_dir, mut catalog) = catalog_with(&[
        game("Mid", "PC", "5"),
        game("Unknown", "PC", "n/a"),
        game("Top", "PC", "9.5"),
        game("Low", "PC", "0.5"),
    ]);

    catalog.sort_by_rating();
    assert_eq!(view_names(&catalog), ["Top", "Mid", "Low", "Unknown"]);

    // the toggle flips but the direction never does
    let toggle = catalog.rating_toggle();
    catalog.sort_by_rating();
    assert_ne!(catalog.rating_toggle(), toggle);
    assert_eq!(view_names(&catalog), ["Top", "Mid", "Low", "Unknown"]);
}

#[test]
fn platform_sort_alternates_and_ignores_case() {
    let (_dir, mut catalog) = catalog_with(&[
        game("A", "switch", "5"),
        game("B", "PC", "5"),
        game("C", "Xbox", "5"),
        game("D", "pc", "5"),
    ]);

    assert!(catalog.sort_by_platform());
    assert_eq!(view_names(&catalog), ["B", "D", "A", "C"]);

    assert!(!catalog.sort_by_platform());
    assert_eq!(view_names(&catalog), ["C", "A", "B", "D"]);
}

#[test]
fn sorting_a_search_result_keeps_the_filter() {
    let (_dir, mut catalog) = catalog_with(&[
        game("Zelda II", "NES", "6"),
        game("Metroid", "NES", "9"),
        game("Zelda: Breath of the Wild", "Switch", "9.7"),
    ]);

    catalog.search("zelda").expect("search");
    catalog.sort_by_rating();
    assert_eq!(
        view_names(&catalog),
        ["Zelda: Breath of the Wild", "Zelda II"]
    );
}

#[test]
fn search_matches_names_case_insensitively() {
    let (_dir, mut catalog) = catalog_with(&[
        game("The Legend of ZELDA", "NES", "8"),
        game("Zelda's Adventure", "CD-i", "2"),
        game("Metroid", "NES", "9"),
    ]);

    assert_eq!(catalog.search("  zelda ").expect("search"), 2);
    assert_eq!(
        view_names(&catalog),
        ["The Legend of ZELDA", "Zelda's Adventure"]
    );
    assert_eq!(
        catalog.view_spec().filter,
        ViewFilter::NameContains("zelda".to_string())
    );

    assert_eq!(catalog.search("").expect("reset"), 3);
    assert_eq!(catalog.view_spec().filter, ViewFilter::All);
}

#[test]
fn empty_search_rereads_the_store() {
    let (_dir, mut catalog) = catalog_with(&[game("Doom", "PC", "9")]);
    let mut records = read_all(catalog.store()).expect("read");
    records.push(game("Added Elsewhere", "PC", "7"));
    write_all(catalog.store(), &records).expect("external write");

    assert_eq!(catalog.search("   ").expect("search"), 2);
}

#[test]
fn highest_rated_narrows_to_the_best_record() {
    let (_dir, mut catalog) = catalog_with(&[
        game("Good", "PC", "7.5"),
        game("Best", "PC", "9.0"),
        game("Also Best", "PC", "9.0"),
        game("Odd", "PC", "excellent"),
    ]);

    let best = catalog.highest_rated().expect("a rated game");
    assert_eq!(best.record.name, "Best");
    assert_eq!(view_names(&catalog), ["Best"]);
}

#[test]
fn highest_rated_without_ratings_leaves_the_view() {
    let (_dir, mut catalog) = catalog_with(&[game("Odd", "PC", "?"), game("Odder", "PC", "")]);

    assert!(catalog.highest_rated().is_none());
    assert_eq!(view_names(&catalog), ["Odd", "Odder"]);
}

#[test]
fn mutations_reset_the_view() {
    let (_dir, mut catalog) = catalog_with(&[game("Doom", "PC", "9"), game("Tetris", "GB", "10")]);
    catalog.search("doom").expect("search");
    assert_eq!(catalog.view().len(), 1);

    catalog.add(game("Quake", "PC", "8")).expect("add");
    assert_eq!(catalog.view().len(), 3);
    assert_eq!(catalog.view_spec().filter, ViewFilter::All);
    assert!(catalog.view_spec().sorts.is_empty());
}
