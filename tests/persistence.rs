//! Persist/restore/reset round trips over memory and file stores.

mod common;

use common::{
    app_with_open_form, app_with_store, clicked, home, BrokenReadStore, FixedLocator,
    RecordingMap, RecordingPanel, TEST_ZOOM,
};
use waylog::app::{App, STORAGE_KEY};
use waylog::storage::store::{FileStore, KeyValueStore, MemoryStore};
use waylog::workouts::form::WorkoutForm;

#[test]
fn test_round_trip_restores_records_in_order() {
    let mut first = app_with_open_form();
    first.handle_submit(&WorkoutForm::running("5", "30", "170"));
    first.handle_map_click(clicked());
    first.handle_submit(&WorkoutForm::cycling("20", "60", "300"));
    let originals: Vec<_> = first.workouts().to_vec();

    // A second session over the same stored value.
    let mut second = app_with_store(first.store().clone());
    second.bootstrap(&mut FixedLocator(home()));

    // Value-only round trip: identical records, same order.
    assert_eq!(second.workouts(), originals.as_slice());

    // Restored workouts are rendered as list entries but get no marker;
    // the only marker after bootstrap is the home marker.
    assert_eq!(second.panel().entries.len(), 2);
    assert_eq!(second.panel().entries[0].id, originals[0].id());
    assert_eq!(second.map().markers.len(), 1);
}

#[test]
fn test_restored_workout_is_usable_for_map_jumps() {
    let mut first = app_with_open_form();
    first.handle_submit(&WorkoutForm::running("5", "30", "170"));
    let id = first.workouts()[0].id();

    let mut second = app_with_store(first.store().clone());
    second.bootstrap(&mut FixedLocator(home()));

    second.move_to_workout(id);
    assert_eq!(second.map().pans.len(), 1);
    assert_eq!(second.map().pans[0].0, clicked());
}

#[test]
fn test_absent_value_starts_empty() {
    let mut app = app_with_store(MemoryStore::new());
    app.bootstrap(&mut FixedLocator(home()));

    assert!(app.workouts().is_empty());
    assert!(app.panel().entries.is_empty());
    assert!(app.panel().alerts.is_empty());
}

#[test]
fn test_malformed_value_is_treated_as_absent() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_KEY, "not json at all {{").unwrap();

    let mut app = app_with_store(store);
    app.bootstrap(&mut FixedLocator(home()));

    assert!(app.workouts().is_empty());
    assert!(app.panel().alerts.is_empty());

    // The session still works after the bad restore.
    app.handle_map_click(clicked());
    app.handle_submit(&WorkoutForm::running("5", "30", "170"));
    assert_eq!(app.workouts().len(), 1);
}

#[test]
fn test_store_read_error_is_treated_as_absent() {
    let mut app = app_with_store(BrokenReadStore);
    app.bootstrap(&mut FixedLocator(home()));

    assert!(app.workouts().is_empty());
    assert!(app.panel().alerts.is_empty());
}

#[test]
fn test_reset_clears_store_and_session() {
    let mut app = app_with_open_form();
    app.handle_submit(&WorkoutForm::running("5", "30", "170"));
    assert!(app.store().get(STORAGE_KEY).unwrap().is_some());

    app.reset();

    assert!(app.workouts().is_empty());
    assert!(app.panel().entries.is_empty());
    assert!(!app.panel().form_visible);
    assert!(app.store().get(STORAGE_KEY).unwrap().is_none());

    // A fresh session over the cleared store restores nothing.
    let mut next = app_with_store(app.store().clone());
    next.bootstrap(&mut FixedLocator(home()));
    assert!(next.workouts().is_empty());
}

#[test]
fn test_every_submit_overwrites_the_snapshot() {
    let mut app = app_with_open_form();
    app.handle_submit(&WorkoutForm::running("5", "30", "170"));
    let first = app.store().get(STORAGE_KEY).unwrap().unwrap();

    app.handle_map_click(clicked());
    app.handle_submit(&WorkoutForm::cycling("20", "60", "300"));
    let second = app.store().get(STORAGE_KEY).unwrap().unwrap();

    assert_ne!(first, second);
    assert!(second.contains("\"type\":\"running\""));
    assert!(second.contains("\"type\":\"cycling\""));
}

#[test]
fn test_file_store_round_trip_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = App::new(
        RecordingMap::default(),
        RecordingPanel::default(),
        FileStore::open(dir.path()).unwrap(),
        TEST_ZOOM,
    );
    first.bootstrap(&mut FixedLocator(home()));
    first.handle_map_click(clicked());
    first.handle_submit(&WorkoutForm::cycling("27", "95", "523"));
    let originals: Vec<_> = first.workouts().to_vec();
    drop(first);

    let mut second = App::new(
        RecordingMap::default(),
        RecordingPanel::default(),
        FileStore::open(dir.path()).unwrap(),
        TEST_ZOOM,
    );
    second.bootstrap(&mut FixedLocator(home()));

    assert_eq!(second.workouts(), originals.as_slice());
    assert_eq!(second.panel().entries.len(), 1);
    assert_eq!(second.panel().entries[0].title, originals[0].description());
}
