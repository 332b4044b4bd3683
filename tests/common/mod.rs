//! Recording collaborators shared by the integration tests.
//!
//! Each mock records the requests the controller issues so tests can assert
//! on the exact render/persist traffic.

#![allow(dead_code)]

use waylog::app::App;
use waylog::geo::{Coordinates, LocationProvider, PositionError};
use waylog::map::{MapDisplay, MarkerPopup, PanOptions};
use waylog::storage::store::{KeyValueStore, MemoryStore, StoreError};
use waylog::ui::list::ListEntry;
use waylog::ui::panel::WorkoutPanel;

pub const TEST_ZOOM: u8 = 13;

/// Map display that records every request.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views: Vec<(Coordinates, u8)>,
    pub markers: Vec<(Coordinates, MarkerPopup)>,
    pub pans: Vec<(Coordinates, u8, PanOptions)>,
}

impl MapDisplay for RecordingMap {
    fn create_view(&mut self, center: Coordinates, zoom: u8) {
        self.views.push((center, zoom));
    }

    fn add_marker(&mut self, coords: Coordinates, popup: MarkerPopup) {
        self.markers.push((coords, popup));
    }

    fn set_view(&mut self, center: Coordinates, zoom: u8, options: PanOptions) {
        self.pans.push((center, zoom, options));
    }
}

/// Panel that records form state, entries, and alerts.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub form_visible: bool,
    pub toggles: u32,
    pub entries: Vec<ListEntry>,
    pub alerts: Vec<String>,
}

impl WorkoutPanel for RecordingPanel {
    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn toggle_kind_rows(&mut self) {
        self.toggles += 1;
    }

    fn push_entry(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

/// Provider that resolves to a fixed position.
pub struct FixedLocator(pub Coordinates);

impl LocationProvider for FixedLocator {
    fn current_position(&mut self) -> Result<Coordinates, PositionError> {
        Ok(self.0)
    }
}

/// Provider whose one-shot request fails.
pub struct FailingLocator;

impl LocationProvider for FailingLocator {
    fn current_position(&mut self) -> Result<Coordinates, PositionError> {
        Err(PositionError::Denied)
    }
}

/// Store whose reads fail; writes and removes succeed silently.
#[derive(Debug, Default)]
pub struct BrokenReadStore;

impl KeyValueStore for BrokenReadStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::IoError("disk on fire".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

pub fn home() -> Coordinates {
    Coordinates::new(46.519, 6.633)
}

pub fn clicked() -> Coordinates {
    Coordinates::new(46.530, 6.590)
}

/// A controller over recording collaborators and the given store.
pub fn app_with_store<S: KeyValueStore>(store: S) -> App<RecordingMap, RecordingPanel, S> {
    App::new(RecordingMap::default(), RecordingPanel::default(), store, TEST_ZOOM)
}

/// A controller over recording collaborators and a fresh in-memory store.
pub fn app() -> App<RecordingMap, RecordingPanel, MemoryStore> {
    app_with_store(MemoryStore::new())
}

/// Bootstrap with a successful position, then click the map so the form is
/// open and ready for a submit.
pub fn app_with_open_form() -> App<RecordingMap, RecordingPanel, MemoryStore> {
    let mut app = app();
    app.bootstrap(&mut FixedLocator(home()));
    app.handle_map_click(clicked());
    app
}
