//! App controller: owns the workout collection and drives the collaborators.
//!
//! One explicitly constructed instance owns the map handle, the panel
//! handle, the store handle, and the in-memory collection for the lifetime
//! of a session. Everything runs on one thread of control; the driver (the
//! console event loop, or a test) routes events into the handler methods.

use tracing::{debug, info, warn};

use crate::geo::{Coordinates, LocationProvider};
use crate::map::{MapDisplay, MarkerPopup, PanOptions};
use crate::storage::store::KeyValueStore;
use crate::ui::list::ListEntry;
use crate::ui::panel::WorkoutPanel;
use crate::workouts::form::{FormData, WorkoutForm};
use crate::workouts::types::{Workout, WorkoutId};

/// The single key all workouts are persisted under.
pub const STORAGE_KEY: &str = "workouts";

/// Entry-form state. The form closes only through a valid submit (or a
/// reset); there is no cancel transition.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FormState {
    Hidden,
    /// Form is open, awaiting input for a workout at the clicked location.
    Open { pending: Coordinates },
}

/// The workout diary controller.
pub struct App<M, P, S> {
    map: M,
    panel: P,
    store: S,
    workouts: Vec<Workout>,
    form: FormState,
    zoom: u8,
    map_ready: bool,
}

impl<M, P, S> App<M, P, S>
where
    M: MapDisplay,
    P: WorkoutPanel,
    S: KeyValueStore,
{
    /// Create a controller owning the given collaborators.
    pub fn new(map: M, panel: P, store: S, zoom: u8) -> Self {
        Self {
            map,
            panel,
            store,
            workouts: Vec::new(),
            form: FormState::Hidden,
            zoom,
            map_ready: false,
        }
    }

    /// Start a session: restore any persisted workouts, then request the
    /// user's position and bring up the map.
    ///
    /// Restored workouts are rendered as list entries only. They are plain
    /// records out of a value-only round trip and get no map marker; new
    /// workouts created this session get both.
    ///
    /// A position failure raises the "Fail" alert and leaves no map
    /// rendered; the session continues with whatever was restored.
    pub fn bootstrap(&mut self, locator: &mut impl LocationProvider) {
        self.restore();

        for workout in &self.workouts {
            self.panel.push_entry(&ListEntry::from_workout(workout));
        }

        match locator.current_position() {
            Ok(coords) => {
                info!("Position resolved at {}", coords);
                self.map.create_view(coords, self.zoom);
                self.map.add_marker(coords, MarkerPopup::new("Your Location!"));
                self.map_ready = true;
            }
            Err(e) => {
                warn!("Position request failed: {}", e);
                self.panel.alert("Fail");
            }
        }
    }

    /// A click on the map: remember the location and open the entry form.
    /// Clicking again while the form is open re-records the location.
    pub fn handle_map_click(&mut self, coords: Coordinates) {
        if !self.map_ready {
            debug!("Map click ignored, no map rendered");
            return;
        }

        debug!("New workout location {}", coords);
        self.form = FormState::Open {
            pending: coords,
        };
        self.panel.show_form();
    }

    /// The form's type selector changed: swap the cadence/elevation rows.
    pub fn handle_kind_toggle(&mut self) {
        self.panel.toggle_kind_rows();
    }

    /// A form submit. Invalid input raises an alert and leaves everything
    /// unchanged, form included. Valid input creates the workout, renders
    /// its marker and list entry, closes the form, and persists the full
    /// collection.
    pub fn handle_submit(&mut self, form: &WorkoutForm) {
        let FormState::Open {
            pending,
        } = self.form
        else {
            debug!("Submit ignored, form is hidden");
            return;
        };

        let Some(data) = form.parse() else {
            self.panel.alert("Input has to be positive numbers!");
            return;
        };

        let workout = match data {
            FormData::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(pending, distance_km, duration_min, cadence_spm),
            FormData::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(pending, distance_km, duration_min, elevation_gain_m),
        };

        info!("Logged {} (id {})", workout.description(), workout.id());

        self.render_marker(&workout);
        self.panel.push_entry(&ListEntry::from_workout(&workout));
        self.workouts.push(workout);

        self.panel.hide_form();
        self.form = FormState::Hidden;

        self.persist();
    }

    /// A click on a list entry: pan the map to that workout. An id with no
    /// match in the collection is a no-op.
    pub fn move_to_workout(&mut self, id: WorkoutId) {
        let Some(workout) = self.workouts.iter().find(|w| w.id() == id) else {
            debug!("No workout with id {}", id);
            return;
        };

        self.map.set_view(workout.coords(), self.zoom, PanOptions::animated());
    }

    /// Clear the persisted value and reinitialize to a blank session.
    /// Destructive; no confirmation. A fresh `bootstrap` restarts from here.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!("Failed to clear store: {}", e);
        }

        self.workouts.clear();
        self.panel.clear_entries();
        self.panel.hide_form();
        self.form = FormState::Hidden;
        self.map_ready = false;

        info!("Session reset");
    }

    /// The workouts logged so far, in creation order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn render_marker(&mut self, workout: &Workout) {
        let kind = workout.kind();
        let popup = MarkerPopup::new(format!("{} {}", kind.icon(), workout.description()))
            .with_class(format!("{}-popup", kind.as_str()));
        self.map.add_marker(workout.coords(), popup);
    }

    /// Overwrite the stored value with the whole collection. Store failures
    /// are absorbed; the in-memory session stays usable.
    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.workouts) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to serialize workouts: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &snapshot) {
            warn!("Failed to persist workouts: {}", e);
        }
    }

    /// Read the stored value back. Absent, unreadable, or malformed all
    /// mean the same thing: start with an empty collection.
    fn restore(&mut self) {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(e) => {
                warn!("Failed to read store: {}", e);
                return;
            }
        };

        match serde_json::from_str::<Vec<Workout>>(&stored) {
            Ok(workouts) => {
                info!("Restored {} workouts", workouts.len());
                self.workouts = workouts;
            }
            Err(e) => {
                warn!("Ignoring malformed stored workouts: {}", e);
            }
        }
    }
}
