//! waylog - Map-Pinned Workout Diary
//!
//! Mark a point on a map, describe a run or a ride at that point, and get
//! the log back next session. The crate carries the workout data model, the
//! session controller, and single-key persistence; the map widget, location
//! source, and form/list surface are collaborators behind traits.

pub mod app;
pub mod geo;
pub mod map;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use app::App;
pub use geo::{Coordinates, LocationProvider};
pub use map::MapDisplay;
pub use storage::store::KeyValueStore;
pub use ui::panel::WorkoutPanel;
pub use workouts::form::WorkoutForm;
pub use workouts::types::{Workout, WorkoutKind};
