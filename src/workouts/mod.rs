//! Workout data model and form input.

pub mod form;
pub mod types;

pub use form::{FormData, FormKind, WorkoutForm};
pub use types::{Workout, WorkoutId, WorkoutKind};
