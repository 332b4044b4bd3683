//! Panel seam and list presentation.

pub mod list;
pub mod panel;

pub use list::{EntryStat, ListEntry};
pub use panel::WorkoutPanel;
