//! The form/list surface the controller drives.

use crate::ui::list::ListEntry;

/// Trait for the entry-form and workout-list surface.
///
/// Implementations own the visual side entirely; the controller only issues
/// these requests and never reads state back.
pub trait WorkoutPanel {
    /// Reveal the entry form and focus the distance field.
    fn show_form(&mut self);

    /// Hide the entry form and clear all of its inputs.
    fn hide_form(&mut self);

    /// Swap the cadence and elevation rows to match the selected kind.
    /// Purely visual; no stored data changes.
    fn toggle_kind_rows(&mut self);

    /// Append one entry to the workout list.
    fn push_entry(&mut self, entry: &ListEntry);

    /// Remove every entry from the workout list.
    fn clear_entries(&mut self);

    /// Surface a message to the user.
    fn alert(&mut self, message: &str);
}
