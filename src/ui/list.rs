//! Presentational records for the workout list.
//!
//! The controller builds these; panel implementations render them however
//! their surface works (HTML rows, console lines, test recordings).

use crate::workouts::{Workout, WorkoutId, WorkoutKind};

/// One icon/value/unit row inside a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStat {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl EntryStat {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self {
            icon,
            value,
            unit,
        }
    }
}

/// A rendered list entry: title line plus stat rows, carrying the workout id
/// so a click on the entry can be routed back to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: WorkoutId,
    /// Lowercase kind discriminant, for per-kind styling.
    pub kind: &'static str,
    pub title: String,
    pub stats: Vec<EntryStat>,
}

impl ListEntry {
    /// Build the entry for a workout: distance and duration as entered,
    /// derived pace or speed to one decimal, then the kind-specific extra.
    pub fn from_workout(workout: &Workout) -> Self {
        let kind = workout.kind();

        let mut stats = vec![
            EntryStat::new(kind.icon(), workout.distance_km().to_string(), "km"),
            EntryStat::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match kind {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                stats.push(EntryStat::new("⚡️", format!("{pace_min_per_km:.1}"), "min/km"));
                stats.push(EntryStat::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                stats.push(EntryStat::new("⚡️", format!("{speed_km_per_h:.1}"), "km/h"));
                stats.push(EntryStat::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id(),
            kind: kind.as_str(),
            title: workout.description().to_string(),
            stats,
        }
    }
}
