//! Workout entities and derived-metric computation.
//!
//! A workout is a plain record: every derived value (pace or speed, the
//! description line) is computed exactly once at construction and never
//! recomputed, including after a persistence round trip.

use crate::geo::Coordinates;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Workout identifier: the creation timestamp in milliseconds since the
/// Unix epoch. Monotonic-enough; uniqueness is best-effort and not
/// guaranteed for two workouts created in the same millisecond.
pub type WorkoutId = i64;

/// Per-kind payload, tagged as `"type": "running" | "cycling"` in the
/// serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// Steps per minute.
        cadence_spm: u32,
        /// Derived: duration / distance, min/km.
        pace_min_per_km: f64,
    },
    Cycling {
        /// Total climb in meters.
        elevation_gain_m: f64,
        /// Derived: distance / (duration / 60), km/h.
        speed_km_per_h: f64,
    },
}

impl WorkoutKind {
    /// Capitalized kind name, as it appears in descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "Running",
            WorkoutKind::Cycling { .. } => "Cycling",
        }
    }

    /// Lowercase discriminant, the serde tag and popup class stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "running",
            WorkoutKind::Cycling { .. } => "cycling",
        }
    }

    /// Kind icon used in popups and list rows.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running { .. } => "🏃‍♂️",
            WorkoutKind::Cycling { .. } => "🚴‍♀️",
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A logged exercise session pinned to a map coordinate.
///
/// Fields are module-private; the accessor surface below is the contract.
/// Construction does not validate inputs. Callers validate before building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    /// Create a running workout stamped with the current time.
    pub fn running(coords: Coordinates, distance_km: f64, duration_min: f64, cadence_spm: u32) -> Self {
        Self::running_at(Utc::now(), coords, distance_km, duration_min, cadence_spm)
    }

    /// Create a cycling workout stamped with the current time.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(Utc::now(), coords, distance_km, duration_min, elevation_gain_m)
    }

    /// Create a running workout at an explicit creation time.
    ///
    /// The id and description derive from the creation instant, so tests and
    /// replaying callers need it fixed.
    pub fn running_at(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    ) -> Self {
        let kind = WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::build(created_at, coords, distance_km, duration_min, kind)
    }

    /// Create a cycling workout at an explicit creation time.
    pub fn cycling_at(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let kind = WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Self::build(created_at, coords, distance_km, duration_min, kind)
    }

    fn build(
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        // "Running on April 14": full month name, unpadded day.
        let description = format!(
            "{} on {} {}",
            kind.display_name(),
            created_at.format("%B"),
            created_at.day()
        );

        Self {
            id: created_at.timestamp_millis(),
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            kind,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }
}
