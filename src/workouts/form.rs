//! Entry form input and the submit validation policy.
//!
//! The form surface exposes text inputs, so the form carries raw strings and
//! parsing is part of validation. The policy: every referenced field must be
//! a finite number; distance and duration must be strictly positive; cadence
//! must be a positive integer. Elevation gain is deliberately not checked for
//! positivity, matching the long-standing behavior users rely on (a descent
//! can be logged with a negative gain).

/// Which kind the form's type selector is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Running,
    Cycling,
}

/// Raw form state: the kind selector plus the four numeric text fields.
/// Only the fields the selected kind references are validated.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    pub kind: FormKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutForm {
    /// Form filled in for a running workout.
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            kind: FormKind::Running,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    /// Form filled in for a cycling workout.
    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            kind: FormKind::Cycling,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }

    /// Apply the validation policy. `None` means the submit is rejected;
    /// rejection is an alert to the user, not an error value.
    pub fn parse(&self) -> Option<FormData> {
        let distance_km = parse_finite(&self.distance)?;
        let duration_min = parse_finite(&self.duration)?;

        if !all_positive(&[distance_km, duration_min]) {
            return None;
        }

        match self.kind {
            FormKind::Running => {
                let cadence_spm = self.cadence.trim().parse::<u32>().ok().filter(|c| *c > 0)?;
                Some(FormData::Running {
                    distance_km,
                    duration_min,
                    cadence_spm,
                })
            }
            FormKind::Cycling => {
                let elevation_gain_m = parse_finite(&self.elevation)?;
                Some(FormData::Cycling {
                    distance_km,
                    duration_min,
                    elevation_gain_m,
                })
            }
        }
    }
}

/// Validated field values, ready for construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormData {
    Running {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
    },
    Cycling {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}
