//! Plant model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{RecurrencePattern, ScheduleState};

/// Estimated per-unit CO2 offset in kilograms, used when neither the
/// plant-type default nor a per-plant override is available.
pub const DEFAULT_CO2_OFFSET_KG: f64 = 1.5;

/// Care points granted by a single watering event. Ten points make one
/// watering-equivalent unit (see [`crate::progress::CARE_POINTS_PER_UNIT`]).
pub const CARE_POINTS_PER_WATERING: i64 = 5;

/// A tracked plant (or group of identical plants) with its watering
/// schedule and care history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// Display name of the plant
    pub name: String,

    /// Optional species or plant-type name
    pub species: Option<String>,

    /// Number of identical plants tracked by this record
    pub quantity: u32,

    /// Whether the plant is a protected native species
    pub native: bool,

    /// Per-unit CO2 offset in kilograms from the plant type
    pub co2_offset_kg: f64,

    /// Optional per-plant override of the per-unit CO2 offset
    pub co2_offset_override_kg: Option<f64>,

    /// Watering weekdays, Sunday-zero numbering (0 = Sunday .. 6 = Saturday)
    #[serde(default)]
    pub water_weekdays: Vec<u8>,

    /// Watering time-of-day as `"HH:MM"`, 24-hour clock
    pub water_time: Option<String>,

    /// Instant the plant was last watered (UTC)
    pub last_watered_at: Option<Timestamp>,

    /// Cumulative care points earned by this plant
    #[serde(default)]
    pub care_points: i64,

    /// Timestamp when the plant was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plant was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plant {
    /// Total estimated CO2 offset of this record in kilograms: the
    /// per-plant override when present, otherwise the type default, times
    /// the quantity.
    pub fn total_co2_offset_kg(&self) -> f64 {
        let per_unit = self.co2_offset_override_kg.unwrap_or(self.co2_offset_kg);
        per_unit * f64::from(self.quantity)
    }

    /// Builds the watering recurrence pattern from the stored schedule
    /// fields. Malformed stored values degrade to a never-due pattern.
    pub fn watering_pattern(&self) -> RecurrencePattern {
        RecurrencePattern::new(&self.water_weekdays, self.water_time.as_deref())
    }

    /// Builds the full due-engine evaluation input for this plant.
    pub fn schedule_state(&self) -> ScheduleState {
        ScheduleState::new(self.watering_pattern(), self.last_watered_at)
    }
}
