//! Parameter structures for Tend operations.
//!
//! Shared parameter structures usable across interfaces (CLI today,
//! anything else later) without framework-specific derives. Interface
//! layers wrap these with their own derives (clap `Args` in the CLI) and
//! convert via `From`, keeping the core free of UI framework concerns.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_CO2_OFFSET_KG;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a plant to the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlant {
    /// Display name of the plant (required)
    pub name: String,
    /// Optional species or plant-type name
    pub species: Option<String>,
    /// Number of identical plants; values below one are raised to one
    pub quantity: u32,
    /// Whether the plant is a protected native species
    pub native: bool,
    /// Per-unit CO2 offset default in kilograms
    pub co2_offset_kg: f64,
    /// Optional per-plant override of the per-unit CO2 offset
    pub co2_offset_override_kg: Option<f64>,
    /// Watering weekdays, Sunday-zero numbering (0 = Sunday .. 6 = Saturday)
    #[serde(default)]
    pub water_weekdays: Vec<u8>,
    /// Watering time-of-day as `"HH:MM"`, 24-hour clock
    pub water_time: Option<String>,
    /// Last watering instant, when importing existing history
    pub last_watered_at: Option<Timestamp>,
    /// Starting care points, when importing existing history
    #[serde(default)]
    pub care_points: i64,
}

impl Default for AddPlant {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: None,
            quantity: 1,
            native: false,
            co2_offset_kg: DEFAULT_CO2_OFFSET_KG,
            co2_offset_override_kg: None,
            water_weekdays: Vec::new(),
            water_time: None,
            last_watered_at: None,
            care_points: 0,
        }
    }
}

/// Parameters for permanently removing a plant.
///
/// Requires explicit confirmation to prevent accidental deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovePlant {
    /// Plant ID to remove
    pub id: u64,
    /// Confirmation flag; removal fails without it
    pub confirmed: bool,
}

/// Parameters for importing plants from a remote-store JSON export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportPlants {
    /// Path to the JSON export file
    pub path: String,
}

/// Parameters for recording a group membership fact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetGroup {
    /// Group name (unique identifier)
    pub name: String,
    /// Current member count of the group
    pub member_count: i64,
}
