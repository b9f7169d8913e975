//! Immutable progress snapshot consumed by the synchronizer.

use serde::{Deserialize, Serialize};

/// Aggregated possession and usage facts as of one evaluation moment.
///
/// Constructed once per synchronization pass by
/// [`crate::progress::build_snapshot`], read by the quest and achievement
/// reconcilers, and discarded afterwards. Never mutated: a snapshot stays
/// valid for read-only display even when a later persistence step fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    /// Total tracked plants (sum of record quantities)
    pub total_plants: u64,
    /// Tracked plants flagged as protected natives
    pub native_plants: u64,
    /// Watering-equivalent care units (care points / 10, floored)
    pub watering_units: i64,
    /// Whether any plant was watered on the evaluation day
    pub watered_today: bool,
    /// Whether the user belongs to a group of qualifying size
    pub has_qualifying_group: bool,
    /// Cumulative estimated CO2 offset in kilograms
    pub co2_offset_kg: f64,
}
