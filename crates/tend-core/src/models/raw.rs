//! Raw record shapes from the remote store export.
//!
//! The export format is loosely shaped: related records arrive as a single
//! object, an array of objects, or nothing at all, depending on how the
//! row was joined. [`first_or_none`] normalizes that shape in one place at
//! the mapping boundary so the rest of the crate only sees `Option<T>`.

use jiff::Timestamp;
use serde::Deserialize;

/// A related value that may arrive as a single item or an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single related record
    One(T),
    /// An array of related records; only the first is meaningful
    Many(Vec<T>),
}

/// Collapses the value-or-array-or-null shape to the first item, if any.
pub fn first_or_none<T>(value: Option<OneOrMany<T>>) -> Option<T> {
    match value {
        Some(OneOrMany::One(item)) => Some(item),
        Some(OneOrMany::Many(items)) => items.into_iter().next(),
        None => None,
    }
}

/// Plant-type relation carried alongside a raw plant record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlantType {
    /// Display name of the plant type
    pub name: Option<String>,
    /// Per-unit CO2 offset default for this type, in kilograms
    pub co2_offset_kg: Option<f64>,
}

/// One plant row as exported by the remote store.
///
/// Every field is optional or defaulted: a malformed row contributes its
/// safe default rather than failing the whole import.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlantRecord {
    /// Display name of the plant
    pub name: String,
    /// Number of identical plants; missing means one
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Protected-native flag
    #[serde(default)]
    pub native: bool,
    /// Per-plant override of the per-unit CO2 offset
    #[serde(default)]
    pub co2_offset_override_kg: Option<f64>,
    /// Last watering instant as an ISO-8601 string; unparsable values are
    /// treated as never watered
    #[serde(default)]
    pub last_watered_at: Option<String>,
    /// Cumulative care points
    #[serde(default)]
    pub care_points: Option<i64>,
    /// Watering weekdays, Sunday-zero numbering
    #[serde(default)]
    pub water_weekdays: Vec<i64>,
    /// Watering time-of-day as `"HH:MM"`
    #[serde(default)]
    pub water_time: Option<String>,
    /// Plant-type relation; object, array, or absent depending on the join
    #[serde(default)]
    pub plant_types: Option<OneOrMany<RawPlantType>>,
}

impl RawPlantRecord {
    /// The species name from the plant-type relation, if present.
    pub fn species(&self) -> Option<String> {
        first_or_none(self.plant_types.clone()).and_then(|t| t.name)
    }

    /// Per-unit CO2 offset default from the plant-type relation.
    pub fn co2_offset_default_kg(&self) -> Option<f64> {
        first_or_none(self.plant_types.clone()).and_then(|t| t.co2_offset_kg)
    }

    /// The last-watered instant, with unparsable timestamps degraded to
    /// `None` rather than surfaced as errors.
    pub fn last_watered_timestamp(&self) -> Option<Timestamp> {
        self.last_watered_at
            .as_deref()
            .and_then(|raw| raw.parse::<Timestamp>().ok())
    }

    /// Watering weekdays with out-of-range values dropped.
    pub fn weekdays(&self) -> Vec<u8> {
        self.water_weekdays
            .iter()
            .filter_map(|&n| u8::try_from(n).ok())
            .filter(|&n| n <= 6)
            .collect()
    }
}
