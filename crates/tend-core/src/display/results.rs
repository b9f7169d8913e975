//! Result wrapper types for displaying operation outcomes.
//!
//! Wrapper types that format the results of create, water, and remove
//! operations with consistent messaging and resource display.

use std::fmt;

use crate::models::Plant;

/// Wrapper type for displaying the result of create operations.
///
/// Formats creation results with a success message including the new
/// resource ID, followed by the full details of the created resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added plant with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a watering.
pub struct WaterResult {
    pub plant: Plant,
}

impl WaterResult {
    /// Create a new WaterResult wrapper.
    pub fn new(plant: Plant) -> Self {
        Self { plant }
    }
}

impl fmt::Display for WaterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Watered '{}' (ID: {}), care points now {}",
            self.plant.name, self.plant.id, self.plant.care_points
        )
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// Formats deletion results with a confirmation message identifying the
/// removed resource.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed plant '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
