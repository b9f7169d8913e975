//! Watering schedule evaluation for the Tracker.

use jiff::Zoned;

use super::Tracker;
use crate::{error::Result, models::DueEntry};

impl Tracker {
    /// Evaluates every plant's watering schedule at the given instant.
    ///
    /// The evaluation is pure over the stored records: plants with no
    /// schedule (or a malformed one) come back with no occurrence and not
    /// due. Entries follow the plant listing order, oldest first.
    pub async fn due_report(&self, now: &Zoned) -> Result<Vec<DueEntry>> {
        let plants = self.list_plants().await?;

        Ok(plants
            .into_iter()
            .map(|plant| {
                let state = plant.schedule_state();
                let occurrence = state.latest_occurrence(now);
                let due = state.is_due(now);
                DueEntry {
                    plant,
                    occurrence,
                    due,
                }
            })
            .collect())
    }
}
