//! Garden group operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::GroupFact,
    params::SetGroup,
};

impl Tracker {
    /// Records (or updates) a group membership fact. Negative member
    /// counts are clamped to zero.
    pub async fn set_group(&self, params: &SetGroup) -> Result<GroupFact> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let member_count = params.member_count;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_group(&name, member_count)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all recorded group membership facts, by name.
    pub async fn list_groups(&self) -> Result<Vec<GroupFact>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_groups()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a group membership fact. Returns whether it existed.
    pub async fn remove_group(&self, name: &str) -> Result<bool> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_group(&name)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
