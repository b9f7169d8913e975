//! Garden group membership fact queries.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::GroupFact,
};

const UPSERT_GROUP_SQL: &str = "INSERT INTO groups (name, member_count) VALUES (?1, ?2) ON CONFLICT(name) DO UPDATE SET member_count = excluded.member_count";
const SELECT_GROUPS_SQL: &str = "SELECT name, member_count FROM groups ORDER BY name";
const DELETE_GROUP_SQL: &str = "DELETE FROM groups WHERE name = ?1";

impl super::Database {
    /// Records (or updates) a group membership fact.
    pub fn set_group(&mut self, name: &str, member_count: i64) -> Result<GroupFact> {
        self.connection
            .execute(UPSERT_GROUP_SQL, params![name, member_count.max(0)])
            .map_err(|e| TrackerError::database_error("Failed to upsert group", e))?;

        Ok(GroupFact {
            name: name.to_string(),
            member_count: member_count.max(0),
        })
    }

    /// Lists all recorded group membership facts.
    pub fn list_groups(&self) -> Result<Vec<GroupFact>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GROUPS_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let groups = stmt
            .query_map([], |row| {
                Ok(GroupFact {
                    name: row.get(0)?,
                    member_count: row.get(1)?,
                })
            })
            .map_err(|e| TrackerError::database_error("Failed to query groups", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch groups", e))?;

        Ok(groups)
    }

    /// Removes a group membership fact. Returns whether a row was removed.
    pub fn remove_group(&mut self, name: &str) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_GROUP_SQL, params![name])
            .db_context("Failed to delete group")?;
        Ok(rows > 0)
    }
}
