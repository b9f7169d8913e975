//! Achievement definition and write-once record queries.

use std::collections::HashMap;

use jiff::Timestamp;
use rusqlite::params;

use crate::{
    error::{Result, TrackerError},
    models::AchievementDefinition,
};

const SELECT_ACHIEVEMENT_DEFINITIONS_SQL: &str =
    "SELECT id, code, title, description, points FROM achievement_definitions ORDER BY points, title";
const SELECT_EARNED_SQL: &str = "SELECT d.code, r.earned_at FROM achievement_records r JOIN achievement_definitions d ON d.id = r.achievement_id WHERE r.user_id = ?1";
const AWARD_ACHIEVEMENT_SQL: &str = "INSERT INTO achievement_records (user_id, achievement_id, earned_at) VALUES (?1, ?2, ?3) ON CONFLICT(user_id, achievement_id) DO NOTHING";

impl super::Database {
    /// Lists all achievement definitions, points ascending then title.
    pub fn list_achievement_definitions(&self) -> Result<Vec<AchievementDefinition>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ACHIEVEMENT_DEFINITIONS_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let definitions = stmt
            .query_map([], |row| {
                Ok(AchievementDefinition {
                    id: row.get::<_, i64>(0)? as u64,
                    code: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    points: row.get(4)?,
                })
            })
            .map_err(|e| {
                TrackerError::database_error("Failed to query achievement definitions", e)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                TrackerError::database_error("Failed to fetch achievement definitions", e)
            })?;

        Ok(definitions)
    }

    /// Reads the earned map for a user: achievement code to earned
    /// instant. Rows with an unparsable timestamp are skipped.
    pub fn earned_achievements(&self, user_id: &str) -> Result<HashMap<String, Timestamp>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EARNED_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| TrackerError::database_error("Failed to query earned achievements", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch earned achievements", e))?;

        Ok(rows
            .into_iter()
            .filter_map(|(code, earned_at)| {
                earned_at.parse::<Timestamp>().ok().map(|ts| (code, ts))
            })
            .collect())
    }

    /// Awards an achievement with ignore-on-conflict semantics.
    ///
    /// Returns true when this call inserted the record, false when a
    /// concurrent (or earlier) pass already had, in which case the
    /// existing `earned_at` is left untouched.
    pub fn award_achievement(
        &mut self,
        user_id: &str,
        achievement_id: u64,
        earned_at: Timestamp,
    ) -> Result<bool> {
        let rows = self
            .connection
            .execute(
                AWARD_ACHIEVEMENT_SQL,
                params![user_id, achievement_id as i64, earned_at.to_string()],
            )
            .map_err(|e| TrackerError::database_error("Failed to award achievement", e))?;

        Ok(rows > 0)
    }
}
