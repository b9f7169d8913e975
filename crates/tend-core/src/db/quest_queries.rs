//! Quest definition and per-day quest record queries.
//!
//! The record upsert enforces the reconciler's invariants at the store
//! level as well: `completed_at` is COALESCEd so an existing timestamp
//! wins, and `progress_count` takes the MAX of old and new so repeated
//! passes within a day never regress it.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{Result, TrackerError},
    models::{QuestDefinition, QuestRecord},
};

const SELECT_QUEST_DEFINITIONS_SQL: &str =
    "SELECT id, code, title, description, points, target_count FROM quest_definitions ORDER BY points, title";
const SELECT_QUEST_RECORD_SQL: &str = "SELECT user_id, quest_id, day, progress_count, completed_at, claimed_at FROM quest_records WHERE user_id = ?1 AND quest_id = ?2 AND day = ?3";
const UPSERT_QUEST_RECORD_SQL: &str = "INSERT INTO quest_records (user_id, quest_id, day, progress_count, completed_at, claimed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(user_id, quest_id, day) DO UPDATE SET \
     progress_count = MAX(quest_records.progress_count, excluded.progress_count), \
     completed_at = COALESCE(quest_records.completed_at, excluded.completed_at)";

impl super::Database {
    /// Helper function to construct a QuestRecord from a database row.
    fn build_quest_record_from_row(row: &rusqlite::Row) -> rusqlite::Result<QuestRecord> {
        let day = row.get::<_, String>(2)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
        })?;

        let completed_at = row
            .get::<_, Option<String>>(4)?
            .and_then(|s| s.parse::<Timestamp>().ok());
        let claimed_at = row
            .get::<_, Option<String>>(5)?
            .and_then(|s| s.parse::<Timestamp>().ok());

        Ok(QuestRecord {
            user_id: row.get(0)?,
            quest_id: row.get::<_, i64>(1)? as u64,
            day,
            progress_count: row.get::<_, i64>(3)? as u32,
            completed_at,
            claimed_at,
        })
    }

    /// Lists all active quest definitions. An empty table is a valid
    /// "no active quest" state, not an error.
    pub fn list_quest_definitions(&self) -> Result<Vec<QuestDefinition>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_QUEST_DEFINITIONS_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let definitions = stmt
            .query_map([], |row| {
                Ok(QuestDefinition {
                    id: row.get::<_, i64>(0)? as u64,
                    code: row.get(1)?,
                    title: row.get(2)?,
                    description: row.get(3)?,
                    points: row.get(4)?,
                    target_count: row.get::<_, i64>(5)? as u32,
                })
            })
            .map_err(|e| TrackerError::database_error("Failed to query quest definitions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch quest definitions", e))?;

        Ok(definitions)
    }

    /// Reads the quest record for one user, quest, and day, if any.
    pub fn quest_record(
        &self,
        user_id: &str,
        quest_id: u64,
        day: Date,
    ) -> Result<Option<QuestRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_QUEST_RECORD_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(
            params![user_id, quest_id as i64, day.to_string()],
            Self::build_quest_record_from_row,
        )
        .optional()
        .map_err(|e| TrackerError::database_error("Failed to query quest record", e))
    }

    /// Upserts a quest record and returns the merged row as persisted.
    ///
    /// Safe to re-apply: the conflict clause keeps the earliest completion
    /// timestamp and the highest progress count.
    pub fn upsert_quest_record(&mut self, record: &QuestRecord) -> Result<QuestRecord> {
        self.connection
            .execute(
                UPSERT_QUEST_RECORD_SQL,
                params![
                    record.user_id,
                    record.quest_id as i64,
                    record.day.to_string(),
                    i64::from(record.progress_count),
                    record.completed_at.map(|ts| ts.to_string()),
                    record.claimed_at.map(|ts| ts.to_string()),
                ],
            )
            .map_err(|e| TrackerError::database_error("Failed to upsert quest record", e))?;

        // Re-read so the caller sees the merged state, not its own input.
        self.quest_record(&record.user_id, record.quest_id, record.day)?
            .ok_or_else(|| TrackerError::Configuration {
                message: "Quest record missing immediately after upsert".to_string(),
            })
    }
}
