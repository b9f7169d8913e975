//! Plant CRUD operations and queries.

use jiff::{Timestamp, Zoned};
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Plant, CARE_POINTS_PER_WATERING},
    params::AddPlant,
};

// SQL queries as const strings
const PLANT_COLUMNS: &str = "id, name, species, quantity, native, co2_offset_kg, co2_offset_override_kg, water_weekdays, water_time, last_watered_at, care_points, created_at, updated_at";
const INSERT_PLANT_SQL: &str = "INSERT INTO plants (name, species, quantity, native, co2_offset_kg, co2_offset_override_kg, water_weekdays, water_time, last_watered_at, care_points, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)";
const UPDATE_PLANT_WATERED_SQL: &str = "UPDATE plants SET last_watered_at = ?1, care_points = care_points + ?2, updated_at = ?1 WHERE id = ?3";
const DELETE_PLANT_SQL: &str = "DELETE FROM plants WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Plant from a database row.
    fn build_plant_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plant> {
        // Weekday lists are stored as comma-separated numbers; anything
        // unparsable is dropped rather than surfaced.
        let weekdays_str: Option<String> = row.get(7)?;
        let water_weekdays = weekdays_str
            .map(|s| {
                s.split(',')
                    .filter_map(|part| part.trim().parse::<u8>().ok())
                    .collect()
            })
            .unwrap_or_default();

        // A stored last-watered value that fails to parse degrades to
        // "never watered" instead of failing the whole query.
        let last_watered_at = row
            .get::<_, Option<String>>(9)?
            .and_then(|s| s.parse::<Timestamp>().ok());

        Ok(Plant {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            species: row.get(2)?,
            quantity: row.get::<_, i64>(3)? as u32,
            native: row.get(4)?,
            co2_offset_kg: row.get(5)?,
            co2_offset_override_kg: row.get(6)?,
            water_weekdays,
            water_time: row.get(8)?,
            last_watered_at,
            care_points: row.get(10)?,
            created_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(12)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new plant record.
    pub fn create_plant(&mut self, params: &AddPlant, now: &Zoned) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_ts = now.timestamp();
        let now_str = now_ts.to_string();
        let quantity = params.quantity.max(1);

        let weekdays_str = if params.water_weekdays.is_empty() {
            None
        } else {
            Some(
                params
                    .water_weekdays
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        tx.execute(
            INSERT_PLANT_SQL,
            params![
                params.name,
                params.species.as_deref(),
                i64::from(quantity),
                params.native,
                params.co2_offset_kg,
                params.co2_offset_override_kg,
                weekdays_str.as_deref(),
                params.water_time.as_deref(),
                params.last_watered_at.map(|ts| ts.to_string()),
                params.care_points,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| TrackerError::database_error("Failed to insert plant", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plant {
            id,
            name: params.name.clone(),
            species: params.species.clone(),
            quantity,
            native: params.native,
            co2_offset_kg: params.co2_offset_kg,
            co2_offset_override_kg: params.co2_offset_override_kg,
            water_weekdays: params.water_weekdays.clone(),
            water_time: params.water_time.clone(),
            last_watered_at: params.last_watered_at,
            care_points: params.care_points,
            created_at: now_ts,
            updated_at: now_ts,
        })
    }

    /// Retrieves a plant by its ID.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"))
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::build_plant_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to query plant", e))
    }

    /// Lists all plants, oldest first.
    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at, id"
            ))
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let plants = stmt
            .query_map([], Self::build_plant_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query plants", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch plants", e))?;

        Ok(plants)
    }

    /// Records a watering: stamps the plant and grants its care points.
    /// Returns the updated plant.
    pub fn water_plant(&mut self, id: u64, now: &Zoned) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = now.timestamp().to_string();
        let rows_affected = tx
            .execute(
                UPDATE_PLANT_WATERED_SQL,
                params![&now_str, CARE_POINTS_PER_WATERING, id as i64],
            )
            .map_err(|e| TrackerError::database_error("Failed to record watering", e))?;

        if rows_affected == 0 {
            return Err(TrackerError::PlantNotFound { id });
        }

        let plant = tx
            .query_row(
                &format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"),
                params![id as i64],
                Self::build_plant_from_row,
            )
            .map_err(|e| TrackerError::database_error("Failed to query watered plant", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(plant)
    }

    /// Permanently deletes a plant. Returns the deleted plant, or `None`
    /// if it did not exist.
    pub fn delete_plant(&mut self, id: u64) -> Result<Option<Plant>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plant = tx
            .query_row(
                &format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"),
                params![id as i64],
                Self::build_plant_from_row,
            )
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to query plant", e))?;

        if plant.is_some() {
            tx.execute(DELETE_PLANT_SQL, params![id as i64])
                .map_err(|e| TrackerError::database_error("Failed to delete plant", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(plant)
    }

    /// Checks whether a plant with the given ID exists.
    pub fn plant_exists(&self, id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plant existence")
    }
}
