//! Plant operations for the Tracker.

use jiff::Zoned;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{Plant, RawPlantRecord, DEFAULT_CO2_OFFSET_KG},
    params::{AddPlant, Id, ImportPlants, RemovePlant},
};

impl Tracker {
    /// Adds a new plant with the given parameters. Quantities below one
    /// are raised to one.
    pub async fn add_plant(&self, params: &AddPlant, now: &Zoned) -> Result<Plant> {
        let db_path = self.db_path.clone();
        let params = params.clone();
        let now = now.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plant(&params, &now)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a plant by its ID.
    pub async fn get_plant(&self, params: &Id) -> Result<Option<Plant>> {
        let db_path = self.db_path.clone();
        let plant_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plant(plant_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all tracked plants, oldest first.
    pub async fn list_plants(&self) -> Result<Vec<Plant>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plants()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Records a watering at `now`: stamps the plant's last-watered
    /// instant and grants its care points. Returns the updated plant.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlantNotFound` if no plant has the given ID
    pub async fn water_plant(&self, params: &Id, now: &Zoned) -> Result<Plant> {
        let db_path = self.db_path.clone();
        let plant_id = params.id;
        let now = now.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.water_plant(plant_id, &now)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently removes a plant with confirmation.
    ///
    /// This operation cannot be undone. Uses get-before-delete so the
    /// removed plant's details come back for confirmation output, or
    /// `None` if the plant doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if `confirmed` is false
    pub async fn remove_plant(&self, params: &RemovePlant) -> Result<Option<Plant>> {
        if !params.confirmed {
            return Err(TrackerError::invalid_input(
                "confirmed",
                "Plant removal requires explicit confirmation. Set 'confirmed' to true to proceed with permanent removal.",
            ));
        }

        let db_path = self.db_path.clone();
        let plant_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plant(plant_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Imports plants from a remote-store JSON export file.
    ///
    /// The export is an array of loosely shaped records; each record is
    /// mapped leniently (missing quantity becomes one, unparsable
    /// timestamps become "never watered", out-of-range weekdays are
    /// dropped). Returns the imported plants in file order.
    pub async fn import_plants(&self, params: &ImportPlants, now: &Zoned) -> Result<Vec<Plant>> {
        let path = std::path::PathBuf::from(&params.path);
        let contents = std::fs::read_to_string(&path).map_err(|e| TrackerError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        let records: Vec<RawPlantRecord> = serde_json::from_str(&contents)?;

        let db_path = self.db_path.clone();
        let now = now.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut imported = Vec::with_capacity(records.len());
            for record in &records {
                let add = map_raw_record(record);
                imported.push(db.create_plant(&add, &now)?);
            }
            log::info!("Imported {} plants", imported.len());
            Ok(imported)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

/// Maps one raw export record to creation parameters, applying the
/// lenient defaults at the boundary.
fn map_raw_record(record: &RawPlantRecord) -> AddPlant {
    AddPlant {
        name: record.name.clone(),
        species: record.species(),
        quantity: record.quantity.unwrap_or(1).max(1),
        native: record.native,
        co2_offset_kg: record
            .co2_offset_default_kg()
            .unwrap_or(DEFAULT_CO2_OFFSET_KG),
        co2_offset_override_kg: record.co2_offset_override_kg,
        water_weekdays: record.weekdays(),
        water_time: record.water_time.clone(),
        last_watered_at: record.last_watered_timestamp(),
        care_points: record.care_points.unwrap_or(0).max(0),
    }
}
