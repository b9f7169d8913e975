//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TrackerError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if the species column exists in the plants table
        let has_species_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plants') WHERE name = 'species'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add species column if it doesn't exist
        if !has_species_column {
            self.connection
                .execute("ALTER TABLE plants ADD COLUMN species TEXT", [])
                .map_err(|e| {
                    TrackerError::database_error("Failed to add species column to plants table", e)
                })?;
        }

        Ok(())
    }
}
