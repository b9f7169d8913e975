//! Database operations and SQLite management.
//!
//! This module provides the low-level store for the Tend gardening
//! tracker: plants, group membership facts, and the quest/achievement
//! records the synchronizer converges. It handles connections, schema
//! management, and specialized query interfaces per table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod achievement_queries;
pub mod group_queries;
pub mod migrations;
pub mod plant_queries;
pub mod quest_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
