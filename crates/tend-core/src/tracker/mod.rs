//! High-level tracker API for managing plants, groups, and progress.
//!
//! This module provides the main [`Tracker`] interface of the Tend
//! gardening tracker. The tracker acts as the coordinator between the
//! application layers and the database, implementing all business logic
//! for plant care, schedule evaluation, and gamification sync.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with configuration
//! - [`plant_ops`]: Plant operations (add, list, show, water, remove, import)
//! - [`group_ops`]: Garden group membership facts
//! - [`due_ops`]: Watering schedule evaluation
//! - [`sync_ops`]: Progress snapshot, quest, and achievement reconciliation
//!
//! All operations are async: each one opens the database on a blocking
//! thread, does its work, and returns. Operations that depend on the
//! current time take an explicit `now: &Zoned` so callers (and tests) can
//! pin the evaluation instant and timezone.
//!
//! # Usage Examples
//!
//! ```rust
//! use tend_core::{TrackerBuilder, params::AddPlant};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with default database path
//! let tracker = TrackerBuilder::new()
//!     .build()
//!     .await?;
//!
//! // Or specify custom database path
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/custom/path/tend.db"))
//!     .build()
//!     .await?;
//!
//! let now = jiff::Zoned::now();
//! let plant = tracker
//!     .add_plant(
//!         &AddPlant {
//!             name: "Coast Live Oak".to_string(),
//!             native: true,
//!             ..Default::default()
//!         },
//!         &now,
//!     )
//!     .await?;
//! let report = tracker.reconcile_now("me", &now).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod due_ops;
pub mod group_ops;
pub mod plant_ops;
pub mod sync_ops;


// Re-export the main types
pub use builder::TrackerBuilder;

/// Main tracker interface for managing plants and progress.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
