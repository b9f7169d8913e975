//! Core library for the Tend gardening tracker.
//!
//! This crate provides the core business logic for tracking plants and
//! their care: watering schedule evaluation, progress aggregation, and
//! idempotent quest and achievement reconciliation, along with database
//! operations, data models, and error handling.
//!
//! # Architecture
//!
//! The pure evaluation layers ([`due`], [`progress`], [`reconcile`]) are
//! framework-free functions over caller-supplied values and an explicit
//! evaluation instant, making every rule directly testable. The
//! [`tracker`] module wires them to SQLite persistence behind an async
//! facade, and [`display`] formats the results as markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use tend_core::{TrackerBuilder, params::AddPlant};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let now = jiff::Zoned::now();
//!
//! // Track a plant with a watering schedule
//! let plant = tracker
//!     .add_plant(
//!         &AddPlant {
//!             name: "Sword Fern".to_string(),
//!             water_weekdays: vec![1, 3, 5],
//!             water_time: Some("08:00".to_string()),
//!             ..Default::default()
//!         },
//!         &now,
//!     )
//!     .await?;
//! println!("Added plant: {}", plant);
//!
//! // Evaluate what needs watering and sync progress
//! let report = tracker.due_report(&now).await?;
//! let progress = tracker.reconcile_now("me", &now).await?;
//! println!("{}", progress);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod due;
pub mod error;
pub mod models;
pub mod params;
pub mod progress;
pub mod reconcile;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Achievements, CreateResult, DeleteResult, DueEntries, Groups, LocalDateTime, OperationStatus,
    Plants, Quests, WaterResult,
};
pub use due::{is_due, latest_scheduled_occurrence};
pub use error::{Result, TrackerError};
pub use models::{
    AchievementCode, AchievementDefinition, AchievementStanding, AchievementState, DueEntry,
    GroupFact, Plant, ProgressSnapshot, QuestDefinition, QuestReconciliation, QuestRecord,
    RecurrencePattern, ReconcileReport, ScheduleState,
};
pub use params::{AddPlant, Id, ImportPlants, RemovePlant, SetGroup};
pub use progress::build_snapshot;
pub use reconcile::{reconcile_achievements, reconcile_quest, AchievementSync};
pub use tracker::{Tracker, TrackerBuilder};
