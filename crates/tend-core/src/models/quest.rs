//! Quest definitions and per-day quest records.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A recurring quest definition read from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestDefinition {
    /// Unique identifier for the quest definition
    pub id: u64,
    /// Stable machine-readable code (e.g. `daily_watering`)
    pub code: String,
    /// Display title of the quest
    pub title: String,
    /// Optional description shown to the user
    pub description: Option<String>,
    /// Points awarded for completing the quest
    pub points: i64,
    /// Progress count required to complete the quest
    pub target_count: u32,
}

/// Persisted quest progress for one user, quest, and calendar day.
///
/// Invariants honored by the reconciler and the store upsert alike:
/// `completed_at`, once set, is never cleared or moved earlier, and
/// `progress_count` never decreases within a day's reconciliation passes.
/// `claimed_at` is set by a user action outside this core and is only ever
/// passed through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestRecord {
    /// User the record belongs to
    pub user_id: String,
    /// Quest definition this record tracks
    pub quest_id: u64,
    /// Calendar day the record covers
    pub day: Date,
    /// Progress toward the quest target, capped at the target
    pub progress_count: u32,
    /// Instant the quest was first completed, if ever
    pub completed_at: Option<Timestamp>,
    /// Instant the reward was claimed, if ever
    pub claimed_at: Option<Timestamp>,
}

/// The outcome of reconciling one quest for one day.
///
/// `completed` can be true even when the record's freshly recomputed
/// progress is below the target: a previously persisted sufficient
/// progress count keeps the quest completed (progress never un-completes
/// a quest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestReconciliation {
    /// The quest definition that was reconciled
    pub definition: QuestDefinition,
    /// The merged record to persist (or just persisted)
    pub record: QuestRecord,
    /// Completion status as reported to the caller
    pub completed: bool,
}
