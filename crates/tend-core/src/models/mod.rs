//! Data models for plants, schedules, quests, and achievements.
//!
//! This module contains the core domain models of the Tend gardening
//! tracker. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.
//!
//! The models split into three layers:
//!
//! 1. **Tracked records** ([`Plant`], [`GroupFact`]): what the user owns,
//!    persisted in SQLite with creation/update timestamps.
//! 2. **Derived values** ([`RecurrencePattern`], [`ScheduleState`],
//!    [`ProgressSnapshot`]): immutable evaluation inputs built fresh per
//!    call, never persisted.
//! 3. **Reconciled records** ([`QuestRecord`], achievement standings): the
//!    persisted gamification state the synchronizer converges toward with
//!    idempotent writes.

pub mod achievement;
pub mod group;
pub mod plant;
pub mod quest;
pub mod raw;
pub mod report;
pub mod schedule;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use achievement::{
    AchievementCode, AchievementDefinition, AchievementStanding, AchievementState,
};
pub use group::GroupFact;
pub use plant::{Plant, CARE_POINTS_PER_WATERING, DEFAULT_CO2_OFFSET_KG};
pub use quest::{QuestDefinition, QuestReconciliation, QuestRecord};
pub use raw::{first_or_none, OneOrMany, RawPlantRecord, RawPlantType};
pub use report::ReconcileReport;
pub use schedule::{DueEntry, RecurrencePattern, ScheduleState};
pub use snapshot::ProgressSnapshot;
