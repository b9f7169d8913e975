//! Reconciliation pass report.

use super::{AchievementDefinition, AchievementStanding, ProgressSnapshot, QuestReconciliation};

/// Everything one "reconcile now" pass produced.
///
/// The snapshot is included so callers can display current progress even
/// when a later persistence step failed and the pass returned early with
/// an error on a previous attempt.
#[derive(Debug, Clone)]
pub struct ReconcileReport {
    /// The snapshot the pass was computed from
    pub snapshot: ProgressSnapshot,
    /// Per-quest reconciliation outcomes for the evaluation day
    pub quests: Vec<QuestReconciliation>,
    /// Achievements newly awarded by this pass
    pub newly_awarded: Vec<AchievementDefinition>,
    /// Final per-achievement standings after the awards were written
    pub standings: Vec<AchievementStanding>,
}
