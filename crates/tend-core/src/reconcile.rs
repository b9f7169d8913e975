//! Idempotent quest and achievement reconciliation rules.
//!
//! Pure decision logic: given a snapshot and the previously persisted
//! state, compute the state the store should converge to. The rules are
//! idempotent (re-applying a rule to its own output is a no-op) and
//! monotonic (a completion timestamp is never cleared, an earned
//! achievement is never re-awarded), which is what makes concurrent
//! invocation from independent processes safe without locking.

use std::collections::HashMap;

use jiff::{Timestamp, Zoned};

use crate::models::{
    AchievementCode, AchievementDefinition, AchievementStanding, AchievementState,
    ProgressSnapshot, QuestDefinition, QuestReconciliation, QuestRecord,
};

/// The outcome of evaluating the achievement set against a snapshot.
#[derive(Debug, Clone)]
pub struct AchievementSync {
    /// Definitions whose predicate newly holds and that have no persisted
    /// record yet; to be written with a duplicate-safe upsert
    pub to_award: Vec<AchievementDefinition>,
    /// Per-achievement states, ordered by points ascending then title
    pub standings: Vec<AchievementStanding>,
}

/// Computes the target quest record for one user, quest, and day.
///
/// The merge never overwrites an already-set completion timestamp; it only
/// fills one in when the target is newly reached. The reported completion
/// status additionally honors a previously persisted sufficient progress
/// count, so progress regressing in the snapshot (the action was undone)
/// cannot un-complete a quest.
pub fn reconcile_quest(
    definition: &QuestDefinition,
    snapshot: &ProgressSnapshot,
    existing: Option<&QuestRecord>,
    user_id: &str,
    now: &Zoned,
) -> QuestReconciliation {
    let raw_progress = u32::from(snapshot.watered_today);
    let progress = raw_progress.min(definition.target_count);

    let completed_at = existing
        .and_then(|record| record.completed_at)
        .or_else(|| (progress >= definition.target_count).then(|| now.timestamp()));

    let completed = completed_at.is_some()
        || existing.is_some_and(|record| record.progress_count >= definition.target_count);

    QuestReconciliation {
        definition: definition.clone(),
        record: QuestRecord {
            user_id: user_id.to_string(),
            quest_id: definition.id,
            day: now.date(),
            progress_count: progress,
            completed_at,
            claimed_at: existing.and_then(|record| record.claimed_at),
        },
        completed,
    }
}

/// Evaluates every achievement definition against a snapshot and the map
/// of already-earned records.
///
/// An achievement is newly awarded iff its predicate holds and its code is
/// absent from `earned`. Definitions with an unrecognized code evaluate as
/// locked. Standings (and `to_award`) are ordered by points ascending,
/// ties broken by title.
pub fn reconcile_achievements(
    definitions: &[AchievementDefinition],
    snapshot: &ProgressSnapshot,
    earned: &HashMap<String, Timestamp>,
) -> AchievementSync {
    let mut ordered: Vec<&AchievementDefinition> = definitions.iter().collect();
    ordered.sort_by(|a, b| a.points.cmp(&b.points).then_with(|| a.title.cmp(&b.title)));

    let mut to_award = Vec::new();
    let mut standings = Vec::new();

    for definition in ordered {
        let unlocked = definition
            .code
            .parse::<AchievementCode>()
            .map(|code| code.unlocked(snapshot))
            .unwrap_or(false);

        let state = match earned.get(&definition.code) {
            Some(earned_at) => AchievementState::Earned(*earned_at),
            None if unlocked => {
                to_award.push(definition.clone());
                AchievementState::Ready
            }
            None => AchievementState::Locked,
        };

        standings.push(AchievementStanding {
            definition: definition.clone(),
            state,
        });
    }

    AchievementSync { to_award, standings }
}
