//! Progress snapshot and gamification sync operations for the Tracker.

use jiff::Zoned;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{
        AchievementStanding, ProgressSnapshot, QuestReconciliation, ReconcileReport,
    },
    progress::build_snapshot,
    reconcile::{reconcile_achievements, reconcile_quest},
};

impl Tracker {
    /// Builds the current progress snapshot at the given instant.
    pub async fn progress_snapshot(&self, now: &Zoned) -> Result<ProgressSnapshot> {
        let db_path = self.db_path.clone();
        let now = now.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plants = db.list_plants()?;
            let groups = db.list_groups()?;
            Ok(build_snapshot(&plants, &groups, &now))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs one full reconciliation pass for a user at the given instant.
    ///
    /// Builds a snapshot, converges every active quest's record for the
    /// day, and awards any achievements whose predicate newly holds. The
    /// pass is idempotent: running it again against an unchanged garden
    /// reproduces the same persisted state, awards nothing, and never
    /// moves an existing completion or earned timestamp.
    pub async fn reconcile_now(&self, user_id: &str, now: &Zoned) -> Result<ReconcileReport> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let now = now.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plants = db.list_plants()?;
            let groups = db.list_groups()?;
            let snapshot = build_snapshot(&plants, &groups, &now);

            let mut quests = Vec::new();
            for definition in db.list_quest_definitions()? {
                let existing = db.quest_record(&user_id, definition.id, now.date())?;
                let outcome =
                    reconcile_quest(&definition, &snapshot, existing.as_ref(), &user_id, &now);
                // The store merge can keep an earlier timestamp than the
                // one this pass computed; report the persisted row.
                let persisted = db.upsert_quest_record(&outcome.record)?;
                let completed = outcome.completed || persisted.completed_at.is_some();
                quests.push(QuestReconciliation {
                    definition: outcome.definition,
                    record: persisted,
                    completed,
                });
            }

            let definitions = db.list_achievement_definitions()?;
            let earned = db.earned_achievements(&user_id)?;
            let sync = reconcile_achievements(&definitions, &snapshot, &earned);

            let mut newly_awarded = Vec::new();
            for definition in &sync.to_award {
                if db.award_achievement(&user_id, definition.id, now.timestamp())? {
                    log::info!(
                        "Achievement earned: {} ({})",
                        definition.title,
                        definition.code
                    );
                    newly_awarded.push(definition.clone());
                }
            }

            // Re-read so standings reflect what was actually persisted,
            // including awards another process won the race for.
            let earned = db.earned_achievements(&user_id)?;
            let standings = reconcile_achievements(&definitions, &snapshot, &earned).standings;

            Ok(ReconcileReport {
                snapshot,
                quests,
                newly_awarded,
                standings,
            })
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reports quest status for a user and day without writing anything.
    pub async fn quest_status(&self, user_id: &str, now: &Zoned) -> Result<Vec<QuestReconciliation>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let now = now.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plants = db.list_plants()?;
            let groups = db.list_groups()?;
            let snapshot = build_snapshot(&plants, &groups, &now);

            let mut quests = Vec::new();
            for definition in db.list_quest_definitions()? {
                let existing = db.quest_record(&user_id, definition.id, now.date())?;
                quests.push(reconcile_quest(
                    &definition,
                    &snapshot,
                    existing.as_ref(),
                    &user_id,
                    &now,
                ));
            }
            Ok(quests)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reports achievement standings for a user without writing anything.
    ///
    /// Achievements whose predicate holds but that have not been awarded
    /// by a reconciliation pass show as ready rather than earned.
    pub async fn achievement_standings(
        &self,
        user_id: &str,
        now: &Zoned,
    ) -> Result<Vec<AchievementStanding>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let now = now.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plants = db.list_plants()?;
            let groups = db.list_groups()?;
            let snapshot = build_snapshot(&plants, &groups, &now);

            let definitions = db.list_achievement_definitions()?;
            let earned = db.earned_achievements(&user_id)?;
            Ok(reconcile_achievements(&definitions, &snapshot, &earned).standings)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
