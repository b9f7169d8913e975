//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections of domain objects with
//! consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{AchievementStanding, DueEntry, GroupFact, Plant, QuestReconciliation};

/// Newtype wrapper for displaying collections of plants.
///
/// Formats each plant compactly as a list entry, without title handling,
/// allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
pub struct Plants(pub Vec<Plant>);

impl Plants {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plants in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the plant at the given index.
    pub fn get(&self, index: usize) -> Option<&Plant> {
        self.0.get(index)
    }

    /// Get an iterator over the plants.
    pub fn iter(&self) -> std::slice::Iter<'_, Plant> {
        self.0.iter()
    }
}

impl Index<usize> for Plants {
    type Output = Plant;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Plants {
    type Item = Plant;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plants {
    type Item = &'a Plant;
    type IntoIter = std::slice::Iter<'a, Plant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plants found.")
        } else {
            for plant in &self.0 {
                let native = if plant.native { ", native" } else { "" };
                let species = plant
                    .species
                    .as_deref()
                    .map(|s| format!(" [{s}]"))
                    .unwrap_or_default();
                writeln!(
                    f,
                    "- {}. {}{species} (x{}{native}, {} pts)",
                    plant.id, plant.name, plant.quantity, plant.care_points
                )?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a due report.
pub struct DueEntries(pub Vec<DueEntry>);

impl DueEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, DueEntry> {
        self.0.iter()
    }
}

impl fmt::Display for DueEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plants to evaluate.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying group membership facts.
pub struct Groups(pub Vec<GroupFact>);

impl Groups {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of groups in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, GroupFact> {
        self.0.iter()
    }
}

impl fmt::Display for Groups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No groups recorded.")
        } else {
            for group in &self.0 {
                write!(f, "{group}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying quest reconciliation outcomes.
pub struct Quests(pub Vec<QuestReconciliation>);

impl Quests {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of quests in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the quests.
    pub fn iter(&self) -> std::slice::Iter<'_, QuestReconciliation> {
        self.0.iter()
    }
}

impl fmt::Display for Quests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No active quests.")
        } else {
            for quest in &self.0 {
                write!(f, "{quest}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying achievement standings.
pub struct Achievements(pub Vec<AchievementStanding>);

impl Achievements {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of standings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the standings.
    pub fn iter(&self) -> std::slice::Iter<'_, AchievementStanding> {
        self.0.iter()
    }
}

impl fmt::Display for Achievements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No achievements defined.")
        } else {
            for standing in &self.0 {
                write!(f, "{standing}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{AchievementDefinition, AchievementState};

    fn create_test_plant() -> Plant {
        let created = Timestamp::from_second(1640995200).unwrap(); // 2022-01-01 00:00:00 UTC
        Plant {
            id: 1,
            name: "Sword Fern".to_string(),
            species: Some("Polystichum munitum".to_string()),
            quantity: 2,
            native: true,
            co2_offset_kg: 1.5,
            co2_offset_override_kg: None,
            water_weekdays: vec![1, 3, 5],
            water_time: Some("08:00".to_string()),
            last_watered_at: None,
            care_points: 15,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_plants_display() {
        let plants = Plants(vec![create_test_plant()]);
        let output = format!("{plants}");
        assert!(output.contains("Sword Fern"));
        assert!(output.contains("[Polystichum munitum]"));
        assert!(output.contains("x2, native"));

        let empty = Plants(vec![]);
        assert_eq!(format!("{empty}"), "No plants found.\n");
    }

    #[test]
    fn test_due_entries_display_empty() {
        let entries = DueEntries(vec![]);
        assert_eq!(format!("{entries}"), "No plants to evaluate.\n");
    }

    #[test]
    fn test_due_entries_display_statuses() {
        let due = DueEntry {
            plant: create_test_plant(),
            occurrence: None,
            due: true,
        };
        let unscheduled = DueEntry {
            plant: create_test_plant(),
            occurrence: None,
            due: false,
        };
        let entries = DueEntries(vec![due, unscheduled]);
        let output = format!("{entries}");
        assert!(output.contains("➤ Due"));
        assert!(output.contains("○ Unscheduled"));
    }

    #[test]
    fn test_achievements_display() {
        let standing = AchievementStanding {
            definition: AchievementDefinition {
                id: 1,
                code: "green_thumb".to_string(),
                title: "Green Thumb".to_string(),
                description: Some("Track your first plant".to_string()),
                points: 10,
            },
            state: AchievementState::Locked,
        };
        let output = format!("{}", Achievements(vec![standing]));
        assert!(output.contains("○ Locked"));
        assert!(output.contains("Green Thumb"));
        assert!(output.contains("Track your first plant"));
    }
}
