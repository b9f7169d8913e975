//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live
//! here, separated from the model definitions. The output is markdown
//! for rich terminal display, with status icons and structured sections.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    AchievementStanding, DueEntry, GroupFact, Plant, ProgressSnapshot, QuestReconciliation,
    ReconcileReport,
};

/// Short weekday names for a Sunday-zero weekday number list.
fn weekday_names(weekdays: &[u8]) -> String {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    weekdays
        .iter()
        .filter_map(|&n| NAMES.get(usize::from(n)).copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The watering schedule as a single human-readable line.
fn schedule_line(plant: &Plant) -> String {
    match (&plant.water_time, plant.water_weekdays.is_empty()) {
        (Some(time), false) => format!("{} at {time}", weekday_names(&plant.water_weekdays)),
        _ => "None".to_string(),
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        if let Some(species) = &self.species {
            writeln!(f, "- Species: {species}")?;
        }
        writeln!(f, "- Quantity: {}", self.quantity)?;
        writeln!(f, "- Native: {}", if self.native { "yes" } else { "no" })?;
        writeln!(f, "- CO2 offset: {:.1} kg", self.total_co2_offset_kg())?;
        writeln!(f, "- Watering schedule: {}", schedule_line(self))?;
        match &self.last_watered_at {
            Some(watered) => writeln!(f, "- Last watered: {}", LocalDateTime(watered))?,
            None => writeln!(f, "- Last watered: never")?,
        }
        writeln!(f, "- Care points: {}", self.care_points)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        Ok(())
    }
}

impl DueEntry {
    /// Status with a consistent icon prefix for display.
    pub fn status_with_icon(&self) -> &'static str {
        if self.due {
            "➤ Due"
        } else if self.occurrence.is_some() {
            "✓ Watered"
        } else {
            "○ Unscheduled"
        }
    }
}

impl fmt::Display for DueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.plant.id,
            self.plant.name,
            self.status_with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Schedule: {}", schedule_line(&self.plant))?;
        if let Some(occurrence) = &self.occurrence {
            writeln!(
                f,
                "- Latest occurrence: {}",
                occurrence.strftime("%Y-%m-%d %H:%M %Z")
            )?;
        }
        match &self.plant.last_watered_at {
            Some(watered) => writeln!(f, "- Last watered: {}", LocalDateTime(watered))?,
            None => writeln!(f, "- Last watered: never")?,
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for GroupFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}: {} members", self.name, self.member_count)
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Plants: {} ({} native)",
            self.total_plants, self.native_plants
        )?;
        writeln!(f, "- Watering units: {}", self.watering_units)?;
        writeln!(
            f,
            "- Watered today: {}",
            if self.watered_today { "yes" } else { "no" }
        )?;
        writeln!(
            f,
            "- Qualifying group: {}",
            if self.has_qualifying_group { "yes" } else { "no" }
        )?;
        writeln!(f, "- CO2 offset: {:.1} kg", self.co2_offset_kg)?;

        Ok(())
    }
}

impl fmt::Display for QuestReconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.completed { "✓" } else { "○" };
        writeln!(
            f,
            "- {icon} {} ({}/{}, {} pts)",
            self.definition.title,
            self.record.progress_count,
            self.definition.target_count,
            self.definition.points
        )?;
        if let Some(completed_at) = &self.record.completed_at {
            writeln!(f, "  - Completed: {}", LocalDateTime(completed_at))?;
        }

        Ok(())
    }
}

impl fmt::Display for AchievementStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} {} ({} pts)",
            self.state.with_icon(),
            self.definition.title,
            self.definition.points
        )?;
        if let Some(description) = &self.definition.description {
            writeln!(f, "  - {description}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Garden Progress")?;
        writeln!(f)?;
        write!(f, "{}", self.snapshot)?;

        writeln!(f, "\n## Quests")?;
        writeln!(f)?;
        if self.quests.is_empty() {
            writeln!(f, "No active quests.")?;
        } else {
            for quest in &self.quests {
                write!(f, "{quest}")?;
            }
        }

        writeln!(f, "\n## Achievements")?;
        writeln!(f)?;
        if !self.newly_awarded.is_empty() {
            for achievement in &self.newly_awarded {
                writeln!(f, "New: {} (+{} pts)", achievement.title, achievement.points)?;
            }
            writeln!(f)?;
        }
        for standing in &self.standings {
            write!(f, "{standing}")?;
        }

        Ok(())
    }
}
