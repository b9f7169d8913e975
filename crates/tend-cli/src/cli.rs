//! Command handlers bridging parsed arguments to tracker operations.
//!
//! Each handler converts CLI argument structures into core parameters,
//! invokes the corresponding tracker operation, and renders the result
//! as markdown through the terminal renderer.

use anyhow::{Context, Result};
use jiff::{civil, tz::TimeZone, Timestamp, Zoned};
use tend_core::{
    display::{Achievements, CreateResult, DeleteResult, DueEntries, Groups, OperationStatus, Plants, Quests, WaterResult},
    Tracker,
};

use crate::args::{GroupCommands, PlantCommands};
use crate::renderer::TerminalRenderer;

/// Resolves the evaluation instant from the optional `--at` argument.
///
/// Accepts a zoned datetime, an instant, or a civil datetime (interpreted
/// in the system timezone). Without the argument, the current instant in
/// the system timezone is used.
pub fn resolve_at(at: Option<&str>) -> Result<Zoned> {
    let Some(raw) = at else {
        return Ok(Zoned::now());
    };

    if let Ok(zoned) = raw.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(TimeZone::system()));
    }

    let datetime: civil::DateTime = raw
        .parse()
        .with_context(|| format!("Invalid --at datetime: {raw}"))?;
    datetime
        .to_zoned(TimeZone::system())
        .with_context(|| format!("--at datetime is not valid in the system timezone: {raw}"))
}

/// CLI command dispatcher holding the tracker and output configuration.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    user: String,
    now: Zoned,
}

impl Cli {
    /// Create a new CLI dispatcher.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, user: String, now: Zoned) -> Self {
        Self {
            tracker,
            renderer,
            user,
            now,
        }
    }

    /// Handle plant subcommands.
    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Add(args) => {
                let plant = self
                    .tracker
                    .add_plant(&args.into(), &self.now)
                    .await
                    .context("Failed to add plant")?;
                self.renderer
                    .render(&format!("{}", CreateResult::new(plant)))
            }
            PlantCommands::List => {
                let plants = self
                    .tracker
                    .list_plants()
                    .await
                    .context("Failed to list plants")?;
                self.renderer
                    .render(&format!("# Plants\n\n{}", Plants(plants)))
            }
            PlantCommands::Show(args) => {
                let id = args.id;
                match self
                    .tracker
                    .get_plant(&args.into())
                    .await
                    .context("Failed to get plant")?
                {
                    Some(plant) => self.renderer.render(&format!("{plant}")),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(format!("Plant {id} not found"))
                    )),
                }
            }
            PlantCommands::Water(args) => {
                let plant = self
                    .tracker
                    .water_plant(&args.into(), &self.now)
                    .await
                    .context("Failed to water plant")?;
                self.renderer.render(&format!("{}", WaterResult::new(plant)))
            }
            PlantCommands::Remove(args) => {
                let id = args.id;
                match self
                    .tracker
                    .remove_plant(&args.into())
                    .await
                    .context("Failed to remove plant")?
                {
                    Some(plant) => self
                        .renderer
                        .render(&format!("{}", DeleteResult::new(plant))),
                    None => self.renderer.render(&format!(
                        "{}",
                        OperationStatus::failure(format!("Plant {id} not found"))
                    )),
                }
            }
            PlantCommands::Import(args) => {
                let imported = self
                    .tracker
                    .import_plants(&args.into(), &self.now)
                    .await
                    .context("Failed to import plants")?;
                self.renderer.render(&format!(
                    "{}\n{}",
                    OperationStatus::success(format!("Imported {} plants", imported.len())),
                    Plants(imported)
                ))
            }
        }
    }

    /// Handle group subcommands.
    pub async fn handle_group_command(&self, command: GroupCommands) -> Result<()> {
        match command {
            GroupCommands::Set(args) => {
                let group = self
                    .tracker
                    .set_group(&args.into())
                    .await
                    .context("Failed to record group")?;
                self.renderer.render(&format!(
                    "{}",
                    OperationStatus::success(format!(
                        "Recorded group '{}' with {} members",
                        group.name, group.member_count
                    ))
                ))
            }
            GroupCommands::List => {
                let groups = self
                    .tracker
                    .list_groups()
                    .await
                    .context("Failed to list groups")?;
                self.renderer
                    .render(&format!("# Groups\n\n{}", Groups(groups)))
            }
            GroupCommands::Remove(args) => {
                let removed = self
                    .tracker
                    .remove_group(&args.name)
                    .await
                    .context("Failed to remove group")?;
                let status = if removed {
                    OperationStatus::success(format!("Removed group '{}'", args.name))
                } else {
                    OperationStatus::failure(format!("Group '{}' not found", args.name))
                };
                self.renderer.render(&format!("{status}"))
            }
        }
    }

    /// Show which plants are due for watering.
    pub async fn due_report(&self) -> Result<()> {
        let entries = self
            .tracker
            .due_report(&self.now)
            .await
            .context("Failed to build due report")?;
        self.renderer
            .render(&format!("# Watering\n\n{}", DueEntries(entries)))
    }

    /// Run a full reconciliation pass and show the report.
    pub async fn reconcile(&self) -> Result<()> {
        let report = self
            .tracker
            .reconcile_now(&self.user, &self.now)
            .await
            .context("Failed to reconcile progress")?;
        self.renderer.render(&format!("{report}"))
    }

    /// Show today's quest status without writing anything.
    pub async fn quests(&self) -> Result<()> {
        let quests = self
            .tracker
            .quest_status(&self.user, &self.now)
            .await
            .context("Failed to read quest status")?;
        self.renderer
            .render(&format!("# Quests\n\n{}", Quests(quests)))
    }

    /// Show achievement standings without writing anything.
    pub async fn achievements(&self) -> Result<()> {
        let standings = self
            .tracker
            .achievement_standings(&self.user, &self.now)
            .await
            .context("Failed to read achievement standings")?;
        self.renderer
            .render(&format!("# Achievements\n\n{}", Achievements(standings)))
    }
}
