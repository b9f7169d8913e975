//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and a `From` conversion into the core parameter type, so CLI concerns
//! (help text, flags, value parsing) stay here while the core types remain
//! interface-agnostic.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tend_core::params::{AddPlant, Id, ImportPlants, RemovePlant, SetGroup};

/// Main command-line interface for the Tend gardening tracker
///
/// Tend tracks your plants, their watering schedules, and your gardening
/// progress. It evaluates which plants are due for care, aggregates a
/// progress snapshot over everything you grow, and syncs daily quests and
/// achievements from it.
#[derive(Parser)]
#[command(version, about, name = "tend")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tend/tend.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User the quest and achievement records belong to
    #[arg(long, global = true, default_value = "default")]
    pub user: String,

    /// Evaluate at this instant instead of now (ISO-8601 datetime)
    #[arg(long, global = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tend CLI
///
/// The CLI is organized around plants, groups, and progress:
/// - `plant`: Operations for tracked plants (add, water, import, etc.)
/// - `group`: Garden group membership facts
/// - `due`: Evaluate which plants need watering
/// - `reconcile`: Sync quests and achievements from current progress
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plants
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Manage garden groups
    #[command(alias = "g")]
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },
    /// Show which plants are due for watering
    #[command(alias = "d")]
    Due,
    /// Sync quests and achievements from current progress
    #[command(alias = "r")]
    Reconcile,
    /// Show today's quest status
    #[command(alias = "q")]
    Quests,
    /// Show achievement standings
    #[command(alias = "a")]
    Achievements,
}

/// Add a new plant
#[derive(ClapArgs)]
pub struct AddPlantArgs {
    /// Display name of the plant
    pub name: String,
    /// Species or plant-type name
    #[arg(short, long, help = "Species or plant-type name")]
    pub species: Option<String>,
    /// Number of identical plants tracked by this record
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,
    /// Mark the plant as a protected native species
    #[arg(long)]
    pub native: bool,
    /// Per-unit CO2 offset estimate in kilograms
    #[arg(long, default_value_t = tend_core::models::DEFAULT_CO2_OFFSET_KG)]
    pub co2_offset: f64,
    /// Per-plant override of the per-unit CO2 offset
    #[arg(long)]
    pub co2_offset_override: Option<f64>,
    /// Watering weekdays as comma-separated numbers, 0 = Sunday .. 6 = Saturday
    #[arg(
        short = 'w',
        long,
        value_delimiter = ',',
        help = "Watering weekdays as comma-separated numbers (0 = Sunday .. 6 = Saturday)"
    )]
    pub water_weekdays: Vec<u8>,
    /// Watering time of day as HH:MM, 24-hour clock
    #[arg(short = 't', long, help = "Watering time of day as HH:MM (24-hour)")]
    pub water_time: Option<String>,
}

impl From<AddPlantArgs> for AddPlant {
    fn from(val: AddPlantArgs) -> Self {
        AddPlant {
            name: val.name,
            species: val.species,
            quantity: val.quantity,
            native: val.native,
            co2_offset_kg: val.co2_offset,
            co2_offset_override_kg: val.co2_offset_override,
            water_weekdays: val.water_weekdays,
            water_time: val.water_time,
            last_watered_at: None,
            care_points: 0,
        }
    }
}

/// Show details of a specific plant
#[derive(ClapArgs)]
pub struct ShowPlantArgs {
    /// ID of the plant to display
    #[arg(help = "Unique identifier of the plant to show details for")]
    pub id: u64,
}

impl From<ShowPlantArgs> for Id {
    fn from(val: ShowPlantArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record a watering
#[derive(ClapArgs)]
pub struct WaterPlantArgs {
    /// ID of the plant that was watered
    #[arg(help = "Unique identifier of the plant that was watered")]
    pub id: u64,
}

impl From<WaterPlantArgs> for Id {
    fn from(val: WaterPlantArgs) -> Self {
        Id { id: val.id }
    }
}

/// Remove a plant permanently
#[derive(ClapArgs)]
pub struct RemovePlantArgs {
    /// ID of the plant to remove
    #[arg(help = "Unique identifier of the plant to permanently remove")]
    pub id: u64,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemovePlantArgs> for RemovePlant {
    fn from(val: RemovePlantArgs) -> Self {
        RemovePlant {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Import plants from a JSON export file
#[derive(ClapArgs)]
pub struct ImportPlantsArgs {
    /// Path to the JSON export file
    #[arg(help = "Path to the JSON export file to import plants from")]
    pub path: String,
}

impl From<ImportPlantsArgs> for ImportPlants {
    fn from(val: ImportPlantsArgs) -> Self {
        ImportPlants { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a new plant
    #[command(alias = "a")]
    Add(AddPlantArgs),
    /// List all plants
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific plant
    #[command(alias = "s")]
    Show(ShowPlantArgs),
    /// Record a watering
    #[command(alias = "w")]
    Water(WaterPlantArgs),
    /// Remove a plant permanently
    #[command(aliases = ["d", "rm"])]
    Remove(RemovePlantArgs),
    /// Import plants from a JSON export file
    #[command(alias = "i")]
    Import(ImportPlantsArgs),
}

/// Record a group membership fact
#[derive(ClapArgs)]
pub struct SetGroupArgs {
    /// Group name
    pub name: String,
    /// Current member count of the group
    #[arg(help = "Current member count of the group")]
    pub member_count: i64,
}

impl From<SetGroupArgs> for SetGroup {
    fn from(val: SetGroupArgs) -> Self {
        SetGroup {
            name: val.name,
            member_count: val.member_count,
        }
    }
}

/// Remove a group membership fact
#[derive(ClapArgs)]
pub struct RemoveGroupArgs {
    /// Group name to remove
    pub name: String,
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Record (or update) a group membership fact
    #[command(alias = "s")]
    Set(SetGroupArgs),
    /// List recorded groups
    #[command(aliases = ["l", "ls"])]
    List,
    /// Remove a group membership fact
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveGroupArgs),
}
