//! Achievement definitions, codes, and standings.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ProgressSnapshot;

/// Native plants required for the `native_protector` achievement.
pub const NATIVE_PROTECTOR_TARGET: u64 = 15;
/// Kilograms of estimated CO2 offset required for `carbon_champion`.
pub const CARBON_CHAMPION_TARGET_KG: f64 = 500.0;
/// Watering-equivalent units required for `master_waterer`.
pub const MASTER_WATERER_TARGET: i64 = 15;

/// An achievement definition read from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchievementDefinition {
    /// Unique identifier for the achievement definition
    pub id: u64,
    /// Stable machine-readable code, mapped to one predicate
    pub code: String,
    /// Display title of the achievement
    pub title: String,
    /// Optional description shown to the user
    pub description: Option<String>,
    /// Points the achievement is worth
    pub points: i64,
}

/// The fixed set of achievement codes known at compile time.
///
/// Each code maps to exactly one pure, total predicate over a
/// [`ProgressSnapshot`]. Definitions whose code does not parse evaluate as
/// locked rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementCode {
    /// At least one tracked plant
    GreenThumb,
    /// At least fifteen protected native plants
    NativeProtector,
    /// Belongs to a garden group of qualifying size
    CommunityGardener,
    /// At least 500 kg of cumulative estimated CO2 offset
    CarbonChampion,
    /// At least fifteen watering-equivalent care units
    MasterWaterer,
}

impl FromStr for AchievementCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green_thumb" => Ok(AchievementCode::GreenThumb),
            "native_protector" => Ok(AchievementCode::NativeProtector),
            "community_gardener" => Ok(AchievementCode::CommunityGardener),
            "carbon_champion" => Ok(AchievementCode::CarbonChampion),
            "master_waterer" => Ok(AchievementCode::MasterWaterer),
            _ => Err(format!("Unknown achievement code: {s}")),
        }
    }
}

impl AchievementCode {
    /// Stable string representation used as the store key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCode::GreenThumb => "green_thumb",
            AchievementCode::NativeProtector => "native_protector",
            AchievementCode::CommunityGardener => "community_gardener",
            AchievementCode::CarbonChampion => "carbon_champion",
            AchievementCode::MasterWaterer => "master_waterer",
        }
    }

    /// Evaluates this code's predicate against a snapshot.
    pub fn unlocked(&self, snapshot: &ProgressSnapshot) -> bool {
        match self {
            AchievementCode::GreenThumb => snapshot.total_plants >= 1,
            AchievementCode::NativeProtector => snapshot.native_plants >= NATIVE_PROTECTOR_TARGET,
            AchievementCode::CommunityGardener => snapshot.has_qualifying_group,
            AchievementCode::CarbonChampion => snapshot.co2_offset_kg >= CARBON_CHAMPION_TARGET_KG,
            AchievementCode::MasterWaterer => snapshot.watering_units >= MASTER_WATERER_TARGET,
        }
    }
}

/// Display state of one achievement for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementState {
    /// Persisted with an earned timestamp
    Earned(Timestamp),
    /// Predicate holds but the record is not yet persisted; a transient
    /// state that normally disappears once the award write completes
    Ready,
    /// Predicate does not hold
    Locked,
}

impl AchievementState {
    /// Status with a consistent icon prefix for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            AchievementState::Earned(_) => "✓ Earned",
            AchievementState::Ready => "➤ Ready",
            AchievementState::Locked => "○ Locked",
        }
    }
}

/// One achievement definition paired with its state for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStanding {
    /// The achievement definition
    pub definition: AchievementDefinition,
    /// The user's state for this achievement
    pub state: AchievementState,
}
