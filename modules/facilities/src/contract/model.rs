//! Contract models for the facilities module
//!
//! Transport-agnostic domain types used across module boundaries.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

/// A managed building on a site
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: Uuid,
    /// Short unique building code, e.g. "HQ" or "PLANT-2"
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A floor within a building
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub id: Uuid,
    pub building_id: Uuid,
    /// Floor level; 0 is ground, negatives are basements
    pub level: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A bookable/usable space on a floor
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub id: Uuid,
    pub floor_id: Uuid,
    /// Space code, unique within its floor, e.g. "2.14"
    pub code: String,
    pub name: String,
    pub kind: SpaceKind,
    pub capacity: Option<i32>,
    pub area_sqm: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Enumerated space usage kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    Office,
    MeetingRoom,
    Storage,
    Lab,
    CommonArea,
    Technical,
    Other,
}

impl SpaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceKind::Office => "office",
            SpaceKind::MeetingRoom => "meeting_room",
            SpaceKind::Storage => "storage",
            SpaceKind::Lab => "lab",
            SpaceKind::CommonArea => "common_area",
            SpaceKind::Technical => "technical",
            SpaceKind::Other => "other",
        }
    }
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(SpaceKind::Office),
            "meeting_room" => Ok(SpaceKind::MeetingRoom),
            "storage" => Ok(SpaceKind::Storage),
            "lab" => Ok(SpaceKind::Lab),
            "common_area" => Ok(SpaceKind::CommonArea),
            "technical" => Ok(SpaceKind::Technical),
            "other" => Ok(SpaceKind::Other),
            other => Err(format!("unknown space kind '{other}'")),
        }
    }
}

/// Input for creating a building
#[derive(Debug, Clone)]
pub struct NewBuilding {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

/// Full-replace update for a building
#[derive(Debug, Clone)]
pub struct UpdateBuilding {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

/// Input for creating a floor
#[derive(Debug, Clone)]
pub struct NewFloor {
    pub building_id: Uuid,
    pub level: i32,
    pub name: String,
}

/// Full-replace update for a floor
#[derive(Debug, Clone)]
pub struct UpdateFloor {
    pub level: i32,
    pub name: String,
}

/// Input for creating a space
#[derive(Debug, Clone)]
pub struct NewSpace {
    pub floor_id: Uuid,
    pub code: String,
    pub name: String,
    pub kind: SpaceKind,
    pub capacity: Option<i32>,
    pub area_sqm: Option<f64>,
}

/// Full-replace update for a space; the owning floor is immutable
#[derive(Debug, Clone)]
pub struct UpdateSpace {
    pub code: String,
    pub name: String,
    pub kind: SpaceKind,
    pub capacity: Option<i32>,
    pub area_sqm: Option<f64>,
}

/// Active-entity counts for the portal dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacilityCounts {
    pub buildings: u64,
    pub floors: u64,
    pub spaces: u64,
}
