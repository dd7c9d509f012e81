//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/TryFrom implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract::{self, SpaceKind};
use sitekit::Problem;
use std::str::FromStr;

// ===== Building conversions =====

impl From<contract::Building> for BuildingDto {
    fn from(building: contract::Building) -> Self {
        Self {
            id: building.id,
            code: building.code,
            name: building.name,
            address: building.address,
            city: building.city,
            notes: building.notes,
            created_at: building.created_at,
            updated_at: building.updated_at,
        }
    }
}

impl From<CreateBuildingRequest> for contract::NewBuilding {
    fn from(req: CreateBuildingRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            address: req.address,
            city: req.city,
            notes: req.notes,
        }
    }
}

impl From<UpdateBuildingRequest> for contract::UpdateBuilding {
    fn from(req: UpdateBuildingRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            address: req.address,
            city: req.city,
            notes: req.notes,
        }
    }
}

// ===== Floor conversions =====

impl From<contract::Floor> for FloorDto {
    fn from(floor: contract::Floor) -> Self {
        Self {
            id: floor.id,
            building_id: floor.building_id,
            level: floor.level,
            name: floor.name,
            created_at: floor.created_at,
            updated_at: floor.updated_at,
        }
    }
}

impl From<CreateFloorRequest> for contract::NewFloor {
    fn from(req: CreateFloorRequest) -> Self {
        Self {
            building_id: req.building_id,
            level: req.level,
            name: req.name,
        }
    }
}

impl From<UpdateFloorRequest> for contract::UpdateFloor {
    fn from(req: UpdateFloorRequest) -> Self {
        Self {
            level: req.level,
            name: req.name,
        }
    }
}

// ===== Space conversions =====

impl From<contract::Space> for SpaceDto {
    fn from(space: contract::Space) -> Self {
        Self {
            id: space.id,
            floor_id: space.floor_id,
            code: space.code,
            name: space.name,
            kind: space.kind.as_str().to_string(),
            capacity: space.capacity,
            area_sqm: space.area_sqm,
            created_at: space.created_at,
            updated_at: space.updated_at,
        }
    }
}

impl TryFrom<CreateSpaceRequest> for contract::NewSpace {
    type Error = Problem;

    fn try_from(req: CreateSpaceRequest) -> Result<Self, Self::Error> {
        let kind = parse_kind(&req.kind)?;
        Ok(Self {
            floor_id: req.floor_id,
            code: req.code,
            name: req.name,
            kind,
            capacity: req.capacity,
            area_sqm: req.area_sqm,
        })
    }
}

impl TryFrom<UpdateSpaceRequest> for contract::UpdateSpace {
    type Error = Problem;

    fn try_from(req: UpdateSpaceRequest) -> Result<Self, Self::Error> {
        let kind = parse_kind(&req.kind)?;
        Ok(Self {
            code: req.code,
            name: req.name,
            kind,
            capacity: req.capacity,
            area_sqm: req.area_sqm,
        })
    }
}

// Unknown enum strings are a validation problem, not a parse panic
fn parse_kind(raw: &str) -> Result<SpaceKind, Problem> {
    SpaceKind::from_str(raw).map_err(|message| Problem::invalid_field("kind", message))
}
