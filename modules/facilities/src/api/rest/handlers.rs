//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::map_domain_error};
use crate::domain::Service;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sitekit::{PageQuery, Problem};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

// ===== Building handlers =====

pub async fn list_buildings(
    State(service): State<Arc<Service>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<BuildingsListResponse>, Problem> {
    let (limit, offset) = page.clamp();
    let (buildings, total) = service
        .list_buildings(limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BuildingsListResponse {
        items: buildings.into_iter().map(|b| b.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_building(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<BuildingDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let building = service
        .create_building(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(building.into())))
}

pub async fn get_building(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BuildingDto>, Problem> {
    let building = service.get_building(id).await.map_err(map_domain_error)?;
    Ok(Json(building.into()))
}

pub async fn update_building(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBuildingRequest>,
) -> Result<Json<BuildingDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let building = service
        .update_building(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(building.into()))
}

pub async fn delete_building(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_building(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_building_floors(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FloorsListResponse>, Problem> {
    let floors = service.list_floors(id).await.map_err(map_domain_error)?;

    let items: Vec<FloorDto> = floors.into_iter().map(|f| f.into()).collect();
    let total = items.len() as u64;
    Ok(Json(FloorsListResponse { items, total }))
}

pub async fn list_building_spaces(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SpacesListResponse>, Problem> {
    let spaces = service
        .list_building_spaces(id)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<SpaceDto> = spaces.into_iter().map(|s| s.into()).collect();
    let total = items.len() as u64;
    Ok(Json(SpacesListResponse { items, total }))
}

// ===== Floor handlers =====

pub async fn create_floor(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateFloorRequest>,
) -> Result<(StatusCode, Json<FloorDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let floor = service
        .create_floor(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(floor.into())))
}

pub async fn get_floor(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FloorDto>, Problem> {
    let floor = service.get_floor(id).await.map_err(map_domain_error)?;
    Ok(Json(floor.into()))
}

pub async fn update_floor(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFloorRequest>,
) -> Result<Json<FloorDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let floor = service
        .update_floor(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(floor.into()))
}

pub async fn delete_floor(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_floor(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_floor_spaces(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SpacesListResponse>, Problem> {
    let spaces = service.list_spaces(id).await.map_err(map_domain_error)?;

    let items: Vec<SpaceDto> = spaces.into_iter().map(|s| s.into()).collect();
    let total = items.len() as u64;
    Ok(Json(SpacesListResponse { items, total }))
}

// ===== Space handlers =====

pub async fn create_space(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateSpaceRequest>,
) -> Result<(StatusCode, Json<SpaceDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let space = service
        .create_space(req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(space.into())))
}

pub async fn get_space(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SpaceDto>, Problem> {
    let space = service.get_space(id).await.map_err(map_domain_error)?;
    Ok(Json(space.into()))
}

pub async fn update_space(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSpaceRequest>,
) -> Result<Json<SpaceDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let space = service
        .update_space(id, req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(space.into()))
}

pub async fn delete_space(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_space(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
