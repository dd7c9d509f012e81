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

// ===== Schedule handlers =====

pub async fn list_schedules(
    State(service): State<Arc<Service>>,
    Query(filter): Query<ScheduleFilterQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<SchedulesListResponse>, Problem> {
    let (limit, offset) = page.clamp();
    let (schedules, total) = service
        .list_schedules(filter.into(), limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SchedulesListResponse {
        items: schedules.into_iter().map(|s| s.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_schedule(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let schedule = service
        .create_schedule(req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(schedule.into())))
}

pub async fn get_schedule(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleDto>, Problem> {
    let schedule = service.get_schedule(id).await.map_err(map_domain_error)?;
    Ok(Json(schedule.into()))
}

pub async fn update_schedule(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateScheduleRequest>,
) -> Result<Json<ScheduleDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let schedule = service
        .update_schedule(id, req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(schedule.into()))
}

pub async fn delete_schedule(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_schedule(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Log handlers =====

pub async fn list_logs(
    State(service): State<Arc<Service>>,
    Query(filter): Query<LogFilterQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<LogsListResponse>, Problem> {
    let (limit, offset) = page.clamp();
    let (logs, total) = service
        .list_logs(filter.into(), limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(LogsListResponse {
        items: logs.into_iter().map(|l| l.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_log(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateLogRequest>,
) -> Result<(StatusCode, Json<LogDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let log = service
        .record_log(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(log.into())))
}

pub async fn get_log(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<LogDto>, Problem> {
    let log = service.get_log(id).await.map_err(map_domain_error)?;
    Ok(Json(log.into()))
}

pub async fn update_log(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLogRequest>,
) -> Result<Json<LogDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let log = service
        .update_log(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(log.into()))
}

pub async fn delete_log(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_log(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
