//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::map_domain_error, mapper};
use crate::contract::AssetListFilter;
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

// ===== Category handlers =====

pub async fn list_categories(
    State(service): State<Arc<Service>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<CategoriesListResponse>, Problem> {
    let (limit, offset) = page.clamp();
    let (categories, total) = service
        .list_categories(limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CategoriesListResponse {
        items: categories.into_iter().map(|c| c.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_category(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let category = service
        .create_category(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn category_tree(
    State(service): State<Arc<Service>>,
) -> Result<Json<CategoryTreeResponse>, Problem> {
    let forest = service.category_tree().await.map_err(map_domain_error)?;

    let total = forest.len() as u64;
    Ok(Json(CategoryTreeResponse {
        items: mapper::build_tree(forest),
        total,
    }))
}

pub async fn get_category(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryDto>, Problem> {
    let category = service.get_category(id).await.map_err(map_domain_error)?;
    Ok(Json(category.into()))
}

pub async fn list_category_children(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryChildrenResponse>, Problem> {
    let children = service
        .category_children(id)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<CategoryDto> = children.into_iter().map(|c| c.into()).collect();
    let total = items.len() as u64;
    Ok(Json(CategoryChildrenResponse { items, total }))
}

pub async fn update_category(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoryRequest>,
) -> Result<Json<CategoryDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let category = service
        .update_category(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

pub async fn move_category(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveCategoryRequest>,
) -> Result<Json<CategoryDto>, Problem> {
    let category = service
        .move_category(id, req.parent_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

pub async fn delete_category(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_category(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Asset handlers =====

pub async fn list_assets(
    State(service): State<Arc<Service>>,
    Query(filter): Query<AssetFilterQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<AssetsListResponse>, Problem> {
    let status = match &filter.status {
        Some(raw) => Some(mapper::parse_status(raw)?),
        None => None,
    };
    let search = filter
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let (limit, offset) = page.clamp();
    let (assets, total) = service
        .list_assets(
            AssetListFilter {
                category_id: filter.category_id,
                space_id: filter.space_id,
                status,
                search,
            },
            limit,
            offset,
        )
        .await
        .map_err(map_domain_error)?;

    Ok(Json(AssetsListResponse {
        items: assets.into_iter().map(|a| a.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_asset(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateAssetRequest>,
) -> Result<(StatusCode, Json<AssetDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let asset = service
        .create_asset(req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(asset.into())))
}

pub async fn get_asset(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetDto>, Problem> {
    let asset = service.get_asset(id).await.map_err(map_domain_error)?;
    Ok(Json(asset.into()))
}

pub async fn update_asset(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAssetRequest>,
) -> Result<Json<AssetDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let asset = service
        .update_asset(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(asset.into()))
}

pub async fn change_asset_status(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeAssetStatusRequest>,
) -> Result<Json<AssetDto>, Problem> {
    let status = mapper::parse_status(&req.status)?;

    let asset = service
        .change_status(id, status)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(asset.into()))
}

pub async fn delete_asset(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service.delete_asset(id).await.map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
