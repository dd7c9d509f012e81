//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::map_domain_error, mapper};
use crate::contract::{NewAttachment, NewComment, NewWorkOrder};
use crate::domain::Service;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sitekit::{AuthContext, PageQuery, Problem};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

// ===== Work order handlers =====

pub async fn list_work_orders(
    State(service): State<Arc<Service>>,
    Query(filter): Query<WorkOrderFilterQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<WorkOrdersListResponse>, Problem> {
    let (limit, offset) = page.clamp();
    let (orders, total) = service
        .list_work_orders(filter.try_into()?, limit, offset)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(WorkOrdersListResponse {
        items: orders.into_iter().map(|o| o.into()).collect(),
        total,
        limit,
        offset,
    }))
}

pub async fn create_work_order(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Json(req): Json<CreateWorkOrderRequest>,
) -> Result<(StatusCode, Json<WorkOrderDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let mut input: NewWorkOrder = req.try_into()?;
    if input.requested_by.is_none() {
        input.requested_by = Some(ctx.user_id);
    }

    let order = service
        .create_work_order(input)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(order.into())))
}

pub async fn get_work_order(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkOrderDto>, Problem> {
    let order = service.get_work_order(id).await.map_err(map_domain_error)?;
    Ok(Json(order.into()))
}

pub async fn update_work_order(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkOrderRequest>,
) -> Result<Json<WorkOrderDto>, Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let order = service
        .update_work_order(id, req.try_into()?)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(order.into()))
}

pub async fn delete_work_order(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    service
        .delete_work_order(id)
        .await
        .map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn change_status(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeStatusRequest>,
) -> Result<Json<WorkOrderDto>, Problem> {
    let status = mapper::parse_status(&req.status)?;
    let order = service
        .change_status(id, status)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(order.into()))
}

pub async fn assign(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignRequest>,
) -> Result<Json<WorkOrderDto>, Problem> {
    let order = service
        .assign(id, req.assigned_to)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(order.into()))
}

// ===== Comment handlers =====

pub async fn list_comments(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentsListResponse>, Problem> {
    let comments = service.comments_for(id).await.map_err(map_domain_error)?;
    let items: Vec<CommentDto> = comments.into_iter().map(|c| c.into()).collect();
    let total = items.len() as u64;
    Ok(Json(CommentsListResponse { items, total }))
}

pub async fn create_comment(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentDto>), Problem> {
    req.validate().map_err(|e| Problem::from_validation_errors(&e))?;

    let comment = service
        .add_comment(
            id,
            NewComment {
                author_id: Some(ctx.user_id),
                body: req.body,
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

pub async fn delete_comment(
    State(service): State<Arc<Service>>,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Problem> {
    service
        .delete_comment(id, comment_id)
        .await
        .map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Attachment handlers =====

pub async fn list_attachments(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AttachmentsListResponse>, Problem> {
    let attachments = service
        .attachments_for(id)
        .await
        .map_err(map_domain_error)?;
    let items: Vec<AttachmentDto> = attachments.into_iter().map(|a| a.into()).collect();
    let total = items.len() as u64;
    Ok(Json(AttachmentsListResponse { items, total }))
}

/// Accepts a multipart body whose first part is the file
pub async fn upload_attachment(
    State(service): State<Arc<Service>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AttachmentDto>), Problem> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| Problem::invalid_field("file", format!("malformed multipart body: {e}")))?
        .ok_or_else(|| Problem::invalid_field("file", "a file part is required"))?;

    let file_name = field
        .file_name()
        .map(|name| name.to_string())
        .ok_or_else(|| Problem::invalid_field("file", "the part must carry a file name"))?;
    let content_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| Problem::invalid_field("file", format!("could not read the uploaded file: {e}")))?;

    let attachment = service
        .add_attachment(
            id,
            NewAttachment {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
                uploaded_by: Some(ctx.user_id),
            },
        )
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(attachment.into())))
}

pub async fn download_attachment(
    State(service): State<Arc<Service>>,
    Path((id, attachment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, Problem> {
    let (attachment, bytes) = service
        .open_attachment(id, attachment_id)
        .await
        .map_err(map_domain_error)?;

    // Quotes would terminate the header value early
    let file_name = attachment.file_name.replace('"', "'");
    Ok((
        [
            (header::CONTENT_TYPE, attachment.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

pub async fn delete_attachment(
    State(service): State<Arc<Service>>,
    Path((id, attachment_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, Problem> {
    service
        .delete_attachment(id, attachment_id)
        .await
        .map_err(map_domain_error)?;
    Ok(StatusCode::NO_CONTENT)
}
